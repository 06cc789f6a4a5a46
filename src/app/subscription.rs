// SPDX-License-Identifier: MPL-2.0
//! Frame subscription for the demo.

use super::Message;
use iced::{window, Subscription};

/// Frames are only requested while something animates, so an idle demo
/// does not redraw.
pub fn create_frame_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        window::frames().map(Message::Frame)
    } else {
        Subscription::none()
    }
}
