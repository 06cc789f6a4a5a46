// SPDX-License-Identifier: MPL-2.0
//! Scrollable wrapper that reports its position to a sheet screen.

use crate::gesture::ScrollSnapshot;
use iced::widget::scrollable::Viewport;
use iced::widget::Scrollable;
use iced::{Element, Length};

/// Wraps `content` in a vertical scrollable that publishes a
/// [`ScrollSnapshot`] on every scroll tick.
pub fn scroll_handler<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    on_scroll: impl Fn(ScrollSnapshot) -> Message + 'a,
) -> Scrollable<'a, Message> {
    Scrollable::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(move |viewport: Viewport| on_scroll(snapshot(&viewport)))
}

/// Extracts the vertical extents the scroll observer needs.
#[must_use]
pub fn snapshot(viewport: &Viewport) -> ScrollSnapshot {
    ScrollSnapshot {
        offset: viewport.absolute_offset().y,
        content_extent: viewport.content_bounds().height,
        viewport_extent: viewport.bounds().height,
    }
}
