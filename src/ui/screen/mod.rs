// SPDX-License-Identifier: MPL-2.0
//! Drag-to-dismiss sheet screen.
//!
//! A [`SheetScreen`] follows pan gestures, springs back or leaves the
//! screen on release, and drives the provider's background scale through a
//! [`SheetContext`](crate::ui::provider::SheetContext). The host forwards
//! [`Message`]s and frame ticks and receives lifecycle [`Event`]s back.
//!
//! ```text
//! Idle -> Dragging -> Closing    -> Idle
//!                  -> Cancelling -> Idle
//! ```

mod component;
mod phase;
mod settings;
mod view;

pub use component::{Event, Message, SheetScreen};
pub use phase::Phase;
pub use settings::{CloseNotify, ScreenSettings};
