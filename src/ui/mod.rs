// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: the
//! host owns their state, forwards messages and frame ticks, and maps their
//! views into its own message type.
//!
//! - [`provider`] - Background scale coordinator and sheet context
//! - [`screen`] - Drag-to-dismiss sheet
//! - [`scroll_handler`] - Scrollable that reports its position to a sheet
//! - [`widgets`] - Custom Iced widgets (gesture detector, transform wrapper)
//! - [`styles`] - Sheet container styles

pub mod provider;
pub mod screen;
pub mod scroll_handler;
pub mod styles;
pub mod widgets;
