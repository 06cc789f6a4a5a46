// SPDX-License-Identifier: MPL-2.0
//! `iced_sheet` is a drag-to-dismiss sheet presentation for the Iced GUI framework.
//!
//! A [`SheetProvider`](ui::provider::SheetProvider) scales the content behind
//! a sheet, and a [`SheetScreen`](ui::screen::SheetScreen) follows pan
//! gestures with spring physics, fading and corner radius morphing, and
//! decides on release whether to close or spring back.
//!
//! # Modules
//!
//! - [`domain`] - Pure value types (springs, directions, clamped newtypes)
//! - [`animation`] - Damped spring integration and animated values
//! - [`gesture`] - Drag interpretation, velocity tracking, scroll gating
//! - [`ui`] - Provider, screen, scroll adapter and custom widgets
//! - [`config`] - `sheet.toml` loading and saving
//! - [`app`] - The `sheet-demo` application

#![doc(html_root_url = "https://docs.rs/iced_sheet/0.1.0")]

pub mod animation;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod gesture;
pub mod ui;

#[cfg(test)]
mod test_utils;
