// SPDX-License-Identifier: MPL-2.0
//! Domain layer - sheet value types with ZERO external dependencies.
//!
//! This module contains pure domain types and value objects. It has no
//! dependencies on external crates (except `std`) so the drag logic stays
//! testable without a renderer.
//!
//! # Modules
//!
//! - [`sheet`]: Sheet types ([`SpringConfig`](sheet::SpringConfig),
//!   [`DragDirections`](sheet::DragDirections), [`ResizeType`](sheet::ResizeType),
//!   [`GestureSample`](sheet::GestureSample), [`ScrollState`](sheet::ScrollState),
//!   [`Progress`](sheet::Progress))

pub mod sheet;
