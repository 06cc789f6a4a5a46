// SPDX-License-Identifier: MPL-2.0
//! Sheet domain types.
//!
//! Value objects for the sheet presentation that are independent of any
//! presentation framework.

pub mod newtypes;
pub mod types;

pub use newtypes::{scale_bounds, BorderRadius, DragThreshold, Progress, ScaleFactor};
pub use types::{
    Capabilities, DragDirection, DragDirections, GestureSample, Platform, ResizeType, ScrollState,
    SpringConfig,
};
