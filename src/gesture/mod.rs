// SPDX-License-Identifier: MPL-2.0
//! Gesture interpretation: drag decisions, velocity tracking and scroll
//! gating.

pub mod interpreter;
pub mod scroll;
pub mod velocity;

pub use interpreter::{ThresholdCrossing, ThresholdTracker, Translation};
pub use scroll::{ScrollGate, ScrollObserver, ScrollSnapshot};
pub use velocity::VelocityTracker;
