// SPDX-License-Identifier: MPL-2.0
//! Spring animation primitives.
//!
//! Components own their [`AnimatedValue`]s and advance them from frame
//! ticks; nothing here schedules frames on its own.

pub mod spring;
pub mod value;

pub use spring::SpringState;
pub use value::AnimatedValue;
