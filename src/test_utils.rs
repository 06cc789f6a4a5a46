// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.
//! Spring animations settle exactly on their targets, so most assertions can keep
//! the default epsilon.

pub use approx::assert_abs_diff_eq;
