// SPDX-License-Identifier: MPL-2.0
pub mod gesture_detector;
pub mod transformed;

pub use gesture_detector::{gesture_detector, GestureDetector};
pub use transformed::Transformed;
