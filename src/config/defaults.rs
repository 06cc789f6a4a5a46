// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Springs**: Sheet and background spring tuning
//! - **Drag**: Threshold and fling limits
//! - **Appearance**: Scale factor and corner radius
//! - **Lifecycle**: Open timing

use crate::domain::sheet::{BorderRadius, DragThreshold, SpringConfig};

// ==========================================================================
// Spring Defaults
// ==========================================================================

/// Sheet translation spring.
pub const DEFAULT_SCREEN_SPRING: SpringConfig = SpringConfig::SCREEN;

/// Background scale spring.
pub const DEFAULT_PROVIDER_SPRING: SpringConfig = SpringConfig::PROVIDER;

/// Spring for opacity and corner radius.
pub const DEFAULT_FADE_SPRING: SpringConfig = SpringConfig::GENTLE;

// ==========================================================================
// Drag Defaults
// ==========================================================================

/// Distance past which a release closes the sheet (pixels).
pub const DEFAULT_DRAG_THRESHOLD: f32 = DragThreshold::DEFAULT;

pub use crate::gesture::interpreter::{FLING_MIN_DISTANCE, FLING_VELOCITY};

// ==========================================================================
// Appearance Defaults
// ==========================================================================

pub use crate::domain::sheet::scale_bounds::DEFAULT as DEFAULT_SCALE_FACTOR;

/// Initial corner radius of the sheet (pixels).
pub const DEFAULT_BORDER_RADIUS: f32 = BorderRadius::DEFAULT;

// ==========================================================================
// Lifecycle Defaults
// ==========================================================================

/// Delay between the open-start and open-end events (milliseconds).
pub const DEFAULT_OPEN_END_DELAY_MS: u64 = 300;
