// SPDX-License-Identifier: MPL-2.0
//! Sheet newtypes.
//!
//! Type-safe wrappers for the sheet's tuning values, ensuring they are
//! always within valid ranges.

// =============================================================================
// Scale Factor Bounds
// =============================================================================

/// Resting background scale bounds for the decremental resize type.
pub mod scale_bounds {
    /// Smallest resting scale a sheet may request.
    pub const MIN: f32 = 0.5;
    /// Largest resting scale (no shrink at all).
    pub const MAX: f32 = 1.0;
    /// Default resting scale.
    pub const DEFAULT: f32 = 0.83;
    /// Resting scale used by the incremental resize type.
    pub const INCREMENTAL_START: f32 = 1.15;
}

// =============================================================================
// ScaleFactor
// =============================================================================

/// Background scale applied while a decremental sheet is open.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFactor(f32);

impl ScaleFactor {
    /// Creates a new scale factor, clamping the value to the valid range.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(scale_bounds::MIN, scale_bounds::MAX))
    }

    /// Returns the raw scale value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        Self(scale_bounds::DEFAULT)
    }
}

// =============================================================================
// DragThreshold
// =============================================================================

/// Drag distance in logical pixels past which a release dismisses the sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragThreshold(f32);

impl DragThreshold {
    /// Default threshold in pixels.
    pub const DEFAULT: f32 = 150.0;

    /// Creates a new threshold. Negative values become zero.
    #[must_use]
    pub fn new(pixels: f32) -> Self {
        if pixels.is_nan() {
            return Self::default();
        }
        Self(pixels.max(0.0))
    }

    /// Returns the threshold in pixels.
    #[must_use]
    pub fn pixels(self) -> f32 {
        self.0
    }
}

impl Default for DragThreshold {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

// =============================================================================
// BorderRadius
// =============================================================================

/// Corner radius of the sheet container in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderRadius(f32);

impl BorderRadius {
    /// Default initial radius.
    pub const DEFAULT: f32 = 50.0;

    /// Creates a new radius. Negative values become zero.
    #[must_use]
    pub fn new(pixels: f32) -> Self {
        if pixels.is_nan() {
            return Self::default();
        }
        Self(pixels.max(0.0))
    }

    /// Returns the radius in pixels.
    #[must_use]
    pub fn pixels(self) -> f32 {
        self.0
    }
}

impl Default for BorderRadius {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

// =============================================================================
// Progress
// =============================================================================

/// Drag distance normalized against the relevant viewport extent.
///
/// Always within `[0, 1]`, whatever the input magnitude.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Progress(f32);

impl Progress {
    /// No drag at all.
    pub const ZERO: Self = Self(0.0);
    /// Dragged across the whole extent.
    pub const FULL: Self = Self(1.0);

    /// Creates a progress value, clamping to `[0, 1]`. NaN maps to zero.
    #[must_use]
    pub fn new(ratio: f32) -> Self {
        if ratio.is_nan() {
            return Self::ZERO;
        }
        Self(ratio.clamp(0.0, 1.0))
    }

    /// Computes `distance / extent`, clamped. A non-positive extent yields zero.
    #[must_use]
    pub fn from_distance(distance: f32, extent: f32) -> Self {
        if extent <= 0.0 {
            return Self::ZERO;
        }
        Self::new(distance.abs() / extent)
    }

    /// Returns the raw ratio.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_factor_clamps() {
        assert!((ScaleFactor::new(0.1).value() - scale_bounds::MIN).abs() < f32::EPSILON);
        assert!((ScaleFactor::new(3.0).value() - scale_bounds::MAX).abs() < f32::EPSILON);
        assert!((ScaleFactor::new(0.9).value() - 0.9).abs() < f32::EPSILON);
    }

    #[test]
    fn scale_factor_nan_falls_back_to_default() {
        assert_eq!(ScaleFactor::new(f32::NAN), ScaleFactor::default());
    }

    #[test]
    fn drag_threshold_rejects_negative() {
        assert!(DragThreshold::new(-20.0).pixels().abs() < f32::EPSILON);
        assert!((DragThreshold::default().pixels() - 150.0).abs() < f32::EPSILON);
    }

    #[test]
    fn border_radius_rejects_negative() {
        assert!(BorderRadius::new(-1.0).pixels().abs() < f32::EPSILON);
        assert!((BorderRadius::default().pixels() - 50.0).abs() < f32::EPSILON);
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(Progress::new(-0.5), Progress::ZERO);
        assert_eq!(Progress::new(7.0), Progress::FULL);
        assert_eq!(Progress::new(f32::NAN), Progress::ZERO);
    }

    #[test]
    fn progress_from_distance_handles_degenerate_extent() {
        assert_eq!(Progress::from_distance(100.0, 0.0), Progress::ZERO);
        assert_eq!(Progress::from_distance(100.0, -5.0), Progress::ZERO);
        assert!((Progress::from_distance(-200.0, 800.0).value() - 0.25).abs() < f32::EPSILON);
        assert_eq!(Progress::from_distance(5000.0, 800.0), Progress::FULL);
    }
}
