// SPDX-License-Identifier: MPL-2.0
//! Drag interpretation.
//!
//! Pure functions that turn a pan gesture into the sheet's visual state and
//! its close decision. Nothing here touches animation state; the screen
//! component feeds the results into its animated values.

use super::scroll::ScrollGate;
use crate::domain::sheet::{
    scale_bounds, BorderRadius, DragDirection, DragDirections, DragThreshold, GestureSample,
    Progress, ResizeType, ScaleFactor,
};
use iced::Size;

/// Release speed (px/s) above which a short drag still dismisses.
pub const FLING_VELOCITY: f32 = 500.0;

/// Minimum drag distance for a fling to dismiss.
pub const FLING_MIN_DISTANCE: f32 = 50.0;

/// Opacity reached at half the axis extent when opacity follows the gesture.
pub const GESTURE_MIN_OPACITY: f32 = 0.5;

/// Translation the sheet is allowed to follow, after direction and scroll
/// gating.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Translation {
    pub x: f32,
    pub y: f32,
}

impl Translation {
    /// No movement.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Largest absolute component.
    #[must_use]
    pub fn distance(self) -> f32 {
        self.x.abs().max(self.y.abs())
    }

    /// Direction of the dominant component, if any movement registered.
    /// Ties go to the vertical axis.
    #[must_use]
    pub fn dominant_direction(self) -> Option<DragDirection> {
        if self.x == 0.0 && self.y == 0.0 {
            return None;
        }
        if self.y.abs() >= self.x.abs() {
            Some(if self.y > 0.0 {
                DragDirection::Down
            } else {
                DragDirection::Up
            })
        } else {
            Some(if self.x > 0.0 {
                DragDirection::Right
            } else {
                DragDirection::Left
            })
        }
    }
}

/// Keeps only the components of `sample` that move in an enabled direction
/// and, vertically, that the scroll gate lets through.
#[must_use]
pub fn permitted_translation(
    sample: &GestureSample,
    directions: DragDirections,
    gate: ScrollGate,
) -> Translation {
    let dy = sample.translation_y;
    let dx = sample.translation_x;

    let y = if dy > 0.0 && directions.allows(DragDirection::Down) && gate.allow_down {
        dy
    } else if dy < 0.0 && directions.allows(DragDirection::Up) && gate.allow_up {
        dy
    } else {
        0.0
    };

    let x = if dx > 0.0 && directions.allows(DragDirection::Right) {
        dx
    } else if dx < 0.0 && directions.allows(DragDirection::Left) {
        dx
    } else {
        0.0
    };

    Translation { x, y }
}

/// Extent of the axis the drag is travelling along.
#[must_use]
pub fn axis_extent(translation: Translation, viewport: Size) -> f32 {
    match translation.dominant_direction() {
        Some(direction) if !direction.is_vertical() => viewport.width,
        _ => viewport.height,
    }
}

/// Drag progress against the relevant viewport extent.
#[must_use]
pub fn progress(translation: Translation, viewport: Size) -> Progress {
    Progress::from_distance(translation.distance(), axis_extent(translation, viewport))
}

/// Linear interpolation between `from` and `to`.
#[must_use]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Background scale while the sheet rests open.
#[must_use]
pub fn resting_scale(resize_type: ResizeType, scale_factor: ScaleFactor) -> f32 {
    match resize_type {
        ResizeType::Incremental => scale_bounds::INCREMENTAL_START,
        ResizeType::Decremental => scale_factor.value(),
    }
}

/// Background scale for the given drag progress: relaxes from the resting
/// scale to 1 as the sheet is dragged away.
#[must_use]
pub fn background_scale(
    resize_type: ResizeType,
    scale_factor: ScaleFactor,
    progress: Progress,
) -> f32 {
    lerp(resting_scale(resize_type, scale_factor), 1.0, progress.value())
}

/// Scale of the sheet content itself for the given drag progress.
#[must_use]
pub fn content_scale(resize_type: ResizeType, scale_factor: ScaleFactor, progress: Progress) -> f32 {
    match resize_type {
        ResizeType::Incremental => lerp(scale_bounds::INCREMENTAL_START, 1.0, progress.value()),
        ResizeType::Decremental => lerp(1.0, scale_factor.value(), progress.value()),
    }
}

/// Sheet opacity when it follows the gesture: fades to
/// [`GESTURE_MIN_OPACITY`] by half the axis extent.
#[must_use]
pub fn gesture_opacity(progress: Progress) -> f32 {
    lerp(1.0, GESTURE_MIN_OPACITY, (progress.value() * 2.0).clamp(0.0, 1.0))
}

/// Corner radius when it follows the gesture.
#[must_use]
pub fn synced_radius(initial: BorderRadius, progress: Progress) -> f32 {
    lerp(initial.pixels(), 0.0, progress.value())
}

/// Release decision: past the threshold, or a fast enough flick that went
/// far enough.
#[must_use]
pub fn should_close(distance: f32, speed: f32, threshold: DragThreshold) -> bool {
    distance > threshold.pixels() || (speed > FLING_VELOCITY && distance > FLING_MIN_DISTANCE)
}

/// Off-screen translation the sheet leaves toward, along the direction it
/// was dragged.
#[must_use]
pub fn close_target(translation: Translation, viewport: Size) -> Translation {
    match translation.dominant_direction() {
        Some(direction) if !direction.is_vertical() => Translation {
            x: direction.sign() * viewport.width,
            y: 0.0,
        },
        Some(direction) => Translation {
            x: 0.0,
            y: direction.sign() * viewport.height,
        },
        None => Translation {
            x: 0.0,
            y: viewport.height,
        },
    }
}

// =============================================================================
// Threshold edge detection
// =============================================================================

/// Crossing reported by [`ThresholdTracker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdCrossing {
    /// The drag went past the threshold: releasing now would close.
    Passed,
    /// The drag came back under the threshold.
    Returned,
}

/// Edge-triggered threshold state: reports each crossing once, never every
/// tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThresholdTracker {
    passed: bool,
}

impl ThresholdTracker {
    /// Forgets the previous state; call at gesture begin.
    pub fn reset(&mut self) {
        self.passed = false;
    }

    /// Whether the last update was past the threshold.
    #[must_use]
    pub fn is_passed(&self) -> bool {
        self.passed
    }

    /// Feeds the current drag distance.
    pub fn update(&mut self, distance: f32, threshold: DragThreshold) -> Option<ThresholdCrossing> {
        let passed = distance > threshold.pixels();
        if passed == self.passed {
            return None;
        }
        self.passed = passed;
        Some(if passed {
            ThresholdCrossing::Passed
        } else {
            ThresholdCrossing::Returned
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    const VIEWPORT: Size = Size {
        width: 400.0,
        height: 800.0,
    };

    fn all_directions() -> DragDirections {
        DragDirections {
            to_top: true,
            to_bottom: true,
            to_left: true,
            to_right: true,
        }
    }

    #[test]
    fn downward_drag_is_permitted_when_enabled() {
        let sample = GestureSample::translation(0.0, 120.0);
        let t = permitted_translation(&sample, DragDirections::DOWN_ONLY, ScrollGate::OPEN);
        assert_eq!(t, Translation { x: 0.0, y: 120.0 });
    }

    #[test]
    fn disabled_direction_registers_nothing() {
        let sample = GestureSample::translation(-30.0, -300.0);
        let t = permitted_translation(&sample, DragDirections::DOWN_ONLY, ScrollGate::OPEN);
        assert_eq!(t, Translation::ZERO);
        assert!(!should_close(t.distance(), 2_000.0, DragThreshold::default()));
    }

    #[test]
    fn closed_scroll_gate_blocks_vertical_drag() {
        let sample = GestureSample::translation(0.0, 200.0);
        let gate = ScrollGate {
            allow_down: false,
            allow_up: true,
        };
        let t = permitted_translation(&sample, all_directions(), gate);
        assert_eq!(t, Translation::ZERO);
    }

    #[test]
    fn scroll_gate_does_not_affect_horizontal_drag() {
        let sample = GestureSample::translation(-90.0, 0.0);
        let gate = ScrollGate {
            allow_down: false,
            allow_up: false,
        };
        let t = permitted_translation(&sample, all_directions(), gate);
        assert_eq!(t, Translation { x: -90.0, y: 0.0 });
    }

    #[test]
    fn progress_uses_height_for_vertical_and_width_for_horizontal() {
        let vertical = Translation { x: 0.0, y: 200.0 };
        let horizontal = Translation { x: 200.0, y: 0.0 };
        assert_abs_diff_eq!(progress(vertical, VIEWPORT).value(), 0.25);
        assert_abs_diff_eq!(progress(horizontal, VIEWPORT).value(), 0.5);
    }

    #[test]
    fn progress_is_clamped_beyond_extent() {
        let t = Translation {
            x: 0.0,
            y: 10_000.0,
        };
        assert_eq!(progress(t, VIEWPORT), Progress::FULL);
        assert_eq!(progress(Translation::ZERO, VIEWPORT), Progress::ZERO);
        assert_eq!(progress(t, Size::ZERO), Progress::ZERO);
    }

    #[test]
    fn threshold_alone_decides_slow_releases() {
        let threshold = DragThreshold::new(150.0);
        for d in [0.0, 50.0, 100.0, 149.9, 150.0] {
            assert!(!should_close(d, 100.0, threshold), "closed at {d}");
        }
        for d in [150.1, 200.0, 900.0] {
            assert!(should_close(d, 0.0, threshold), "stayed open at {d}");
            assert!(should_close(d, 5_000.0, threshold));
        }
    }

    #[test]
    fn fast_flick_overrides_threshold() {
        let threshold = DragThreshold::new(150.0);
        assert!(should_close(60.0, 501.0, threshold));
        assert!(!should_close(60.0, 500.0, threshold));
        assert!(!should_close(50.0, 2_000.0, threshold));
    }

    #[test]
    fn decremental_scales_are_monotonic() {
        let factor = ScaleFactor::new(0.83);
        let mut previous_content = f32::INFINITY;
        let mut previous_background = f32::NEG_INFINITY;
        for step in 0..=20 {
            let p = Progress::new(step as f32 / 20.0);
            let content = content_scale(ResizeType::Decremental, factor, p);
            let background = background_scale(ResizeType::Decremental, factor, p);
            assert!(content <= previous_content);
            assert!(background >= previous_background);
            previous_content = content;
            previous_background = background;
        }
        assert_abs_diff_eq!(
            content_scale(ResizeType::Decremental, factor, Progress::ZERO),
            1.0
        );
        assert_abs_diff_eq!(
            content_scale(ResizeType::Decremental, factor, Progress::FULL),
            0.83
        );
        assert_abs_diff_eq!(
            background_scale(ResizeType::Decremental, factor, Progress::ZERO),
            0.83
        );
    }

    #[test]
    fn incremental_scale_relaxes_from_enlarged_to_normal() {
        let factor = ScaleFactor::default();
        let mut previous = f32::INFINITY;
        for step in 0..=20 {
            let p = Progress::new(step as f32 / 20.0);
            let scale = content_scale(ResizeType::Incremental, factor, p);
            assert!(scale <= previous);
            previous = scale;
        }
        assert_abs_diff_eq!(
            content_scale(ResizeType::Incremental, factor, Progress::ZERO),
            1.15
        );
        assert_abs_diff_eq!(
            background_scale(ResizeType::Incremental, factor, Progress::FULL),
            1.0
        );
    }

    #[test]
    fn gesture_opacity_bottoms_out_at_half_extent() {
        assert_abs_diff_eq!(gesture_opacity(Progress::ZERO), 1.0);
        assert_abs_diff_eq!(gesture_opacity(Progress::new(0.25)), 0.75);
        assert_abs_diff_eq!(gesture_opacity(Progress::new(0.5)), 0.5);
        assert_abs_diff_eq!(gesture_opacity(Progress::FULL), 0.5);
    }

    #[test]
    fn radius_shrinks_with_progress() {
        let initial = BorderRadius::new(40.0);
        assert_abs_diff_eq!(synced_radius(initial, Progress::ZERO), 40.0);
        assert_abs_diff_eq!(synced_radius(initial, Progress::new(0.5)), 20.0);
        assert_abs_diff_eq!(synced_radius(initial, Progress::FULL), 0.0);
    }

    #[test]
    fn close_target_follows_drag_direction() {
        let down = close_target(Translation { x: 0.0, y: 200.0 }, VIEWPORT);
        let up = close_target(Translation { x: 0.0, y: -200.0 }, VIEWPORT);
        let left = close_target(Translation { x: -200.0, y: 10.0 }, VIEWPORT);
        assert_eq!(down, Translation { x: 0.0, y: 800.0 });
        assert_eq!(up, Translation { x: 0.0, y: -800.0 });
        assert_eq!(left, Translation { x: -400.0, y: 0.0 });
    }

    #[test]
    fn threshold_tracker_fires_once_per_crossing() {
        let threshold = DragThreshold::new(150.0);
        let mut tracker = ThresholdTracker::default();
        let crossings: Vec<_> = [10.0, 100.0, 151.0, 180.0, 300.0, 140.0, 20.0, 160.0]
            .into_iter()
            .filter_map(|d| tracker.update(d, threshold))
            .collect();
        assert_eq!(
            crossings,
            vec![
                ThresholdCrossing::Passed,
                ThresholdCrossing::Returned,
                ThresholdCrossing::Passed
            ]
        );
        assert!(tracker.is_passed());
        tracker.reset();
        assert!(!tracker.is_passed());
    }
}
