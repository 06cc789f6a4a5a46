// SPDX-License-Identifier: MPL-2.0
//! Pointer velocity estimation for pan gestures.

use iced::{Point, Vector};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Number of samples kept.
const HISTORY_SIZE: usize = 20;

/// Only samples this recent contribute to the velocity.
const HORIZON: Duration = Duration::from_millis(100);

/// A pointer that has not moved for this long is considered stopped.
pub const ASSUME_STOPPED: Duration = Duration::from_millis(40);

/// Tracks recent pointer positions and estimates release velocity in
/// pixels per second.
#[derive(Debug, Clone, Default)]
pub struct VelocityTracker {
    samples: VecDeque<(Instant, Point)>,
}

impl VelocityTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a pointer position.
    pub fn add(&mut self, at: Instant, position: Point) {
        if self.samples.len() == HISTORY_SIZE {
            self.samples.pop_front();
        }
        self.samples.push_back((at, position));
    }

    /// Drops every sample.
    pub fn reset(&mut self) {
        self.samples.clear();
    }

    /// Velocity over the recent horizon, as seen at `now`.
    ///
    /// Zero when fewer than two recent samples exist or when the pointer has
    /// rested longer than [`ASSUME_STOPPED`].
    #[must_use]
    pub fn velocity(&self, now: Instant) -> Vector {
        let Some(&(newest_time, newest)) = self.samples.back() else {
            return Vector::ZERO;
        };
        if now.saturating_duration_since(newest_time) > ASSUME_STOPPED {
            return Vector::ZERO;
        }

        let oldest = self
            .samples
            .iter()
            .find(|(time, _)| newest_time.saturating_duration_since(*time) <= HORIZON);

        match oldest {
            Some(&(oldest_time, oldest)) if oldest_time < newest_time => {
                let secs = (newest_time - oldest_time).as_secs_f32();
                Vector::new((newest.x - oldest.x) / secs, (newest.y - oldest.y) / secs)
            }
            _ => Vector::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tracker_has_zero_velocity() {
        let tracker = VelocityTracker::new();
        assert_eq!(tracker.velocity(Instant::now()), Vector::ZERO);
    }

    #[test]
    fn steady_motion_yields_constant_velocity() {
        let start = Instant::now();
        let mut tracker = VelocityTracker::new();
        for i in 0..5u16 {
            let at = start + Duration::from_millis(u64::from(i) * 10);
            tracker.add(at, Point::new(0.0, f32::from(i) * 10.0));
        }
        let velocity = tracker.velocity(start + Duration::from_millis(40));
        assert!((velocity.y - 1_000.0).abs() < 1.0, "got {velocity:?}");
        assert!(velocity.x.abs() < f32::EPSILON);
    }

    #[test]
    fn old_samples_fall_outside_horizon() {
        let start = Instant::now();
        let mut tracker = VelocityTracker::new();
        tracker.add(start, Point::new(0.0, 0.0));
        tracker.add(start + Duration::from_millis(300), Point::new(0.0, 10.0));
        tracker.add(start + Duration::from_millis(320), Point::new(0.0, 30.0));
        let velocity = tracker.velocity(start + Duration::from_millis(320));
        assert!((velocity.y - 1_000.0).abs() < 1.0, "got {velocity:?}");
    }

    #[test]
    fn resting_pointer_reports_zero() {
        let start = Instant::now();
        let mut tracker = VelocityTracker::new();
        tracker.add(start, Point::new(0.0, 0.0));
        tracker.add(start + Duration::from_millis(10), Point::new(0.0, 50.0));
        let later = start + Duration::from_millis(200);
        assert_eq!(tracker.velocity(later), Vector::ZERO);
    }

    #[test]
    fn history_is_bounded() {
        let start = Instant::now();
        let mut tracker = VelocityTracker::new();
        for i in 0..100u64 {
            tracker.add(start + Duration::from_millis(i), Point::ORIGIN);
        }
        assert_eq!(tracker.samples.len(), HISTORY_SIZE);
        tracker.reset();
        assert!(tracker.samples.is_empty());
    }
}
