// SPDX-License-Identifier: MPL-2.0
//! Damped spring integration.
//!
//! Springs are stepped with semi-implicit Euler at a fixed sub-step so the
//! result does not depend on the frame rate.

use crate::domain::sheet::SpringConfig;
use std::time::Duration;

/// Largest integration step in seconds (~120 Hz).
const MAX_STEP_SECS: f32 = 1.0 / 120.0;

/// Frames longer than this are treated as a hitch and shortened.
const MAX_FRAME_SECS: f32 = 0.064;

/// One spring-driven scalar: position, velocity and target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringState {
    pub position: f32,
    pub velocity: f32,
    pub target: f32,
}

impl SpringState {
    /// Advances the spring by `elapsed`. Returns `true` once it has settled
    /// on the target.
    pub fn step(&mut self, config: &SpringConfig, elapsed: Duration) -> bool {
        let mass = if config.mass > 0.0 { config.mass } else { 1.0 };
        let mut remaining = elapsed.as_secs_f32().min(MAX_FRAME_SECS);

        while remaining > 0.0 {
            let dt = remaining.min(MAX_STEP_SECS);
            let displacement = self.position - self.target;
            let acceleration =
                (-config.stiffness * displacement - config.damping * self.velocity) / mass;
            self.velocity += acceleration * dt;
            self.position += self.velocity * dt;
            remaining -= dt;
        }

        if !self.position.is_finite() || !self.velocity.is_finite() {
            self.settle();
            return true;
        }

        let at_rest = (self.position - self.target).abs() < config.rest_displacement_threshold
            && self.velocity.abs() < config.rest_speed_threshold;
        if at_rest {
            self.settle();
        }
        at_rest
    }

    fn settle(&mut self) {
        self.position = self.target;
        self.velocity = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_until_settled(state: &mut SpringState, config: &SpringConfig) -> usize {
        let frame = Duration::from_millis(16);
        for frame_count in 1..=2_000 {
            if state.step(config, frame) {
                return frame_count;
            }
        }
        panic!("spring never settled: {state:?}");
    }

    #[test]
    fn spring_settles_exactly_on_target() {
        let mut state = SpringState {
            position: 0.0,
            velocity: 0.0,
            target: 800.0,
        };
        run_until_settled(&mut state, &SpringConfig::SCREEN);
        assert!((state.position - 800.0).abs() < f32::EPSILON);
        assert!(state.velocity.abs() < f32::EPSILON);
    }

    #[test]
    fn underdamped_spring_overshoots() {
        let mut state = SpringState {
            position: 0.0,
            velocity: 0.0,
            target: 1.0,
        };
        let mut peak: f32 = 0.0;
        for _ in 0..200 {
            let done = state.step(&SpringConfig::GENTLE, Duration::from_millis(16));
            peak = peak.max(state.position);
            if done {
                break;
            }
        }
        assert!(peak > 1.0, "expected overshoot, peak was {peak}");
    }

    #[test]
    fn zero_elapsed_does_not_move() {
        let mut state = SpringState {
            position: 10.0,
            velocity: 0.0,
            target: 0.0,
        };
        state.step(&SpringConfig::SCREEN, Duration::ZERO);
        assert!((state.position - 10.0).abs() < f32::EPSILON);
    }

    #[test]
    fn long_frames_are_clamped() {
        let mut long = SpringState {
            position: 0.0,
            velocity: 0.0,
            target: 100.0,
        };
        let mut capped = long;
        long.step(&SpringConfig::SCREEN, Duration::from_secs(5));
        capped.step(
            &SpringConfig::SCREEN,
            Duration::from_secs_f32(MAX_FRAME_SECS),
        );
        assert!((long.position - capped.position).abs() < 1e-3);
    }

    #[test]
    fn non_positive_mass_is_treated_as_unit_mass() {
        let config = SpringConfig::new(10.0, 100.0, 0.0);
        let mut state = SpringState {
            position: 0.0,
            velocity: 0.0,
            target: 1.0,
        };
        state.step(&config, Duration::from_millis(16));
        assert!(state.position.is_finite());
        assert!(state.position > 0.0);
    }
}
