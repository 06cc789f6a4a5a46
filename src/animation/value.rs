// SPDX-License-Identifier: MPL-2.0
//! Animated scalar owned by a component.

use super::spring::SpringState;
use crate::domain::sheet::SpringConfig;
use std::time::Duration;

/// A scalar that is either at rest or being driven toward a target by a
/// spring. Starting a new animation supersedes the one in flight.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedValue {
    state: SpringState,
    spring: Option<SpringConfig>,
}

impl AnimatedValue {
    /// Creates a value at rest.
    #[must_use]
    pub fn new(value: f32) -> Self {
        Self {
            state: SpringState {
                position: value,
                velocity: 0.0,
                target: value,
            },
            spring: None,
        }
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.state.position
    }

    /// Value the current animation is heading to (the value itself when idle).
    #[must_use]
    pub fn target(&self) -> f32 {
        self.state.target
    }

    /// Current velocity in units per second.
    #[must_use]
    pub fn velocity(&self) -> f32 {
        self.state.velocity
    }

    /// Whether a spring is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.spring.is_some()
    }

    /// Jumps to `value` immediately, cancelling any animation.
    pub fn set(&mut self, value: f32) {
        self.spring = None;
        self.state = SpringState {
            position: value,
            velocity: 0.0,
            target: value,
        };
    }

    /// Springs toward `target`. A velocity carried by `spring` replaces the
    /// current velocity.
    pub fn animate_to(&mut self, target: f32, spring: SpringConfig) {
        if let Some(velocity) = spring.velocity {
            self.state.velocity = velocity;
        }
        self.state.target = target;
        self.spring = Some(spring);
    }

    /// Stops where it is.
    pub fn cancel(&mut self) {
        self.spring = None;
        self.state.target = self.state.position;
        self.state.velocity = 0.0;
    }

    /// Advances the animation. Returns `true` while still animating.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        let Some(spring) = self.spring else {
            return false;
        };
        if self.state.step(&spring, elapsed) {
            self.spring = None;
            return false;
        }
        true
    }
}

impl Default for AnimatedValue {
    fn default() -> Self {
        Self::new(0.0)
    }
}
