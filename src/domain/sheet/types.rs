// SPDX-License-Identifier: MPL-2.0
//! Core value types shared by the provider, the screen and the drag
//! interpreter.

// =============================================================================
// SpringConfig
// =============================================================================

/// Tuning parameters of a damped spring.
///
/// The integrator accelerates with `(-stiffness * x - damping * v) / mass`,
/// where `x` is the displacement from the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub damping: f32,
    pub stiffness: f32,
    pub mass: f32,
    /// Initial velocity in units per second. `None` keeps the current velocity.
    pub velocity: Option<f32>,
    /// Displacement under which the spring may settle.
    pub rest_displacement_threshold: f32,
    /// Speed under which the spring may settle.
    pub rest_speed_threshold: f32,
}

impl SpringConfig {
    /// Spring driving the sheet's translation.
    pub const SCREEN: Self = Self::new(15.0, 60.0, 0.6);
    /// Spring driving the background scale.
    pub const PROVIDER: Self = Self::new(20.0, 300.0, 0.3);
    /// Spring used for opacity and radius when no config is given.
    pub const GENTLE: Self = Self::new(10.0, 100.0, 1.0);

    /// Creates a spring with the default rest thresholds.
    #[must_use]
    pub const fn new(damping: f32, stiffness: f32, mass: f32) -> Self {
        Self {
            damping,
            stiffness,
            mass,
            velocity: None,
            rest_displacement_threshold: 0.01,
            rest_speed_threshold: 0.01,
        }
    }

    /// Returns a copy that starts with the given velocity.
    #[must_use]
    pub fn with_velocity(mut self, velocity: f32) -> Self {
        self.velocity = Some(velocity);
        self
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::SCREEN
    }
}

// =============================================================================
// Drag directions
// =============================================================================

/// A single drag direction, in screen coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragDirection {
    Up,
    Down,
    Left,
    Right,
}

impl DragDirection {
    /// Returns true for `Up` and `Down`.
    #[must_use]
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }

    /// Sign of a translation moving in this direction.
    #[must_use]
    pub fn sign(self) -> f32 {
        match self {
            Self::Down | Self::Right => 1.0,
            Self::Up | Self::Left => -1.0,
        }
    }
}

/// Which directions respond to gesture input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragDirections {
    pub to_top: bool,
    pub to_bottom: bool,
    pub to_left: bool,
    pub to_right: bool,
}

impl DragDirections {
    /// Only downward drags dismiss.
    pub const DOWN_ONLY: Self = Self {
        to_top: false,
        to_bottom: true,
        to_left: false,
        to_right: false,
    };

    /// Returns whether the given direction is enabled.
    #[must_use]
    pub fn allows(self, direction: DragDirection) -> bool {
        match direction {
            DragDirection::Up => self.to_top,
            DragDirection::Down => self.to_bottom,
            DragDirection::Left => self.to_left,
            DragDirection::Right => self.to_right,
        }
    }

    /// Returns whether any horizontal direction is enabled.
    #[must_use]
    pub fn any_horizontal(self) -> bool {
        self.to_left || self.to_right
    }
}

impl Default for DragDirections {
    fn default() -> Self {
        Self::DOWN_ONLY
    }
}

// =============================================================================
// ResizeType
// =============================================================================

/// How the background content reacts while a sheet is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizeType {
    /// Background starts scaled up and relaxes to normal as the sheet leaves.
    Incremental,
    /// Background shrinks while the sheet is open.
    #[default]
    Decremental,
}

// =============================================================================
// Gesture and scroll samples
// =============================================================================

/// One pan-gesture update: translation since the gesture began and the
/// current velocity, both in logical pixels (per second for velocity).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureSample {
    pub translation_x: f32,
    pub translation_y: f32,
    pub velocity_x: f32,
    pub velocity_y: f32,
}

impl GestureSample {
    /// Creates a sample with zero velocity.
    #[must_use]
    pub fn translation(x: f32, y: f32) -> Self {
        Self {
            translation_x: x,
            translation_y: y,
            ..Self::default()
        }
    }

    /// Returns a copy with the given velocity.
    #[must_use]
    pub fn with_velocity(mut self, x: f32, y: f32) -> Self {
        self.velocity_x = x;
        self.velocity_y = y;
        self
    }

    /// Largest absolute velocity component.
    #[must_use]
    pub fn speed(&self) -> f32 {
        self.velocity_x.abs().max(self.velocity_y.abs())
    }
}

/// Position snapshot of a nested scrollable region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    pub is_at_top: bool,
    pub is_at_bottom: bool,
    pub scroll_y: f32,
    pub velocity: f32,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            is_at_top: true,
            is_at_bottom: false,
            scroll_y: 0.0,
            velocity: 0.0,
        }
    }
}

// =============================================================================
// Platform
// =============================================================================

/// Target platform family, passed explicitly to the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Ios,
    Android,
    Web,
    Desktop,
}

impl Platform {
    /// Platform family of the current compilation target.
    #[must_use]
    pub fn current() -> Self {
        if cfg!(target_os = "ios") {
            Self::Ios
        } else if cfg!(target_os = "android") {
            Self::Android
        } else if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Desktop
        }
    }

    /// Resolves what the sheet may do on this platform.
    #[must_use]
    pub fn capabilities(self, enable_for_web: bool) -> Capabilities {
        match self {
            Self::Ios | Self::Desktop => Capabilities {
                background_scale: true,
                spring_scale: true,
                gestures: true,
            },
            // Springing the root scale flickers on Android.
            Self::Android => Capabilities {
                background_scale: false,
                spring_scale: false,
                gestures: true,
            },
            Self::Web => Capabilities {
                background_scale: false,
                spring_scale: true,
                gestures: enable_for_web,
            },
        }
    }
}

/// Features available on a given platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Screens may drive the background scale.
    pub background_scale: bool,
    /// Scale changes are spring-animated rather than applied immediately.
    pub spring_scale: bool,
    /// Sheets respond to drag gestures at all.
    pub gestures: bool,
}
