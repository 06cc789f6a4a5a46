// SPDX-License-Identifier: MPL-2.0
//! Sheet screen state and message handling.

use super::phase::Phase;
use super::settings::{CloseNotify, ScreenSettings};
use crate::animation::AnimatedValue;
use crate::domain::sheet::{
    DragDirection, GestureSample, Progress, ResizeType, ScrollState, SpringConfig,
};
use crate::gesture::interpreter::{self, ThresholdCrossing, ThresholdTracker, Translation};
use crate::gesture::{ScrollGate, ScrollObserver, ScrollSnapshot};
use crate::ui::provider::SheetContext;
use iced::Size;
use std::time::{Duration, Instant};

/// Spring for opacity and corner radius.
const FADE_SPRING: SpringConfig = SpringConfig::GENTLE;

/// Messages for the sheet screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// A pan moved past the recognizer's slop.
    GestureBegan,
    GestureMoved(GestureSample),
    /// The pointer of the active pan was released.
    GestureEnded(GestureSample),
    /// The embedded scrollable moved.
    Scrolled(ScrollSnapshot),
    /// The sheet was laid out at a new size.
    Resized(Size),
}

/// Lifecycle notifications for the host application.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// The sheet started driving the background toward its resting scale.
    OpenStart,
    /// The open delay elapsed.
    OpenEnd,
    /// The drag crossed the threshold: releasing now closes the sheet.
    CloseStart,
    /// The drag came back under the threshold.
    BelowThreshold,
    /// The sheet was dismissed.
    CloseEnd,
    /// The embedded scrollable reported a new position, or a drag began
    /// over scrollable content.
    ScrollStateChanged(ScrollState),
}

/// What the screen last learned from its provider, kept so `view` does not
/// need the context.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ProviderView {
    resize_type: ResizeType,
    gestures: bool,
    background_scale: bool,
}

impl Default for ProviderView {
    fn default() -> Self {
        Self {
            resize_type: ResizeType::default(),
            gestures: true,
            background_scale: false,
        }
    }
}

/// A drag-to-dismiss sheet.
#[derive(Debug, Clone)]
pub struct SheetScreen {
    pub(super) settings: ScreenSettings,
    phase: Phase,
    pub(super) translate_x: AnimatedValue,
    pub(super) translate_y: AnimatedValue,
    pub(super) opacity: AnimatedValue,
    pub(super) border_radius: AnimatedValue,
    threshold: ThresholdTracker,
    scroll: ScrollObserver,
    gate: ScrollGate,
    viewport: Size,
    provider: ProviderView,
    open_end_in: Option<Duration>,
    close_pending: bool,
    closed: bool,
    mounted: bool,
}

impl SheetScreen {
    /// Creates an unmounted screen. Call [`mount`](Self::mount) once it is
    /// shown.
    #[must_use]
    pub fn new(settings: ScreenSettings) -> Self {
        Self {
            settings,
            phase: Phase::Idle,
            translate_x: AnimatedValue::new(0.0),
            translate_y: AnimatedValue::new(0.0),
            opacity: AnimatedValue::new(1.0),
            border_radius: AnimatedValue::new(settings.initial_border_radius.pixels()),
            threshold: ThresholdTracker::default(),
            scroll: ScrollObserver::new(),
            gate: ScrollGate::OPEN,
            viewport: Size::ZERO,
            provider: ProviderView::default(),
            open_end_in: None,
            close_pending: false,
            closed: false,
            mounted: false,
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Starts the screen: the background springs to its resting scale and
    /// the open timer starts.
    pub fn mount(&mut self, ctx: &mut SheetContext<'_>) -> Vec<Event> {
        if self.mounted {
            return Vec::new();
        }
        self.mounted = true;
        self.sync(ctx);

        if !self.drives_background() {
            return Vec::new();
        }

        ctx.set_scale(self.resting_scale(), None);
        self.open_end_in = Some(self.settings.open_end_delay);
        tracing::debug!(scale = self.resting_scale(), "sheet opened");
        vec![Event::OpenStart]
    }

    /// Halts every animation and gives the background back its full scale.
    /// Later messages and ticks are ignored.
    pub fn unmount(&mut self, ctx: &mut SheetContext<'_>) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.translate_x.cancel();
        self.translate_y.cancel();
        self.opacity.cancel();
        self.border_radius.cancel();
        self.open_end_in = None;
        self.close_pending = false;
        self.phase = Phase::Idle;

        if self.drives_background() {
            ctx.set_scale(1.0, None);
        }
        tracing::debug!("sheet unmounted");
    }

    /// Replaces the settings. A resting sheet re-applies its resting scale
    /// and corner radius.
    pub fn set_settings(&mut self, settings: ScreenSettings, ctx: &mut SheetContext<'_>) {
        self.settings = settings;
        if !self.mounted {
            self.border_radius.set(settings.initial_border_radius.pixels());
            return;
        }
        self.sync(ctx);
        if self.phase == Phase::Idle && !self.closed {
            self.border_radius.set(settings.initial_border_radius.pixels());
            if self.drives_background() {
                ctx.set_scale(self.resting_scale(), None);
            }
        }
    }

    // =========================================================================
    // Update
    // =========================================================================

    /// Handles a screen message and returns the lifecycle events it caused.
    pub fn handle(&mut self, message: Message, ctx: &mut SheetContext<'_>) -> Vec<Event> {
        if !self.mounted {
            tracing::trace!(?message, "sheet message ignored after unmount");
            return Vec::new();
        }
        self.sync(ctx);

        match message {
            Message::GestureBegan => self.begin(),
            Message::GestureMoved(sample) => self.drag(&sample, ctx),
            Message::GestureEnded(sample) => self.release(&sample, ctx),
            Message::Scrolled(snapshot) => {
                let state = self.scroll.observe(snapshot, Instant::now());
                vec![Event::ScrollStateChanged(state)]
            }
            Message::Resized(size) => {
                self.viewport = size;
                Vec::new()
            }
        }
    }

    /// Advances every animation by one frame.
    pub fn tick(&mut self, elapsed: Duration, ctx: &mut SheetContext<'_>) -> Vec<Event> {
        if !self.mounted {
            return Vec::new();
        }
        self.sync(ctx);

        let mut events = Vec::new();

        if let Some(remaining) = self.open_end_in {
            if elapsed >= remaining {
                self.open_end_in = None;
                events.push(Event::OpenEnd);
            } else {
                self.open_end_in = Some(remaining - elapsed);
            }
        }

        let x = self.translate_x.tick(elapsed);
        let y = self.translate_y.tick(elapsed);
        let opacity = self.opacity.tick(elapsed);
        let radius = self.border_radius.tick(elapsed);
        let animating = x || y || opacity || radius;

        if self.phase.is_settling() && !animating {
            if self.phase == Phase::Closing && self.close_pending {
                self.close_pending = false;
                events.push(Event::CloseEnd);
            }
            tracing::debug!(from = ?self.phase, "sheet settled");
            self.phase = Phase::Idle;
        }

        events
    }

    fn begin(&mut self) -> Vec<Event> {
        if !self.provider.gestures || self.closed || !self.phase.accepts_drag() {
            tracing::trace!(phase = ?self.phase, "gesture not claimed");
            return Vec::new();
        }

        let mut events = Vec::new();
        let gate = if self.settings.scrollable {
            events.push(Event::ScrollStateChanged(self.scroll.state()));
            self.scroll.begin_drag()
        } else {
            ScrollGate::OPEN
        };

        let directions = self.settings.drag_directions;
        let claimable = directions.any_horizontal()
            || (directions.allows(DragDirection::Down) && gate.allow_down)
            || (directions.allows(DragDirection::Up) && gate.allow_up);
        if !claimable {
            tracing::trace!("gesture left to the scrollable content");
            return events;
        }

        self.gate = gate;
        self.threshold.reset();
        self.translate_x.cancel();
        self.translate_y.cancel();
        self.border_radius.cancel();
        if self.settings.opacity_on_gesture_move {
            self.opacity.cancel();
        } else {
            self.opacity.set(1.0);
        }

        tracing::debug!(from = ?self.phase, "sheet drag began");
        self.phase = Phase::Dragging;
        events
    }

    fn drag(&mut self, sample: &GestureSample, ctx: &mut SheetContext<'_>) -> Vec<Event> {
        if self.phase != Phase::Dragging {
            return Vec::new();
        }

        let translation =
            interpreter::permitted_translation(sample, self.settings.drag_directions, self.gate);
        self.translate_x.set(translation.x);
        self.translate_y.set(translation.y);

        let mut events = Vec::new();
        match self
            .threshold
            .update(translation.distance(), self.settings.drag_threshold)
        {
            Some(ThresholdCrossing::Passed) => events.push(Event::CloseStart),
            Some(ThresholdCrossing::Returned) => events.push(Event::BelowThreshold),
            None => {}
        }

        let progress = interpreter::progress(translation, self.viewport);

        if self.drives_background() && !self.settings.disable_sync_scale_on_drag_down {
            ctx.set_scale(
                interpreter::background_scale(
                    self.provider.resize_type,
                    self.settings.scale_factor,
                    progress,
                ),
                None,
            );
        }

        if self.settings.opacity_on_gesture_move {
            self.opacity.set(interpreter::gesture_opacity(progress));
        }

        if self.settings.container_radius_sync {
            self.border_radius.set(interpreter::synced_radius(
                self.settings.initial_border_radius,
                progress,
            ));
        }

        events
    }

    fn release(&mut self, sample: &GestureSample, ctx: &mut SheetContext<'_>) -> Vec<Event> {
        if self.phase != Phase::Dragging {
            return Vec::new();
        }

        let translation =
            interpreter::permitted_translation(sample, self.settings.drag_directions, self.gate);
        let distance = translation.distance();
        let spring = self.settings.spring;
        // An axis the sheet never moved along keeps still on release.
        let velocity_x = if translation.x.abs() < f32::EPSILON { 0.0 } else { sample.velocity_x };
        let velocity_y = if translation.y.abs() < f32::EPSILON { 0.0 } else { sample.velocity_y };

        if interpreter::should_close(distance, sample.speed(), self.settings.drag_threshold) {
            let target = interpreter::close_target(translation, self.viewport);
            self.translate_x
                .animate_to(target.x, spring.with_velocity(velocity_x));
            self.translate_y
                .animate_to(target.y, spring.with_velocity(velocity_y));
            self.opacity.animate_to(0.0, FADE_SPRING);
            self.border_radius.animate_to(0.0, FADE_SPRING);
            if self.drives_background() {
                ctx.set_scale(1.0, None);
            }

            self.phase = Phase::Closing;
            self.closed = true;
            tracing::debug!(distance, speed = sample.speed(), "sheet closing");

            match self.settings.close_notify {
                CloseNotify::OnDispatch => vec![Event::CloseEnd],
                CloseNotify::OnSettle => {
                    self.close_pending = true;
                    Vec::new()
                }
            }
        } else {
            self.translate_x
                .animate_to(0.0, spring.with_velocity(velocity_x));
            self.translate_y
                .animate_to(0.0, spring.with_velocity(velocity_y));
            self.opacity.animate_to(1.0, FADE_SPRING);
            self.border_radius
                .animate_to(self.settings.initial_border_radius.pixels(), FADE_SPRING);
            if self.drives_background() {
                ctx.set_scale(self.resting_scale(), None);
            }

            self.phase = Phase::Cancelling;
            tracing::debug!(distance, "sheet drag cancelled");
            Vec::new()
        }
    }

    fn sync(&mut self, ctx: &SheetContext<'_>) {
        let capabilities = ctx.capabilities();
        self.provider = ProviderView {
            resize_type: ctx.resize_type(),
            gestures: ctx.is_enabled(),
            background_scale: capabilities.background_scale,
        };
    }

    /// Whether this screen moves the provider's background scale.
    fn drives_background(&self) -> bool {
        self.provider.background_scale && !self.settings.disable_root_scale
    }

    fn resting_scale(&self) -> f32 {
        interpreter::resting_scale(self.provider.resize_type, self.settings.scale_factor)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn settings(&self) -> &ScreenSettings {
        &self.settings
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Whether the sheet has been dismissed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Whether the host should keep delivering frame ticks.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.mounted
            && (self.open_end_in.is_some()
                || self.translate_x.is_animating()
                || self.translate_y.is_animating()
                || self.opacity.is_animating()
                || self.border_radius.is_animating())
    }

    /// Whether sheet gestures are active; when not, the sheet renders
    /// statically.
    #[must_use]
    pub fn gestures_enabled(&self) -> bool {
        self.provider.gestures
    }

    #[must_use]
    pub fn translation(&self) -> Translation {
        Translation {
            x: self.translate_x.value(),
            y: self.translate_y.value(),
        }
    }

    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.opacity.value()
    }

    #[must_use]
    pub fn border_radius(&self) -> f32 {
        self.border_radius.value()
    }

    /// Current drag progress derived from the sheet's translation.
    #[must_use]
    pub fn progress(&self) -> Progress {
        interpreter::progress(self.translation(), self.viewport)
    }

    /// Scale of the sheet content itself.
    #[must_use]
    pub fn content_scale(&self) -> f32 {
        if self.settings.disable_content_resize_on_drag_down {
            return 1.0;
        }
        interpreter::content_scale(
            self.provider.resize_type,
            self.settings.scale_factor,
            self.progress(),
        )
    }

    /// Latest position of the embedded scrollable.
    #[must_use]
    pub fn scroll_state(&self) -> ScrollState {
        self.scroll.state()
    }

    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }
}

impl Default for SheetScreen {
    fn default() -> Self {
        Self::new(ScreenSettings::default())
    }
}
