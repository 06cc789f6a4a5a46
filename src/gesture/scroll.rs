// SPDX-License-Identifier: MPL-2.0
//! Scroll-state adapter.
//!
//! Observes a nested scrollable's offset and decides which vertical drag
//! directions the sheet may claim instead of the inner scroll.

use crate::domain::sheet::ScrollState;
use std::time::Instant;

/// Raw geometry of a scrollable region at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollSnapshot {
    /// Vertical scroll offset.
    pub offset: f32,
    /// Total height of the scrolled content.
    pub content_extent: f32,
    /// Visible height of the scrollable.
    pub viewport_extent: f32,
}

impl ScrollSnapshot {
    /// Whether the content is scrolled to its top.
    #[must_use]
    pub fn is_at_top(&self) -> bool {
        self.offset <= 0.0
    }

    /// Whether the content is scrolled to its bottom.
    #[must_use]
    pub fn is_at_bottom(&self) -> bool {
        self.offset >= self.content_extent - self.viewport_extent
    }
}

/// Vertical directions the sheet may claim, captured at gesture begin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollGate {
    /// Downward drags move the sheet (content at its top).
    pub allow_down: bool,
    /// Upward drags move the sheet (content at its bottom).
    pub allow_up: bool,
}

impl ScrollGate {
    /// Gate for non-scrollable content: everything goes to the sheet.
    pub const OPEN: Self = Self {
        allow_down: true,
        allow_up: true,
    };

    /// Gate derived from a scroll position.
    #[must_use]
    pub fn from_scroll(state: &ScrollState) -> Self {
        Self {
            allow_down: state.is_at_top,
            allow_up: state.is_at_bottom,
        }
    }
}

/// Tracks the latest [`ScrollState`] of the sheet's scrollable content.
///
/// Every scroll tick is recorded, including those that arrive while the
/// sheet is being dragged. The gate a drag works with is taken once, by
/// [`begin_drag`](Self::begin_drag), and held by the caller until release.
#[derive(Debug, Clone, Default)]
pub struct ScrollObserver {
    state: ScrollState,
    last: Option<(Instant, f32)>,
}

impl ScrollObserver {
    /// Creates an observer for content resting at its top.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest observed state.
    #[must_use]
    pub fn state(&self) -> ScrollState {
        self.state
    }

    /// Records a scroll tick and returns the new state.
    pub fn observe(&mut self, snapshot: ScrollSnapshot, now: Instant) -> ScrollState {
        let velocity = match self.last {
            Some((at, offset)) if now > at => {
                (snapshot.offset - offset) / (now - at).as_secs_f32()
            }
            _ => 0.0,
        };
        self.last = Some((now, snapshot.offset));
        self.state = ScrollState {
            is_at_top: snapshot.is_at_top(),
            is_at_bottom: snapshot.is_at_bottom(),
            scroll_y: snapshot.offset,
            velocity,
        };
        self.state
    }

    /// Gate for a drag starting at the current scroll position.
    #[must_use]
    pub fn begin_drag(&self) -> ScrollGate {
        ScrollGate::from_scroll(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn snapshot(offset: f32) -> ScrollSnapshot {
        ScrollSnapshot {
            offset,
            content_extent: 1_000.0,
            viewport_extent: 400.0,
        }
    }

    #[test]
    fn boundaries_are_detected() {
        assert!(snapshot(0.0).is_at_top());
        assert!(snapshot(-4.0).is_at_top());
        assert!(!snapshot(1.0).is_at_top());
        assert!(snapshot(600.0).is_at_bottom());
        assert!(!snapshot(599.0).is_at_bottom());
    }

    #[test]
    fn content_shorter_than_viewport_is_at_both_ends() {
        let short = ScrollSnapshot {
            offset: 0.0,
            content_extent: 100.0,
            viewport_extent: 400.0,
        };
        assert!(short.is_at_top());
        assert!(short.is_at_bottom());
    }

    #[test]
    fn observer_reports_state_and_velocity() {
        let start = Instant::now();
        let mut observer = ScrollObserver::new();
        let first = observer.observe(snapshot(0.0), start);
        assert!(first.is_at_top);
        assert!(first.velocity.abs() < f32::EPSILON);

        let second = observer.observe(snapshot(50.0), start + Duration::from_millis(100));
        assert!(!second.is_at_top);
        assert!((second.scroll_y - 50.0).abs() < f32::EPSILON);
        assert!((second.velocity - 500.0).abs() < 1.0);
    }

    #[test]
    fn ticks_during_a_drag_are_recorded() {
        let now = Instant::now();
        let mut observer = ScrollObserver::new();
        observer.observe(snapshot(0.0), now);
        let gate = observer.begin_drag();
        assert!(gate.allow_down);

        observer.observe(snapshot(300.0), now + Duration::from_millis(16));
        assert!((observer.state().scroll_y - 300.0).abs() < f32::EPSILON);
        assert!(!observer.state().is_at_top);
        assert_eq!(
            observer.begin_drag(),
            ScrollGate {
                allow_down: false,
                allow_up: false
            }
        );
    }

    #[test]
    fn default_state_allows_downward_claim() {
        let gate = ScrollObserver::new().begin_drag();
        assert!(gate.allow_down);
        assert!(!gate.allow_up);
    }
}
