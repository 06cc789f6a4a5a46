// SPDX-License-Identifier: MPL-2.0
//! Screen configuration.

use crate::domain::sheet::{
    BorderRadius, DragDirections, DragThreshold, ScaleFactor, SpringConfig,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// When [`Event::CloseEnd`](super::Event::CloseEnd) is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CloseNotify {
    /// As soon as the closing springs are dispatched.
    #[default]
    OnDispatch,
    /// Once every closing spring has settled.
    OnSettle,
}

/// Everything a [`SheetScreen`](super::SheetScreen) can be tuned with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenSettings {
    /// Resting background scale for the decremental resize type.
    pub scale_factor: ScaleFactor,
    pub drag_threshold: DragThreshold,
    /// Spring used for the sheet's translation on release.
    pub spring: SpringConfig,
    pub drag_directions: DragDirections,
    /// Content sits in a scrollable region that competes for vertical drags.
    pub scrollable: bool,
    /// Fade the sheet while it follows the gesture.
    pub opacity_on_gesture_move: bool,
    /// Shrink the corner radius toward zero while dragging.
    pub container_radius_sync: bool,
    pub initial_border_radius: BorderRadius,
    /// Leave the background scale alone during the drag.
    pub disable_sync_scale_on_drag_down: bool,
    /// Never drive the background scale from this screen.
    pub disable_root_scale: bool,
    /// Keep the sheet content at scale 1 while dragging.
    pub disable_content_resize_on_drag_down: bool,
    pub close_notify: CloseNotify,
    /// Delay between `OpenStart` and `OpenEnd`.
    pub open_end_delay: Duration,
}

impl Default for ScreenSettings {
    fn default() -> Self {
        Self {
            scale_factor: ScaleFactor::default(),
            drag_threshold: DragThreshold::default(),
            spring: SpringConfig::SCREEN,
            drag_directions: DragDirections::default(),
            scrollable: false,
            opacity_on_gesture_move: false,
            container_radius_sync: true,
            initial_border_radius: BorderRadius::default(),
            disable_sync_scale_on_drag_down: false,
            disable_root_scale: false,
            disable_content_resize_on_drag_down: false,
            close_notify: CloseNotify::default(),
            open_end_delay: Duration::from_millis(300),
        }
    }
}
