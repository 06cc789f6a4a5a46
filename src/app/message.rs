// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo.

use crate::config::ResizeMode;
use crate::domain::sheet::Platform;
use crate::ui::screen;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Present a new sheet.
    OpenSheet,
    /// Remove the sheet without animating it away.
    DismissSheet,
    Sheet(screen::Message),
    /// Animation frame while anything is moving.
    Frame(Instant),
}

/// Runtime flags parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Overrides the configured resize type.
    pub resize: Option<ResizeMode>,
    /// Platform policy to emulate. Defaults to the compilation target.
    pub platform: Option<Platform>,
    /// Optional config directory override (for sheet.toml).
    /// Takes precedence over the `ICED_SHEET_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Present scrollable sheet content.
    pub scrollable: bool,
}
