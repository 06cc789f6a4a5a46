// SPDX-License-Identifier: MPL-2.0
//! This module handles the sheet configuration, including loading and saving
//! tuning values to a `sheet.toml` file.
//!
//! # Configuration Sections
//!
//! - `[provider]` - Background scale spring, resize type and web enablement
//! - `[screen]` - Drag threshold, spring, directions and appearance
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_SHEET_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Migration
//!
//! Earlier revisions spelled drag directions `top`/`bottom`/`left`/`right`
//! and the web flag `is_web_enabled`. Both spellings are still read; saving
//! writes the current names.
//!
//! # Examples
//!
//! ```no_run
//! use iced_sheet::config;
//!
//! let (mut config, _warning) = config::load();
//! config.screen.drag_threshold = Some(200.0);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::sheet::{
    BorderRadius, DragDirections, DragThreshold, ResizeType, ScaleFactor, SpringConfig,
};
use crate::error::{Error, Result};
use crate::ui::provider::ProviderSettings;
use crate::ui::screen::{CloseNotify, ScreenSettings};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "sheet.toml";

/// Application name used for directory naming.
const APP_NAME: &str = "IcedSheet";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_SHEET_CONFIG_DIR";

// =============================================================================
// Enums
// =============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ResizeMode {
    Incremental,
    #[default]
    Decremental,
}

impl From<ResizeMode> for ResizeType {
    fn from(mode: ResizeMode) -> Self {
        match mode {
            ResizeMode::Incremental => ResizeType::Incremental,
            ResizeMode::Decremental => ResizeType::Decremental,
        }
    }
}

impl From<ResizeType> for ResizeMode {
    fn from(resize_type: ResizeType) -> Self {
        match resize_type {
            ResizeType::Incremental => ResizeMode::Incremental,
            ResizeType::Decremental => ResizeMode::Decremental,
        }
    }
}

// =============================================================================
// Shared Tables
// =============================================================================

/// Spring tuning; missing fields fall back to the section's default spring.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct SpringTable {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damping: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stiffness: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mass: Option<f32>,
}

impl SpringTable {
    fn resolve(&self, fallback: SpringConfig) -> SpringConfig {
        SpringConfig {
            damping: self.damping.unwrap_or(fallback.damping),
            stiffness: self.stiffness.unwrap_or(fallback.stiffness),
            mass: self.mass.unwrap_or(fallback.mass),
            ..fallback
        }
    }
}

impl From<SpringConfig> for SpringTable {
    fn from(spring: SpringConfig) -> Self {
        Self {
            damping: Some(spring.damping),
            stiffness: Some(spring.stiffness),
            mass: Some(spring.mass),
        }
    }
}

/// Enabled drag directions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct DirectionsTable {
    #[serde(default, alias = "top", skip_serializing_if = "Option::is_none")]
    pub to_top: Option<bool>,
    #[serde(default, alias = "bottom", skip_serializing_if = "Option::is_none")]
    pub to_bottom: Option<bool>,
    #[serde(default, alias = "left", skip_serializing_if = "Option::is_none")]
    pub to_left: Option<bool>,
    #[serde(default, alias = "right", skip_serializing_if = "Option::is_none")]
    pub to_right: Option<bool>,
}

impl DirectionsTable {
    fn resolve(&self) -> DragDirections {
        let fallback = DragDirections::default();
        DragDirections {
            to_top: self.to_top.unwrap_or(fallback.to_top),
            to_bottom: self.to_bottom.unwrap_or(fallback.to_bottom),
            to_left: self.to_left.unwrap_or(fallback.to_left),
            to_right: self.to_right.unwrap_or(fallback.to_right),
        }
    }
}

impl From<DragDirections> for DirectionsTable {
    fn from(directions: DragDirections) -> Self {
        Self {
            to_top: Some(directions.to_top),
            to_bottom: Some(directions.to_bottom),
            to_left: Some(directions.to_left),
            to_right: Some(directions.to_right),
        }
    }
}

// =============================================================================
// Section Structs
// =============================================================================

/// Provider settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProviderConfig {
    #[serde(default)]
    pub resize_type: ResizeMode,

    /// Whether sheets respond to gestures on the web.
    #[serde(default, alias = "is_web_enabled")]
    pub enable_for_web: bool,

    #[serde(default)]
    pub spring: SpringTable,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            resize_type: ResizeMode::default(),
            enable_for_web: false,
            spring: SpringTable::from(DEFAULT_PROVIDER_SPRING),
        }
    }
}

impl ProviderConfig {
    /// Resolves the section into provider settings.
    #[must_use]
    pub fn to_settings(&self) -> ProviderSettings {
        ProviderSettings {
            spring: self.spring.resolve(DEFAULT_PROVIDER_SPRING),
            resize_type: self.resize_type.into(),
            enable_for_web: self.enable_for_web,
        }
    }
}

/// Screen settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScreenConfig {
    #[serde(default = "default_scale_factor", skip_serializing_if = "Option::is_none")]
    pub scale_factor: Option<f32>,

    /// Drag distance in pixels past which a release closes the sheet.
    #[serde(
        default = "default_drag_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub drag_threshold: Option<f32>,

    #[serde(default)]
    pub spring: SpringTable,

    #[serde(default)]
    pub drag_directions: DirectionsTable,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scrollable: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity_on_gesture_move: Option<bool>,

    #[serde(
        default = "default_container_radius_sync",
        skip_serializing_if = "Option::is_none"
    )]
    pub container_radius_sync: Option<bool>,

    #[serde(
        default = "default_border_radius",
        skip_serializing_if = "Option::is_none"
    )]
    pub initial_border_radius: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_sync_scale_on_drag_down: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_root_scale: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_content_resize_on_drag_down: Option<bool>,

    /// When the close event fires relative to the closing animation.
    #[serde(default)]
    pub close_notify: CloseNotify,

    #[serde(
        default = "default_open_end_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub open_end_delay_ms: Option<u64>,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            scale_factor: default_scale_factor(),
            drag_threshold: default_drag_threshold(),
            spring: SpringTable::from(DEFAULT_SCREEN_SPRING),
            drag_directions: DirectionsTable::from(DragDirections::default()),
            scrollable: Some(false),
            opacity_on_gesture_move: Some(false),
            container_radius_sync: default_container_radius_sync(),
            initial_border_radius: default_border_radius(),
            disable_sync_scale_on_drag_down: Some(false),
            disable_root_scale: Some(false),
            disable_content_resize_on_drag_down: Some(false),
            close_notify: CloseNotify::default(),
            open_end_delay_ms: default_open_end_delay_ms(),
        }
    }
}

impl ScreenConfig {
    /// Resolves the section into screen settings, clamping out-of-range
    /// values.
    #[must_use]
    pub fn to_settings(&self) -> ScreenSettings {
        ScreenSettings {
            scale_factor: ScaleFactor::new(self.scale_factor.unwrap_or(DEFAULT_SCALE_FACTOR)),
            drag_threshold: DragThreshold::new(
                self.drag_threshold.unwrap_or(DEFAULT_DRAG_THRESHOLD),
            ),
            spring: self.spring.resolve(DEFAULT_SCREEN_SPRING),
            drag_directions: self.drag_directions.resolve(),
            scrollable: self.scrollable.unwrap_or(false),
            opacity_on_gesture_move: self.opacity_on_gesture_move.unwrap_or(false),
            container_radius_sync: self.container_radius_sync.unwrap_or(true),
            initial_border_radius: BorderRadius::new(
                self.initial_border_radius.unwrap_or(DEFAULT_BORDER_RADIUS),
            ),
            disable_sync_scale_on_drag_down: self.disable_sync_scale_on_drag_down.unwrap_or(false),
            disable_root_scale: self.disable_root_scale.unwrap_or(false),
            disable_content_resize_on_drag_down: self
                .disable_content_resize_on_drag_down
                .unwrap_or(false),
            close_notify: self.close_notify,
            open_end_delay: Duration::from_millis(
                self.open_end_delay_ms.unwrap_or(DEFAULT_OPEN_END_DELAY_MS),
            ),
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Sheet configuration with one section per component.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SheetConfig {
    #[serde(default)]
    pub provider: ProviderConfig,

    #[serde(default)]
    pub screen: ScreenConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_scale_factor() -> Option<f32> {
    Some(DEFAULT_SCALE_FACTOR)
}

fn default_drag_threshold() -> Option<f32> {
    Some(DEFAULT_DRAG_THRESHOLD)
}

fn default_container_radius_sync() -> Option<bool> {
    Some(true)
}

fn default_border_radius() -> Option<f32> {
    Some(DEFAULT_BORDER_RADIUS)
}

fn default_open_end_delay_ms() -> Option<u64> {
    Some(DEFAULT_OPEN_END_DELAY_MS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config directory: explicit override, then the environment
/// variable, then the platform config directory.
fn get_config_dir_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    if base_dir.is_some() {
        return base_dir;
    }
    if let Some(dir) = std::env::var_os(ENV_CONFIG_DIR).filter(|dir| !dir.is_empty()) {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    get_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (SheetConfig, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (SheetConfig, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!("Ignoring sheet config at {}: {}", path.display(), err);
                    return (
                        SheetConfig::default(),
                        Some("config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (SheetConfig::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<SheetConfig> {
    let content = fs::read_to_string(path)?;
    let config: SheetConfig = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &SheetConfig) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &SheetConfig, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &SheetConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
