// SPDX-License-Identifier: MPL-2.0
//! Background scale coordinator.
//!
//! The [`SheetProvider`] owns the scale applied to the content behind a
//! sheet. Screens reach it through a borrowed [`SheetContext`] obtained with
//! [`use_sheet`], and drive the scale while they open, follow a drag, and
//! close.

use crate::animation::AnimatedValue;
use crate::domain::sheet::{Capabilities, Platform, ResizeType, SpringConfig};
use crate::error::{Error, Result};
use crate::ui::widgets::Transformed;
use iced::Element;
use std::sync::Once;
use std::time::Duration;

static SCALE_ADVISORY: Once = Once::new();

/// Provider configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProviderSettings {
    /// Spring used when a caller does not pass one to `set_scale`.
    pub spring: SpringConfig,
    pub resize_type: ResizeType,
    /// Let sheets respond to gestures on the web.
    pub enable_for_web: bool,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            spring: SpringConfig::PROVIDER,
            resize_type: ResizeType::default(),
            enable_for_web: false,
        }
    }
}

/// Owns the background scale shared by every sheet screen below it.
#[derive(Debug, Clone)]
pub struct SheetProvider {
    scale: AnimatedValue,
    settings: ProviderSettings,
    platform: Platform,
    capabilities: Capabilities,
    mounted: bool,
}

impl SheetProvider {
    /// Creates a mounted provider with the background at scale 1.
    #[must_use]
    pub fn new(settings: ProviderSettings, platform: Platform) -> Self {
        let capabilities = platform.capabilities(settings.enable_for_web);
        if cfg!(debug_assertions) && !capabilities.background_scale {
            SCALE_ADVISORY.call_once(|| {
                tracing::debug!(
                    ?platform,
                    "Background scaling is unavailable on this platform; sheets will not scale the content behind them"
                );
            });
        }

        Self {
            scale: AnimatedValue::new(1.0),
            settings,
            platform,
            capabilities,
            mounted: true,
        }
    }

    /// Current background scale.
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale.value()
    }

    /// Moves the background scale toward `value`.
    ///
    /// Supersedes any scale animation in flight. Applied immediately when
    /// the platform cannot spring the scale, and ignored once unmounted.
    pub fn set_scale(&mut self, value: f32, spring: Option<SpringConfig>) {
        if !self.mounted {
            tracing::trace!(value, "set_scale ignored after unmount");
            return;
        }

        if !self.capabilities.spring_scale {
            self.scale.set(value);
            return;
        }

        if self.scale.is_animating() {
            tracing::trace!(
                from = self.scale.target(),
                to = value,
                "superseding background scale spring"
            );
        }
        self.scale
            .animate_to(value, spring.unwrap_or(self.settings.spring));
    }

    /// Advances the scale spring. Returns `true` while it is still moving.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        if !self.mounted {
            return false;
        }
        self.scale.tick(elapsed)
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.mounted && self.scale.is_animating()
    }

    /// Halts the scale where it is; every later call is a no-op.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.scale.cancel();
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Whether sheets below this provider respond to gestures.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.capabilities.gestures
    }

    #[must_use]
    pub fn settings(&self) -> &ProviderSettings {
        &self.settings
    }

    /// Replaces the settings and re-resolves the platform capabilities.
    pub fn set_settings(&mut self, settings: ProviderSettings) {
        self.capabilities = self.platform.capabilities(settings.enable_for_web);
        self.settings = settings;
    }

    #[must_use]
    pub fn platform(&self) -> Platform {
        self.platform
    }

    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Borrows the provider as the context handed to screens.
    pub fn context(&mut self) -> SheetContext<'_> {
        SheetContext { provider: self }
    }

    /// Renders the background content scaled about its center.
    pub fn view<'a, Message: 'a>(
        &self,
        background: impl Into<Element<'a, Message>>,
    ) -> Element<'a, Message> {
        if !self.capabilities.background_scale {
            return background.into();
        }
        Transformed::new(background).scale(self.scale()).into()
    }
}

impl Default for SheetProvider {
    fn default() -> Self {
        Self::new(ProviderSettings::default(), Platform::current())
    }
}

/// What a screen sees of its provider.
#[derive(Debug)]
pub struct SheetContext<'a> {
    provider: &'a mut SheetProvider,
}

impl SheetContext<'_> {
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.provider.scale()
    }

    pub fn set_scale(&mut self, value: f32, spring: Option<SpringConfig>) {
        self.provider.set_scale(value, spring);
    }

    #[must_use]
    pub fn resize_type(&self) -> ResizeType {
        self.provider.settings.resize_type
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.provider.is_enabled()
    }

    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        self.provider.capabilities
    }
}

/// Resolves the sheet context of an optional provider.
///
/// # Errors
///
/// Returns [`Error::MissingProvider`] when there is no provider.
pub fn use_sheet(provider: Option<&mut SheetProvider>) -> Result<SheetContext<'_>> {
    provider
        .map(SheetProvider::context)
        .ok_or(Error::MissingProvider)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    const FRAME: Duration = Duration::from_millis(16);

    fn settle(provider: &mut SheetProvider) {
        for _ in 0..600 {
            if !provider.tick(FRAME) {
                break;
            }
        }
    }

    #[test]
    fn new_provider_rests_at_unit_scale() {
        let provider = SheetProvider::new(ProviderSettings::default(), Platform::Ios);
        assert_abs_diff_eq!(provider.scale(), 1.0);
        assert!(!provider.is_animating());
        assert!(provider.is_mounted());
    }

    #[test]
    fn set_scale_springs_on_ios() {
        let mut provider = SheetProvider::new(ProviderSettings::default(), Platform::Ios);
        provider.set_scale(0.83, None);
        assert!(provider.is_animating());
        assert_abs_diff_eq!(provider.scale(), 1.0);

        settle(&mut provider);
        assert!(!provider.is_animating());
        assert_abs_diff_eq!(provider.scale(), 0.83);
    }

    #[test]
    fn set_scale_is_immediate_on_android() {
        let mut provider = SheetProvider::new(ProviderSettings::default(), Platform::Android);
        provider.set_scale(0.9, None);
        assert!(!provider.is_animating());
        assert_abs_diff_eq!(provider.scale(), 0.9);
    }

    #[test]
    fn later_call_supersedes_spring_in_flight() {
        let mut provider = SheetProvider::new(ProviderSettings::default(), Platform::Desktop);
        provider.set_scale(0.5, None);
        provider.tick(FRAME);
        provider.set_scale(1.0, None);

        settle(&mut provider);
        assert_abs_diff_eq!(provider.scale(), 1.0);
    }

    #[test]
    fn set_scale_after_unmount_is_ignored() {
        let mut provider = SheetProvider::new(ProviderSettings::default(), Platform::Ios);
        provider.set_scale(0.8, None);
        provider.tick(FRAME);
        let halted = provider.scale();

        provider.unmount();
        provider.set_scale(0.5, None);
        assert!(!provider.tick(FRAME));
        assert!(!provider.is_animating());
        assert_abs_diff_eq!(provider.scale(), halted);
    }

    #[test]
    fn web_gestures_follow_enable_flag() {
        let disabled = SheetProvider::new(ProviderSettings::default(), Platform::Web);
        assert!(!disabled.is_enabled());

        let enabled = SheetProvider::new(
            ProviderSettings {
                enable_for_web: true,
                ..ProviderSettings::default()
            },
            Platform::Web,
        );
        assert!(enabled.is_enabled());
        assert!(!enabled.capabilities().background_scale);
    }

    #[test]
    fn set_settings_re_resolves_capabilities() {
        let mut provider = SheetProvider::new(ProviderSettings::default(), Platform::Web);
        provider.set_settings(ProviderSettings {
            enable_for_web: true,
            resize_type: ResizeType::Incremental,
            ..ProviderSettings::default()
        });
        assert!(provider.is_enabled());
        assert_eq!(provider.context().resize_type(), ResizeType::Incremental);
    }

    #[test]
    fn use_sheet_without_provider_fails_fast() {
        assert_eq!(use_sheet(None).err(), Some(Error::MissingProvider));
    }

    #[test]
    fn use_sheet_exposes_provider_state() {
        let mut provider = SheetProvider::new(ProviderSettings::default(), Platform::Android);
        let mut ctx = use_sheet(Some(&mut provider)).expect("provider present");
        ctx.set_scale(0.7, None);
        assert_abs_diff_eq!(ctx.scale(), 0.7);
        assert_eq!(ctx.resize_type(), ResizeType::Decremental);
        assert!(ctx.is_enabled());
    }
}
