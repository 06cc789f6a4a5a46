// SPDX-License-Identifier: MPL-2.0
//! Demo application: a provider-wrapped background and one sheet.
//!
//! The `App` owns the [`SheetProvider`] and the optional [`SheetScreen`],
//! forwards screen messages and frame ticks, and keeps a short log of the
//! lifecycle events the sheet reports.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, SheetConfig};
use crate::domain::sheet::Platform;
use crate::ui::provider::SheetProvider;
use crate::ui::screen::{Event, ScreenSettings, SheetScreen};
use iced::{window, Subscription, Task, Theme};
use std::collections::VecDeque;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Number of lifecycle events shown in the sheet.
const EVENT_LOG_LEN: usize = 8;

pub const WINDOW_DEFAULT_WIDTH: f32 = 480.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 800.0;

/// Root demo state.
#[derive(Debug)]
pub struct App {
    provider: SheetProvider,
    screen: Option<SheetScreen>,
    screen_settings: ScreenSettings,
    scrollable: bool,
    event_log: VecDeque<String>,
    last_frame: Option<Instant>,
}

/// Entry point used by `main.rs` to launch the demo.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires a `Fn` boot; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title("Sheet demo")
        .theme(App::theme)
        .window(window::Settings {
            size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
            ..window::Settings::default()
        })
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, warning) =
            config::load_with_override(flags.config_dir.as_ref().map(PathBuf::from));
        if let Some(warning) = warning {
            tracing::warn!(%warning, "using default sheet configuration");
        }

        (Self::with_config(&config, &flags), Task::none())
    }

    /// Builds the demo from a loaded configuration and command line flags.
    fn with_config(config: &SheetConfig, flags: &Flags) -> Self {
        let mut provider_settings = config.provider.to_settings();
        if let Some(resize) = flags.resize {
            provider_settings.resize_type = resize.into();
        }

        let mut screen_settings = config.screen.to_settings();
        screen_settings.scrollable |= flags.scrollable;

        let platform = flags.platform.unwrap_or_else(Platform::current);
        tracing::info!(?platform, resize = ?provider_settings.resize_type, "starting sheet demo");

        Self {
            provider: SheetProvider::new(provider_settings, platform),
            screen: None,
            scrollable: screen_settings.scrollable,
            screen_settings,
            event_log: VecDeque::with_capacity(EVENT_LOG_LEN),
            last_frame: None,
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_frame_subscription(self.is_animating())
    }

    fn is_animating(&self) -> bool {
        self.provider.is_animating()
            || self
                .screen
                .as_ref()
                .is_some_and(SheetScreen::is_animating)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenSheet => {
                if self.screen.is_none() {
                    let mut screen = SheetScreen::new(self.screen_settings);
                    let events = screen.mount(&mut self.provider.context());
                    self.screen = Some(screen);
                    self.record(&events);
                }
            }
            Message::DismissSheet => {
                if let Some(mut screen) = self.screen.take() {
                    screen.unmount(&mut self.provider.context());
                }
            }
            Message::Sheet(message) => {
                if let Some(screen) = self.screen.as_mut() {
                    let events = screen.handle(message, &mut self.provider.context());
                    self.record(&events);
                }
            }
            Message::Frame(now) => self.on_frame(now),
        }
        Task::none()
    }

    fn on_frame(&mut self, now: Instant) {
        let elapsed = self
            .last_frame
            .map_or(Duration::ZERO, |last| now.saturating_duration_since(last));
        self.last_frame = Some(now);

        self.provider.tick(elapsed);

        let mut events = Vec::new();
        if let Some(screen) = self.screen.as_mut() {
            events = screen.tick(elapsed, &mut self.provider.context());
            if screen.is_closed() && !screen.is_animating() {
                screen.unmount(&mut self.provider.context());
                self.screen = None;
            }
        }
        self.record(&events);

        if !self.is_animating() {
            self.last_frame = None;
        }
    }

    fn record(&mut self, events: &[Event]) {
        for event in events {
            if let Event::ScrollStateChanged(state) = event {
                tracing::trace!(?state, "sheet content scrolled");
                continue;
            }
            tracing::info!(?event, "sheet lifecycle");
            if self.event_log.len() == EVENT_LOG_LEN {
                self.event_log.pop_front();
            }
            self.event_log.push_back(format!("{event:?}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ResizeMode;
    use crate::domain::sheet::{GestureSample, ResizeType};
    use crate::ui::screen;

    fn app(platform: Platform) -> App {
        App::with_config(
            &SheetConfig::default(),
            &Flags {
                platform: Some(platform),
                ..Flags::default()
            },
        )
    }

    fn run_frames(app: &mut App, frames: u32) {
        let start = Instant::now();
        for frame in 0..=frames {
            app.on_frame(start + Duration::from_millis(16) * frame);
        }
    }

    #[test]
    fn flags_override_config() {
        let app = App::with_config(
            &SheetConfig::default(),
            &Flags {
                resize: Some(ResizeMode::Incremental),
                platform: Some(Platform::Android),
                scrollable: true,
                config_dir: None,
            },
        );
        assert_eq!(app.provider.settings().resize_type, ResizeType::Incremental);
        assert_eq!(app.provider.platform(), Platform::Android);
        assert!(app.scrollable);
    }

    #[test]
    fn opening_sheet_logs_open_start() {
        let mut app = app(Platform::Ios);
        let _ = app.update(Message::OpenSheet);
        assert!(app.screen.is_some());
        assert_eq!(app.event_log.back().map(String::as_str), Some("OpenStart"));
        assert!(app.is_animating());
    }

    #[test]
    fn closed_sheet_is_removed_once_settled() {
        let mut app = app(Platform::Ios);
        let _ = app.update(Message::OpenSheet);
        let _ = app.update(Message::Sheet(screen::Message::Resized(iced::Size::new(
            480.0, 800.0,
        ))));

        let long = GestureSample::translation(0.0, 300.0);
        let _ = app.update(Message::Sheet(screen::Message::GestureBegan));
        let _ = app.update(Message::Sheet(screen::Message::GestureMoved(long)));
        let _ = app.update(Message::Sheet(screen::Message::GestureEnded(long)));
        assert!(app.event_log.iter().any(|entry| entry == "CloseEnd"));

        run_frames(&mut app, 1200);
        assert!(app.screen.is_none());
        assert!(!app.is_animating());
    }

    #[test]
    fn dismiss_unmounts_immediately() {
        let mut app = app(Platform::Desktop);
        let _ = app.update(Message::OpenSheet);
        let _ = app.update(Message::DismissSheet);
        assert!(app.screen.is_none());

        run_frames(&mut app, 600);
        assert!((app.provider.scale() - 1.0).abs() < f32::EPSILON);
    }
}
