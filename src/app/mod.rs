// SPDX-License-Identifier: MPL-2.0
//! Demo application hosting the toast column.
//!
//! The `App` struct owns the notification [`Manager`] and translates user
//! actions into pushes, edits and closes. Frame messages from the window are
//! forwarded to the manager with the instant the frame was presented, so
//! countdowns advance by wall-clock time rather than by frame count.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config, ToastSettings};
use crate::toast::{self, DisplayMode, Manager, Severity, ToastRequest};
use iced::{window, Element, Subscription, Task, Theme};
use std::path::PathBuf;
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_HEIGHT: u32 = 560;
pub const WINDOW_DEFAULT_WIDTH: u32 = 820;
pub const MIN_WINDOW_HEIGHT: u32 = 420;
pub const MIN_WINDOW_WIDTH: u32 = 560;

/// Delay used by the "push later" action.
const DELAYED_PUSH: Duration = Duration::from_secs(2);

/// Root Iced application state.
#[derive(Debug)]
pub struct App {
    toasts: Manager,
    severity: Severity,
    display_mode: DisplayMode,
    /// Counter used to give demo toasts distinct titles.
    pushed: u32,
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Applies command-line overrides on top of the loaded configuration.
pub fn resolve_settings(config: &Config, flags: &Flags) -> ToastSettings {
    let mut config = config.clone();
    let toasts = &mut config.toasts;
    if flags.duration_ms.is_some() {
        toasts.duration_ms = flags.duration_ms;
    }
    if flags.stacked.is_some() {
        toasts.stacked = flags.stacked;
    }
    if flags.turn.is_some() {
        toasts.turn = flags.turn;
    }
    if flags.direction.is_some() {
        toasts.direction = flags.direction;
    }
    if flags.position.is_some() {
        toasts.position = flags.position;
    }
    config.settings()
}

impl Default for App {
    fn default() -> Self {
        Self::with_settings(ToastSettings::default())
    }
}

impl App {
    fn with_settings(settings: ToastSettings) -> Self {
        Self {
            toasts: Manager::new(settings),
            severity: Severity::default(),
            display_mode: settings.display_mode,
            pushed: 0,
        }
    }

    /// Loads configuration, applies flags, and surfaces config warnings as an
    /// error toast.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.clone().map(PathBuf::from);
        let (config, config_warning) = config::load_with_override(config_dir);
        let settings = resolve_settings(&config, &flags);
        tracing::info!(
            duration_ms = settings.duration.as_millis() as u64,
            stacked = settings.stacked,
            turn = settings.turn,
            "toast settings resolved"
        );

        let mut app = Self::with_settings(settings);
        if let Some(warning) = config_warning {
            app.toasts.push(
                ToastRequest::new("Configuration could not be loaded")
                    .severity(Severity::Error)
                    .content(warning),
                Instant::now(),
            );
        }
        (app, Task::none())
    }

    fn title(&self) -> String {
        match self.toasts.len() {
            0 => "Iced Toast".to_string(),
            n => format!("Iced Toast ({n})"),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_frame_subscription(self.toasts.needs_frames())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let now = Instant::now();
        match message {
            Message::Toast(toast_message) => {
                let at = match toast_message {
                    toast::Message::Frame(at) => at,
                    _ => now,
                };
                self.toasts.handle_message(&toast_message, at);
            }
            Message::SelectSeverity(severity) => self.severity = severity,
            Message::SelectDisplayMode(mode) => self.display_mode = mode,
            Message::Push => {
                let request = self.next_request();
                self.toasts.push(request, now);
            }
            Message::PushDelayed => {
                let request = self.next_request();
                return Task::perform(
                    async move {
                        tokio::time::sleep(DELAYED_PUSH).await;
                        request
                    },
                    Message::DelayedReady,
                );
            }
            Message::DelayedReady(request) => {
                self.toasts.push(request, now);
            }
            Message::EditFirst => {
                let first = self.toasts.values().next().cloned();
                if let Some(first) = first {
                    let title = format!("{} (edited)", first.title());
                    self.toasts.update(first.with_title(title));
                }
            }
            Message::ClearAll => self.toasts.clear(now),
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            toasts: &self.toasts,
            severity: self.severity,
            display_mode: self.display_mode,
        })
    }

    fn next_request(&mut self) -> ToastRequest {
        self.pushed += 1;
        ToastRequest::new(format!(
            "{} notification #{}",
            view::severity_label(self.severity),
            self.pushed
        ))
        .severity(self.severity)
        .display_mode(self.display_mode)
        .content("Hover to pause the countdown.")
    }
}
