// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::config::{Direction, Position};
use crate::toast::{self, DisplayMode, Severity, ToastRequest};

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Forwarded toast lifecycle message (close, hover, frame).
    Toast(toast::Message),
    SelectSeverity(Severity),
    SelectDisplayMode(DisplayMode),
    /// Push a toast built from the current selections.
    Push,
    /// Push the same toast after a short delay, from a background task.
    PushDelayed,
    /// The delayed task finished.
    DelayedReady(ToastRequest),
    /// Edit the first displayed toast in place.
    EditFirst,
    ClearAll,
}

/// Runtime flags passed from the command line. Each `Some` value overrides
/// the matching `settings.toml` entry.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_TOAST_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    pub duration_ms: Option<u64>,
    pub stacked: Option<bool>,
    pub turn: Option<bool>,
    pub direction: Option<Direction>,
    pub position: Option<Position>,
}
