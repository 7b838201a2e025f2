// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! A [`Notification`] is pure data: identity, title, severity, display mode,
//! countdown length and an optional payload. Countdown bookkeeping lives in
//! [`super::timer::TimerEngine`], never in the record itself.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    /// Draws the next identifier from the process-wide counter.
    pub fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Wraps a caller-chosen identifier.
    ///
    /// Callers that assign their own ids are responsible for uniqueness;
    /// the registry rejects duplicates.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Severity level. Affects rendering only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

/// Which progress visualizations the renderer should draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayMode {
    #[default]
    None,
    /// Horizontal bar under the toast body.
    Linear,
    /// Ring drawn around the close button.
    Circular,
    Both,
}

impl DisplayMode {
    #[must_use]
    pub fn shows_linear(self) -> bool {
        matches!(self, DisplayMode::Linear | DisplayMode::Both)
    }

    #[must_use]
    pub fn shows_ring(self) -> bool {
        matches!(self, DisplayMode::Circular | DisplayMode::Both)
    }
}

/// Optional payload rendered under the title. Not interpreted by the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Text(String),
    Lines(Vec<String>),
}

impl From<&str> for Content {
    fn from(value: &str) -> Self {
        Content::Text(value.to_string())
    }
}

impl From<String> for Content {
    fn from(value: String) -> Self {
        Content::Text(value)
    }
}

impl From<Vec<String>> for Content {
    fn from(value: Vec<String>) -> Self {
        Content::Lines(value)
    }
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    id: ToastId,
    title: String,
    severity: Severity,
    display_mode: DisplayMode,
    /// Total countdown length, fixed at creation.
    duration: Duration,
    content: Option<Content>,
}

impl Notification {
    /// Creates a notification with a freshly generated id.
    ///
    /// A zero `duration` is bumped to one millisecond so the countdown
    /// always has a positive length.
    pub fn new(title: impl Into<String>, duration: Duration) -> Self {
        Self::with_id(ToastId::next(), title, duration)
    }

    /// Creates a notification with a caller-controlled id.
    pub fn with_id(id: ToastId, title: impl Into<String>, duration: Duration) -> Self {
        Self {
            id,
            title: title.into(),
            severity: Severity::default(),
            display_mode: DisplayMode::default(),
            duration: duration.max(Duration::from_millis(1)),
            content: None,
        }
    }

    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    #[must_use]
    pub fn with_display_mode(mut self, display_mode: DisplayMode) -> Self {
        self.display_mode = display_mode;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_content(mut self, content: impl Into<Content>) -> Self {
        self.content = Some(content.into());
        self
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn content(&self) -> Option<&Content> {
        self.content.as_ref()
    }

    /// Copies the opaque display fields of `other` onto this record,
    /// keeping identity and countdown length untouched.
    pub(crate) fn replace_display_fields(&mut self, other: Notification) {
        self.title = other.title;
        self.severity = other.severity;
        self.display_mode = other.display_mode;
        self.content = other.content;
    }
}

/// Parameters for [`super::Manager::push`].
///
/// The countdown length is not part of the request: pushed toasts always use
/// the configured default duration.
#[derive(Debug, Clone, Default)]
pub struct ToastRequest {
    pub(crate) title: String,
    pub(crate) severity: Option<Severity>,
    pub(crate) display_mode: Option<DisplayMode>,
    pub(crate) content: Option<Content>,
}

impl ToastRequest {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    #[must_use]
    pub fn display_mode(mut self, display_mode: DisplayMode) -> Self {
        self.display_mode = Some(display_mode);
        self
    }

    #[must_use]
    pub fn content(mut self, content: impl Into<Content>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Builds the record, filling unset fields from the given defaults.
    pub(crate) fn into_notification(
        self,
        id: ToastId,
        duration: Duration,
        default_display_mode: DisplayMode,
    ) -> Notification {
        let mut notification = Notification::with_id(id, self.title, duration)
            .with_severity(self.severity.unwrap_or_default())
            .with_display_mode(self.display_mode.unwrap_or(default_display_mode));
        notification.content = self.content;
        notification
    }
}
