// SPDX-License-Identifier: MPL-2.0
//! Per-notification countdown state machine.
//!
//! A [`TimerEngine`] accumulates the wall-clock time its notification has spent
//! actively counting down. Time only advances while the notification is both
//! eligible (chosen by the selection policy) and not hovered. Progress is
//! computed from `Instant` deltas, so it does not depend on the frame rate.
//!
//! ```text
//!            gain                 pointer enter
//! Stopped ─────────▶ Running ◀────────────────▶ Paused
//!    ▲                  │      pointer leave       │
//!    └──── lose ────────┴──────────────────────────┘
//!                       │ tick, elapsed >= duration
//!                       ▼
//!                    Expired
//! ```
//!
//! Continuous updates are modelled as frame requests. Every request yields a
//! fresh [`FrameToken`] and invalidates the previous one, so a tick delivered
//! after a pause, an eligibility loss or a close is recognised as stale and
//! ignored.

use super::notification::ToastId;
use std::time::{Duration, Instant};

/// Handle to a single requested frame step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameToken(u64);

/// Observable state of a countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    /// Not eligible; accumulated time is frozen.
    Stopped,
    /// Eligible and not hovered; time accumulates.
    Running,
    /// Eligible but hovered; time is frozen.
    Paused,
    /// Countdown completed. Terminal.
    Expired,
}

/// Result of delivering a frame step to a timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The token was cancelled or superseded; nothing happened.
    Stale,
    /// Progress was published and the next frame requested.
    Continue(FrameToken),
    /// Accumulated time reached the duration.
    Expired,
}

/// Countdown bookkeeping for one notification.
#[derive(Debug, Clone)]
pub struct TimerEngine {
    id: ToastId,
    duration: Duration,
    /// Time spent running in completed spans.
    accumulated: Duration,
    /// Start of the current running span, if running.
    active_since: Option<Instant>,
    hovered: bool,
    eligible: bool,
    expired: bool,
    pending: Option<FrameToken>,
    next_token: u64,
    /// Last published remaining fraction, in `[0, 1]`.
    remaining: f32,
}

impl TimerEngine {
    #[must_use]
    pub fn new(id: ToastId, duration: Duration) -> Self {
        Self {
            id,
            duration,
            accumulated: Duration::ZERO,
            active_since: None,
            hovered: false,
            eligible: false,
            expired: false,
            pending: None,
            next_token: 0,
            remaining: 1.0,
        }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn phase(&self) -> TimerPhase {
        if self.expired {
            TimerPhase::Expired
        } else if !self.eligible {
            TimerPhase::Stopped
        } else if self.hovered {
            TimerPhase::Paused
        } else {
            TimerPhase::Running
        }
    }

    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    #[must_use]
    pub fn is_eligible(&self) -> bool {
        self.eligible
    }

    /// The frame request currently outstanding, if any.
    #[must_use]
    pub fn pending_frame(&self) -> Option<FrameToken> {
        self.pending
    }

    /// Time accumulated in completed running spans.
    #[must_use]
    pub fn accumulated(&self) -> Duration {
        self.accumulated
    }

    /// Total active time as of `now`, including the in-progress span.
    ///
    /// A clock reading earlier than the span start counts as zero.
    #[must_use]
    pub fn elapsed(&self, now: Instant) -> Duration {
        match self.active_since {
            Some(since) => self.accumulated + now.saturating_duration_since(since),
            None => self.accumulated,
        }
    }

    /// Last published remaining fraction.
    #[must_use]
    pub fn remaining_fraction(&self) -> f32 {
        self.remaining
    }

    /// Stopped → Running (or Paused if the pointer is already over the toast).
    ///
    /// Returns the frame to wait for when the countdown actually starts.
    pub fn gain_eligibility(&mut self, now: Instant) -> Option<FrameToken> {
        if self.expired || self.eligible {
            return None;
        }
        self.eligible = true;
        tracing::debug!(id = %self.id, accumulated_ms = self.accumulated.as_millis() as u64, "countdown eligible");
        if self.hovered {
            None
        } else {
            Some(self.start(now))
        }
    }

    /// Running/Paused → Stopped. Accumulated time is kept for later.
    pub fn lose_eligibility(&mut self, now: Instant) {
        if self.expired || !self.eligible {
            return;
        }
        self.freeze(now);
        self.eligible = false;
        tracing::debug!(id = %self.id, accumulated_ms = self.accumulated.as_millis() as u64, "countdown stopped");
    }

    /// Running → Paused. Hover is remembered even while stopped.
    pub fn pointer_enter(&mut self, now: Instant) {
        if self.hovered {
            return;
        }
        self.hovered = true;
        if self.phase() == TimerPhase::Paused {
            self.freeze(now);
            tracing::trace!(id = %self.id, "countdown paused");
        }
    }

    /// Paused → Running, only while still eligible.
    pub fn pointer_leave(&mut self, now: Instant) -> Option<FrameToken> {
        if !self.hovered {
            return None;
        }
        self.hovered = false;
        if self.phase() == TimerPhase::Running {
            tracing::trace!(id = %self.id, "countdown resumed");
            Some(self.start(now))
        } else {
            None
        }
    }

    /// Advances the countdown for a delivered frame.
    pub fn tick(&mut self, token: FrameToken, now: Instant) -> TickOutcome {
        if self.pending != Some(token) {
            return TickOutcome::Stale;
        }
        self.pending = None;
        let Some(since) = self.active_since else {
            return TickOutcome::Stale;
        };
        if now < since {
            tracing::trace!(id = %self.id, "clock went backwards, clamping to zero elapsed");
        }

        let total = self.elapsed(now);
        if total >= self.duration {
            self.accumulated = total;
            self.active_since = None;
            self.expired = true;
            self.remaining = 0.0;
            tracing::debug!(id = %self.id, "countdown expired");
            return TickOutcome::Expired;
        }

        self.remaining = 1.0 - completion_fraction(total, self.duration);
        TickOutcome::Continue(self.request_frame())
    }

    /// Freezes the countdown and drops any pending frame. Used on manual close.
    pub fn halt(&mut self, now: Instant) {
        self.freeze(now);
        self.eligible = false;
    }

    fn start(&mut self, now: Instant) -> FrameToken {
        self.active_since = Some(now);
        self.request_frame()
    }

    /// Closes the running span and cancels the pending frame.
    fn freeze(&mut self, now: Instant) {
        if let Some(since) = self.active_since.take() {
            self.accumulated += now.saturating_duration_since(since);
            self.remaining = 1.0 - completion_fraction(self.accumulated, self.duration);
        }
        self.pending = None;
    }

    fn request_frame(&mut self) -> FrameToken {
        let token = FrameToken(self.next_token);
        self.next_token += 1;
        self.pending = Some(token);
        token
    }
}

/// Share of the countdown consumed, clamped to `[0, 1]`.
#[must_use]
pub fn completion_fraction(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0) as f32
}
