// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` is the only owner of the [`Registry`]. It keeps one
//! [`TimerEngine`] per live notification, re-evaluates the active selection
//! whenever membership changes, and delivers frame steps to the timers that
//! requested one. Expiry and manual close both funnel into a single dismissal
//! path that removes the record and its timer together.

use super::notification::{Notification, ToastId, ToastRequest};
use super::registry::Registry;
use super::selection::{select_active, ActiveSet};
use super::timer::{FrameToken, TickOutcome, TimerEngine, TimerPhase};
use crate::config::ToastSettings;
use crate::error::ToastError;
use std::collections::HashMap;
use std::time::Instant;

/// Messages for notification state changes.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Close button pressed.
    Close(ToastId),
    /// Pointer entered the toast surface.
    PointerEntered(ToastId),
    /// Pointer left the toast surface.
    PointerExited(ToastId),
    /// A display frame was presented.
    Frame(Instant),
}

/// Why a notification left the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    Expired,
    Closed,
}

/// Owns the registry and drives every notification's countdown.
#[derive(Debug)]
pub struct Manager {
    settings: ToastSettings,
    registry: Registry,
    timers: HashMap<ToastId, TimerEngine>,
    /// Cached result of the selection policy, refreshed on insert/remove.
    active: ActiveSet,
    /// Frame steps requested for the next presented frame.
    frames: Vec<(ToastId, FrameToken)>,
}

impl Default for Manager {
    fn default() -> Self {
        Self::new(ToastSettings::default())
    }
}

impl Manager {
    #[must_use]
    pub fn new(settings: ToastSettings) -> Self {
        Self {
            settings,
            registry: Registry::new(settings.insert_policy()),
            timers: HashMap::new(),
            active: ActiveSet::Idle,
            frames: Vec::new(),
        }
    }

    #[must_use]
    pub fn settings(&self) -> &ToastSettings {
        &self.settings
    }

    /// Enqueues a new notification using the configured default duration.
    ///
    /// Returns the generated identifier.
    pub fn push(&mut self, request: ToastRequest, now: Instant) -> ToastId {
        let mut id = ToastId::next();
        // Caller-assigned ids may have claimed a counter value already.
        while self.registry.contains(id) {
            id = ToastId::next();
        }
        let notification =
            request.into_notification(id, self.settings.duration, self.settings.display_mode);
        self.admit(notification, now);
        id
    }

    /// Inserts a fully built notification, typically with a caller-chosen id.
    ///
    /// # Errors
    ///
    /// Returns [`ToastError::DuplicateId`] if the id is already registered.
    pub fn insert(&mut self, notification: Notification, now: Instant) -> Result<ToastId, ToastError> {
        if self.registry.contains(notification.id()) {
            tracing::warn!(id = %notification.id(), "rejected duplicate notification id");
            return Err(ToastError::DuplicateId(notification.id()));
        }
        let id = notification.id();
        self.admit(notification, now);
        Ok(id)
    }

    /// Manually dismisses a notification.
    ///
    /// Returns `false` if it was already gone (e.g. it expired first).
    pub fn close(&mut self, id: ToastId, now: Instant) -> bool {
        self.dismiss(id, DismissReason::Closed, now)
    }

    /// Replaces the display fields of an existing notification.
    ///
    /// Identity, countdown length and countdown progress are unaffected.
    /// Returns `false` if the notification no longer exists.
    pub fn update(&mut self, notification: Notification) -> bool {
        self.registry.update(notification)
    }

    /// Dismisses every notification.
    pub fn clear(&mut self, now: Instant) {
        let ids: Vec<ToastId> = self.registry.ids().collect();
        for id in ids {
            self.dismiss(id, DismissReason::Closed, now);
        }
    }

    /// Pauses the hovered notification's countdown. Other toasts keep running.
    pub fn pointer_entered(&mut self, id: ToastId, now: Instant) {
        if let Some(timer) = self.timers.get_mut(&id) {
            timer.pointer_enter(now);
            if timer.pending_frame().is_none() {
                self.cancel_frames(id);
            }
        }
    }

    /// Resumes the notification's countdown if it is still eligible.
    pub fn pointer_exited(&mut self, id: ToastId, now: Instant) {
        let token = self
            .timers
            .get_mut(&id)
            .and_then(|timer| timer.pointer_leave(now));
        if let Some(token) = token {
            self.schedule(id, token);
        }
    }

    /// Delivers one presented frame to every timer that asked for it.
    ///
    /// Expired notifications are dismissed only after all timers have been
    /// stepped, so no step observes a half-removed notification.
    pub fn on_frame(&mut self, now: Instant) {
        let due = std::mem::take(&mut self.frames);
        let mut expired = Vec::new();

        for (id, token) in due {
            if !self.active.contains(id) {
                continue;
            }
            let Some(timer) = self.timers.get_mut(&id) else {
                continue;
            };
            match timer.tick(token, now) {
                TickOutcome::Stale => {}
                TickOutcome::Continue(next) => self.frames.push((id, next)),
                TickOutcome::Expired => expired.push(id),
            }
        }

        for id in expired {
            self.dismiss(id, DismissReason::Expired, now);
        }
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message, now: Instant) {
        match message {
            Message::Close(id) => {
                self.close(*id, now);
            }
            Message::PointerEntered(id) => self.pointer_entered(*id, now),
            Message::PointerExited(id) => self.pointer_exited(*id, now),
            Message::Frame(at) => self.on_frame(*at),
        }
    }

    /// Returns the notifications in display order.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &Notification> + ExactSizeIterator {
        self.registry.values()
    }

    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&Notification> {
        self.registry.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: ToastId) -> bool {
        self.registry.contains(id)
    }

    /// Returns the cached active selection.
    #[must_use]
    pub fn active(&self) -> ActiveSet {
        self.active
    }

    #[must_use]
    pub fn phase(&self, id: ToastId) -> Option<TimerPhase> {
        self.timers.get(&id).map(TimerEngine::phase)
    }

    /// Remaining-progress fraction in `[0, 1]` for rendering.
    #[must_use]
    pub fn remaining_fraction(&self, id: ToastId) -> Option<f32> {
        self.timers.get(&id).map(TimerEngine::remaining_fraction)
    }

    #[must_use]
    pub fn timer(&self, id: ToastId) -> Option<&TimerEngine> {
        self.timers.get(&id)
    }

    #[must_use]
    pub fn is_hovered(&self, id: ToastId) -> bool {
        self.timers.get(&id).is_some_and(TimerEngine::is_hovered)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Returns whether any timer is waiting for a frame.
    #[must_use]
    pub fn needs_frames(&self) -> bool {
        !self.frames.is_empty()
    }

    fn admit(&mut self, notification: Notification, now: Instant) {
        let id = notification.id();
        let timer = TimerEngine::new(id, notification.duration());
        if let Err(err) = self.registry.insert(notification) {
            tracing::warn!(error = %err, "notification not admitted");
            return;
        }
        self.timers.insert(id, timer);
        tracing::debug!(%id, total = self.registry.len(), "notification added");
        self.reselect(now);
    }

    /// Removes the record and its timer together, then re-selects.
    fn dismiss(&mut self, id: ToastId, reason: DismissReason, now: Instant) -> bool {
        if self.registry.remove(id).is_none() {
            tracing::trace!(%id, ?reason, "dismissal of absent notification ignored");
            return false;
        }
        if let Some(mut timer) = self.timers.remove(&id) {
            timer.halt(now);
        }
        self.cancel_frames(id);
        tracing::debug!(%id, ?reason, "notification dismissed");
        self.reselect(now);
        true
    }

    /// Recomputes the active selection and moves timers in or out of it.
    ///
    /// Revocations run before grants so at most one turn-based timer is
    /// ever running.
    fn reselect(&mut self, now: Instant) {
        let next = select_active(self.registry.ids(), self.settings.selection_policy());

        let mut revoked = Vec::new();
        for (id, timer) in &mut self.timers {
            if timer.is_eligible() && !next.contains(*id) {
                timer.lose_eligibility(now);
                revoked.push(*id);
            }
        }
        for id in revoked {
            self.cancel_frames(id);
        }

        let mut granted = Vec::new();
        for (id, timer) in &mut self.timers {
            if !timer.is_eligible() && next.contains(*id) {
                if let Some(token) = timer.gain_eligibility(now) {
                    granted.push((*id, token));
                }
            }
        }
        for (id, token) in granted {
            self.schedule(id, token);
        }

        self.active = next;
    }

    fn schedule(&mut self, id: ToastId, token: FrameToken) {
        self.cancel_frames(id);
        self.frames.push((id, token));
    }

    fn cancel_frames(&mut self, id: ToastId) {
        self.frames.retain(|(pending, _)| *pending != id);
    }
}
