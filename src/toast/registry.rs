// SPDX-License-Identifier: MPL-2.0
//! Ordered storage of live notifications.
//!
//! The registry keeps records in display order. In stack mode new records are
//! prepended (newest on top); in queue mode they are appended. Which record
//! counts down is decided elsewhere, by [`super::selection`].

use super::notification::{Notification, ToastId};
use crate::error::ToastError;
use std::collections::VecDeque;

/// Where newly inserted records land in the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsertPolicy {
    /// Prepend: newest first.
    #[default]
    Stack,
    /// Append: newest last.
    Queue,
}

impl InsertPolicy {
    #[must_use]
    pub fn from_stacked(is_stacked: bool) -> Self {
        if is_stacked {
            InsertPolicy::Stack
        } else {
            InsertPolicy::Queue
        }
    }
}

/// Ordered mapping from [`ToastId`] to [`Notification`].
#[derive(Debug, Default)]
pub struct Registry {
    /// Records in display order.
    items: VecDeque<Notification>,
    policy: InsertPolicy,
}

impl Registry {
    #[must_use]
    pub fn new(policy: InsertPolicy) -> Self {
        Self {
            items: VecDeque::new(),
            policy,
        }
    }

    /// Adds a record according to the insert policy.
    ///
    /// # Errors
    ///
    /// Returns [`ToastError::DuplicateId`] if a record with the same id is
    /// already registered. The registry is left unchanged.
    pub fn insert(&mut self, notification: Notification) -> Result<(), ToastError> {
        if self.contains(notification.id()) {
            return Err(ToastError::DuplicateId(notification.id()));
        }
        match self.policy {
            InsertPolicy::Stack => self.items.push_front(notification),
            InsertPolicy::Queue => self.items.push_back(notification),
        }
        Ok(())
    }

    /// Removes a record. Absent ids are a no-op and return `None`.
    pub fn remove(&mut self, id: ToastId) -> Option<Notification> {
        let pos = self.position(id)?;
        self.items.remove(pos)
    }

    /// Replaces the display fields of the record with the same id.
    ///
    /// The stored id, countdown length and position are kept. Returns `false`
    /// when no such record exists.
    pub fn update(&mut self, notification: Notification) -> bool {
        match self.items.iter_mut().find(|n| n.id() == notification.id()) {
            Some(existing) => {
                existing.replace_display_fields(notification);
                true
            }
            None => false,
        }
    }

    /// Returns the records in display order.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &Notification> + ExactSizeIterator {
        self.items.iter()
    }

    /// Returns the ids in display order.
    pub fn ids(&self) -> impl DoubleEndedIterator<Item = ToastId> + ExactSizeIterator + '_ {
        self.items.iter().map(Notification::id)
    }

    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&Notification> {
        self.items.iter().find(|n| n.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: ToastId) -> bool {
        self.position(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, id: ToastId) -> Option<usize> {
        self.items.iter().position(|n| n.id() == id)
    }
}
