// SPDX-License-Identifier: MPL-2.0
//! Active-selection policy.
//!
//! Decides which notifications are allowed to count down, given the current
//! display order. This is evaluated only when registry membership changes,
//! never per frame.

use super::notification::ToastId;

/// Inputs to the selection policy, fixed for the registry's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionPolicy {
    /// Stack mode: newest displays first, oldest counts down first.
    pub stacked: bool,
    /// Queue mode only: when `false` every visible toast counts down at once.
    pub turn: bool,
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self {
            stacked: true,
            turn: true,
        }
    }
}

/// The set of notifications currently eligible to count down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveSet {
    /// Nothing is eligible (empty registry).
    #[default]
    Idle,
    One(ToastId),
    /// Every registered notification is eligible.
    All,
}

impl ActiveSet {
    #[must_use]
    pub fn contains(self, id: ToastId) -> bool {
        match self {
            ActiveSet::Idle => false,
            ActiveSet::One(active) => active == id,
            ActiveSet::All => true,
        }
    }
}

/// Maps the display order to the eligible set.
///
/// - stack mode: the oldest surviving record, regardless of `turn`. Stack
///   insertion prepends, so this is the back of the display order.
/// - queue mode with `turn`: the most recently inserted record, which queue
///   insertion appends, so again the back of the display order.
/// - queue mode without `turn`: everything
pub fn select_active<I>(order: I, policy: SelectionPolicy) -> ActiveSet
where
    I: IntoIterator<Item = ToastId>,
    I::IntoIter: DoubleEndedIterator,
{
    let mut order = order.into_iter();
    if policy.stacked || policy.turn {
        return order.next_back().map_or(ActiveSet::Idle, ActiveSet::One);
    }
    match order.next() {
        Some(_) => ActiveSet::All,
        None => ActiveSet::Idle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u64]) -> Vec<ToastId> {
        raw.iter().copied().map(ToastId::from_raw).collect()
    }

    const STACK: SelectionPolicy = SelectionPolicy {
        stacked: true,
        turn: true,
    };
    const QUEUE: SelectionPolicy = SelectionPolicy {
        stacked: false,
        turn: true,
    };
    const RACE: SelectionPolicy = SelectionPolicy {
        stacked: false,
        turn: false,
    };

    #[test]
    fn empty_order_is_idle_in_every_mode() {
        for policy in [STACK, QUEUE, RACE] {
            assert_eq!(select_active(ids(&[]), policy), ActiveSet::Idle);
        }
    }

    #[test]
    fn stack_mode_picks_oldest() {
        // Newest first: 3 was inserted last.
        let picked = select_active(ids(&[3, 2, 1]), STACK);
        assert_eq!(picked, ActiveSet::One(ToastId::from_raw(1)));
    }

    #[test]
    fn stack_mode_ignores_turn_flag() {
        let policy = SelectionPolicy {
            stacked: true,
            turn: false,
        };
        let picked = select_active(ids(&[3, 2, 1]), policy);
        assert_eq!(picked, ActiveSet::One(ToastId::from_raw(1)));
    }

    #[test]
    fn queue_mode_picks_last() {
        let picked = select_active(ids(&[1, 2, 3]), QUEUE);
        assert_eq!(picked, ActiveSet::One(ToastId::from_raw(3)));
    }

    #[test]
    fn queue_mode_without_turn_activates_all() {
        let picked = select_active(ids(&[1, 2]), RACE);
        assert_eq!(picked, ActiveSet::All);
        assert!(picked.contains(ToastId::from_raw(1)));
        assert!(picked.contains(ToastId::from_raw(2)));
    }

    #[test]
    fn contains_matches_only_the_selected_id() {
        let picked = ActiveSet::One(ToastId::from_raw(5));
        assert!(picked.contains(ToastId::from_raw(5)));
        assert!(!picked.contains(ToastId::from_raw(6)));
        assert!(!ActiveSet::Idle.contains(ToastId::from_raw(5)));
    }
}
