// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate.

// ==========================================================================
// Countdown Defaults
// ==========================================================================

/// Default countdown length for a pushed toast (in milliseconds).
pub const DEFAULT_DURATION_MS: u64 = 6000;

/// Shortest accepted countdown (in milliseconds).
pub const MIN_DURATION_MS: u64 = 100;

/// Longest accepted countdown (in milliseconds).
pub const MAX_DURATION_MS: u64 = 600_000;

// ==========================================================================
// Ordering Defaults
// ==========================================================================

/// Newest toast on top, oldest counts down first.
pub const DEFAULT_STACKED: bool = true;

/// Only one toast counts down at a time.
pub const DEFAULT_TURN: bool = true;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_DURATION_MS > 0);
    assert!(MAX_DURATION_MS > MIN_DURATION_MS);
    assert!(DEFAULT_DURATION_MS >= MIN_DURATION_MS);
    assert!(DEFAULT_DURATION_MS <= MAX_DURATION_MS);
};
