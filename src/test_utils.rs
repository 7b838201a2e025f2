// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and deterministic clocks.
//!
//! Re-exports the `approx` crate's assertion macros, which handle
//! floating-point precision issues that `assert_eq!` cannot.

pub use approx::assert_abs_diff_eq;

use std::time::{Duration, Instant};

/// Default epsilon for f32 comparisons.
pub const F32_EPSILON: f32 = 1e-6;

/// Shorthand for building millisecond durations.
pub fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

/// A fixed clock origin shifted into the future, so tests can step
/// backwards without underflowing `Instant`.
pub fn clock_origin() -> Instant {
    Instant::now() + Duration::from_secs(3600)
}
