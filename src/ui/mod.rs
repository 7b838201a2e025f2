// SPDX-License-Identifier: MPL-2.0
//! Shared UI building blocks.
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
