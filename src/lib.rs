// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` is a toast notification column for the Iced GUI framework.
//!
//! Toasts count down and dismiss themselves, pause while hovered, and can be
//! ordered as a stack (newest on top, oldest counts down first) or a queue.
//! The lifecycle engine in [`toast`] is clock-driven and renderer-agnostic;
//! [`toast::view`] and [`app`] put it on screen.

#![doc(html_root_url = "https://docs.rs/iced_toast/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod toast;
pub mod ui;

#[cfg(test)]
mod test_utils;
