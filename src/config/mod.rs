// SPDX-License-Identifier: MPL-2.0
//! This module handles the toast configuration, including loading and saving
//! it to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[toasts]` - countdown length, ordering mode, layout passthroughs
//!
//! Configuration is read once at startup and resolved into [`ToastSettings`],
//! which stays fixed for the lifetime of the notification manager.
//!
//! # Examples
//!
//! ```no_run
//! use iced_toast::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.toasts.duration_ms = Some(3000);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::toast::{DisplayMode, InsertPolicy, SelectionPolicy};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Layout Passthroughs
// =============================================================================

/// Reading direction of a toast card. Rendering only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    #[default]
    Rtl,
    Ltr,
}

/// Screen anchor of the toast column. Rendering only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self> {
        match raw.to_lowercase().as_str() {
            "rtl" => Ok(Direction::Rtl),
            "ltr" => Ok(Direction::Ltr),
            other => Err(Error::Config(format!("invalid direction: {}", other))),
        }
    }
}

impl FromStr for Position {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self> {
        match raw.to_lowercase().as_str() {
            "top" => Ok(Position::Top),
            "bottom" => Ok(Position::Bottom),
            "left" => Ok(Position::Left),
            "right" => Ok(Position::Right),
            "top-left" => Ok(Position::TopLeft),
            "top-right" => Ok(Position::TopRight),
            "bottom-left" => Ok(Position::BottomLeft),
            "bottom-right" => Ok(Position::BottomRight),
            other => Err(Error::Config(format!("invalid position: {}", other))),
        }
    }
}

// =============================================================================
// Section Structs
// =============================================================================

/// Toast behaviour and layout settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToastConfig {
    /// Countdown length for pushed toasts, in milliseconds.
    #[serde(
        default = "default_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration_ms: Option<u64>,

    /// Stack mode (newest on top, oldest counts down) vs queue mode.
    #[serde(default = "default_stacked", skip_serializing_if = "Option::is_none")]
    pub stacked: Option<bool>,

    /// Queue mode: count down one toast at a time.
    #[serde(default = "default_turn", skip_serializing_if = "Option::is_none")]
    pub turn: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,

    /// Progress display for toasts pushed without an explicit mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_mode: Option<DisplayMode>,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
            stacked: default_stacked(),
            turn: default_turn(),
            direction: Some(Direction::default()),
            position: Some(Position::default()),
            display_mode: Some(DisplayMode::default()),
        }
    }
}

/// Crate configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub toasts: ToastConfig,
}

impl Config {
    /// Resolves optional fields into validated, immutable settings.
    #[must_use]
    pub fn settings(&self) -> ToastSettings {
        let toasts = &self.toasts;
        let duration_ms = toasts
            .duration_ms
            .unwrap_or(DEFAULT_DURATION_MS)
            .clamp(MIN_DURATION_MS, MAX_DURATION_MS);
        ToastSettings {
            duration: Duration::from_millis(duration_ms),
            stacked: toasts.stacked.unwrap_or(DEFAULT_STACKED),
            turn: toasts.turn.unwrap_or(DEFAULT_TURN),
            direction: toasts.direction.unwrap_or_default(),
            position: toasts.position.unwrap_or_default(),
            display_mode: toasts.display_mode.unwrap_or_default(),
        }
    }
}

// =============================================================================
// Resolved Settings
// =============================================================================

/// Settings handed to the notification manager. Fixed once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastSettings {
    pub duration: Duration,
    pub stacked: bool,
    pub turn: bool,
    pub direction: Direction,
    pub position: Position,
    pub display_mode: DisplayMode,
}

impl ToastSettings {
    #[must_use]
    pub fn selection_policy(&self) -> SelectionPolicy {
        SelectionPolicy {
            stacked: self.stacked,
            turn: self.turn,
        }
    }

    #[must_use]
    pub fn insert_policy(&self) -> InsertPolicy {
        InsertPolicy::from_stacked(self.stacked)
    }
}

impl Default for ToastSettings {
    fn default() -> Self {
        Config::default().settings()
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_duration_ms() -> Option<u64> {
    Some(DEFAULT_DURATION_MS)
}

fn default_stacked() -> Option<bool> {
    Some(DEFAULT_STACKED)
}

fn default_turn() -> Option<bool> {
    Some(DEFAULT_TURN)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
                    return (Config::default(), Some(format!("config-load-error: {}", err)));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
