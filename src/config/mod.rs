// SPDX-License-Identifier: MPL-2.0
//! This module handles the toaster's configuration, loaded from and saved to
//! a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[toaster]` - Default position, duration and exit delay
//! - `[autopilot]` - Automatic expand/collapse behaviour
//! - `[appearance]` - Corner roundness
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument or `ICED_TOASTER_CONFIG_DIR` (see [`crate::app::paths`])
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_toaster::config::{self, Config};
//! use iced_toaster::ui::notifications::Position;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.toaster.position = Position::BottomCenter;
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::notifications::{AutopilotDelays, Position, StoreDefaults, ToastDuration, ToastOptions};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Queue-wide settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToasterConfig {
    /// Position used when a toast does not name one.
    #[serde(default)]
    pub position: Position,

    /// Default display duration in milliseconds; `0` keeps toasts until dismissed.
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,

    /// Delay between dismissal and removal, in milliseconds.
    #[serde(default = "default_exit_delay_ms")]
    pub exit_delay_ms: u64,
}

impl Default for ToasterConfig {
    fn default() -> Self {
        Self {
            position: Position::default(),
            duration_ms: DEFAULT_DURATION_MS,
            exit_delay_ms: DEFAULT_EXIT_DELAY_MS,
        }
    }
}

/// Automatic expand/collapse settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AutopilotConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_expand_ms")]
    pub expand_ms: u64,

    #[serde(default = "default_collapse_ms")]
    pub collapse_ms: u64,
}

impl Default for AutopilotConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            expand_ms: DEFAULT_AUTO_EXPAND_MS,
            collapse_ms: DEFAULT_AUTO_COLLAPSE_MS,
        }
    }
}

/// Visual settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppearanceConfig {
    #[serde(default = "default_roundness")]
    pub roundness: f32,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            roundness: DEFAULT_ROUNDNESS,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_duration_ms() -> u64 {
    DEFAULT_DURATION_MS
}

fn default_exit_delay_ms() -> u64 {
    DEFAULT_EXIT_DELAY_MS
}

fn default_expand_ms() -> u64 {
    DEFAULT_AUTO_EXPAND_MS
}

fn default_collapse_ms() -> u64 {
    DEFAULT_AUTO_COLLAPSE_MS
}

fn default_roundness() -> f32 {
    DEFAULT_ROUNDNESS
}

// =============================================================================
// Main Config
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub toaster: ToasterConfig,
    #[serde(default)]
    pub autopilot: AutopilotConfig,
    #[serde(default)]
    pub appearance: AppearanceConfig,
}

impl Config {
    /// Builds the store defaults described by this configuration.
    ///
    /// Out-of-range exit delays are clamped rather than rejected.
    #[must_use]
    pub fn store_defaults(&self) -> StoreDefaults {
        let duration = if self.toaster.duration_ms == 0 {
            ToastDuration::Persistent
        } else {
            ToastDuration::Millis(self.toaster.duration_ms)
        };

        let mut options = ToastOptions::new()
            .duration(duration)
            .roundness(self.appearance.roundness.max(0.0));
        if !self.autopilot.enabled {
            options = options.autopilot_off();
        }

        StoreDefaults {
            position: self.toaster.position,
            options,
            exit_delay: Duration::from_millis(
                self.toaster
                    .exit_delay_ms
                    .clamp(MIN_EXIT_DELAY_MS, MAX_EXIT_DELAY_MS),
            ),
            autopilot: AutopilotDelays {
                expand: Duration::from_millis(self.autopilot.expand_ms),
                collapse: Duration::from_millis(self.autopilot.collapse_ms),
            },
        }
    }
}

// =============================================================================
// Path Functions
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default location.
///
/// Returns the configuration and an optional warning when the file exists but
/// could not be parsed (defaults are used in that case).
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
                    tracing::warn!(path = %path.display(), %err, "falling back to default config");
                    return (Config::default(), Some(format!("{err}")));
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

/// Saves the configuration to the default location.
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
