// SPDX-License-Identifier: MPL-2.0
//! This module handles the viewer's configuration, including loading and saving
//! gesture preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[zoom]` - Wheel zoom step
//! - `[touch]` - Double-tap and swipe thresholds
//! - `[dismiss]` - Drag-to-dismiss behavior
//! - `[transition]` - Exit transition before the caller is notified of a close
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_LIGHTBOX_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_lightbox::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.touch.swipe_threshold = Some(60.0);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::ui::{DoubleTapWindow, ExitTransition, SwipeThreshold, WheelZoomStep};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Application name used for directory naming.
const APP_NAME: &str = "IcedLightbox";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_LIGHTBOX_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

/// Zoom settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ZoomConfig {
    /// Zoom change per wheel tick.
    #[serde(
        default = "default_wheel_zoom_step",
        skip_serializing_if = "Option::is_none"
    )]
    pub wheel_step: Option<f32>,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            wheel_step: default_wheel_zoom_step(),
        }
    }
}

/// Touch gesture thresholds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TouchConfig {
    /// Maximum delay between the two taps of a double-tap (milliseconds).
    #[serde(
        default = "default_double_tap_window_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub double_tap_window_ms: Option<u64>,

    /// Maximum distance between the two taps of a double-tap (pixels).
    #[serde(
        default = "default_double_tap_radius",
        skip_serializing_if = "Option::is_none"
    )]
    pub double_tap_radius: Option<f32>,

    /// Travel a touch must exceed to count as a swipe (pixels).
    #[serde(
        default = "default_swipe_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub swipe_threshold: Option<f32>,

    /// Travel below which a released touch is recorded as a tap (pixels).
    #[serde(
        default = "default_tap_max_movement",
        skip_serializing_if = "Option::is_none"
    )]
    pub tap_max_movement: Option<f32>,
}

impl Default for TouchConfig {
    fn default() -> Self {
        Self {
            double_tap_window_ms: default_double_tap_window_ms(),
            double_tap_radius: default_double_tap_radius(),
            swipe_threshold: default_swipe_threshold(),
            tap_max_movement: default_tap_max_movement(),
        }
    }
}

/// Drag-to-dismiss settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DismissConfig {
    /// Vertical travel over which the backdrop fades out (pixels).
    #[serde(
        default = "default_dismiss_fade_distance",
        skip_serializing_if = "Option::is_none"
    )]
    pub fade_distance: Option<f32>,

    /// In the split layout, a leftward swipe dismisses instead of navigating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leftward_swipe_in_split: Option<bool>,
}

impl Default for DismissConfig {
    fn default() -> Self {
        Self {
            fade_distance: default_dismiss_fade_distance(),
            leftward_swipe_in_split: Some(false),
        }
    }
}

/// Exit transition settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransitionConfig {
    /// Delay between beginning a close and notifying the caller (milliseconds).
    #[serde(
        default = "default_exit_transition_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub exit_ms: Option<u64>,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            exit_ms: default_exit_transition_ms(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Viewer configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Zoom settings.
    #[serde(default)]
    pub zoom: ZoomConfig,

    /// Touch gesture thresholds.
    #[serde(default)]
    pub touch: TouchConfig,

    /// Drag-to-dismiss settings.
    #[serde(default)]
    pub dismiss: DismissConfig,

    /// Exit transition settings.
    #[serde(default)]
    pub transition: TransitionConfig,
}

impl Config {
    /// Resolves the optional fields into validated settings the engine uses.
    #[must_use]
    pub fn gesture_settings(&self) -> GestureSettings {
        let defaults = GestureSettings::default();
        GestureSettings {
            wheel_zoom_step: self
                .zoom
                .wheel_step
                .map_or(defaults.wheel_zoom_step, WheelZoomStep::new),
            double_tap_window: self
                .touch
                .double_tap_window_ms
                .map_or(defaults.double_tap_window, DoubleTapWindow::new),
            double_tap_radius: self
                .touch
                .double_tap_radius
                .filter(|radius| radius.is_finite() && *radius > 0.0)
                .unwrap_or(defaults.double_tap_radius),
            swipe_threshold: self
                .touch
                .swipe_threshold
                .map_or(defaults.swipe_threshold, SwipeThreshold::new),
            tap_max_movement: self
                .touch
                .tap_max_movement
                .filter(|movement| movement.is_finite() && *movement >= 0.0)
                .unwrap_or(defaults.tap_max_movement),
            dismiss_fade_distance: self
                .dismiss
                .fade_distance
                .filter(|distance| distance.is_finite() && *distance > 0.0)
                .unwrap_or(defaults.dismiss_fade_distance),
            leftward_dismiss_in_split: self
                .dismiss
                .leftward_swipe_in_split
                .unwrap_or(defaults.leftward_dismiss_in_split),
            exit_transition: self
                .transition
                .exit_ms
                .map_or(defaults.exit_transition, ExitTransition::new),
        }
    }
}

/// Validated gesture tunables, resolved from [`Config`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSettings {
    pub wheel_zoom_step: WheelZoomStep,
    pub double_tap_window: DoubleTapWindow,
    pub double_tap_radius: f32,
    pub swipe_threshold: SwipeThreshold,
    pub tap_max_movement: f32,
    pub dismiss_fade_distance: f32,
    pub leftward_dismiss_in_split: bool,
    pub exit_transition: ExitTransition,
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            wheel_zoom_step: WheelZoomStep::default(),
            double_tap_window: DoubleTapWindow::default(),
            double_tap_radius: DEFAULT_DOUBLE_TAP_RADIUS,
            swipe_threshold: SwipeThreshold::default(),
            tap_max_movement: DEFAULT_TAP_MAX_MOVEMENT,
            dismiss_fade_distance: DEFAULT_DISMISS_FADE_DISTANCE,
            leftward_dismiss_in_split: false,
            exit_transition: ExitTransition::default(),
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_wheel_zoom_step() -> Option<f32> {
    Some(DEFAULT_WHEEL_ZOOM_STEP)
}

fn default_double_tap_window_ms() -> Option<u64> {
    Some(DEFAULT_DOUBLE_TAP_WINDOW_MS)
}

fn default_double_tap_radius() -> Option<f32> {
    Some(DEFAULT_DOUBLE_TAP_RADIUS)
}

fn default_swipe_threshold() -> Option<f32> {
    Some(DEFAULT_SWIPE_THRESHOLD)
}

fn default_tap_max_movement() -> Option<f32> {
    Some(DEFAULT_TAP_MAX_MOVEMENT)
}

fn default_dismiss_fade_distance() -> Option<f32> {
    Some(DEFAULT_DISMISS_FADE_DISTANCE)
}

fn default_exit_transition_ms() -> Option<u64> {
    Some(DEFAULT_EXIT_TRANSITION_MS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config directory.
///
/// # Resolution Order
///
/// 1. `override_path` parameter (if `Some`) - most specific, for tests
/// 2. `ICED_LIGHTBOX_CONFIG_DIR` environment variable (if set and non-empty)
/// 3. Platform-specific config directory (with app name appended)
pub fn config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    config_dir_with_override(base_dir).map(|mut path| {
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
                    log::warn!("failed to load {}: {err}", path.display());
                    return (Config::default(), Some(err.to_string()));
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

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            zoom: ZoomConfig {
                wheel_step: Some(0.25),
            },
            touch: TouchConfig {
                double_tap_window_ms: Some(400),
                double_tap_radius: Some(40.0),
                swipe_threshold: Some(80.0),
                tap_max_movement: Some(8.0),
            },
            dismiss: DismissConfig {
                fade_distance: Some(180.0),
                leftward_swipe_in_split: Some(true),
            },
            transition: TransitionConfig { exit_ms: Some(0) },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[touch\nswipe_threshold = ").expect("failed to write file");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_from_missing_path_is_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn load_with_override_falls_back_to_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "zoom = 12").expect("failed to write file");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_without_file_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_sections() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[touch]\nswipe_threshold = 70.0\n").expect("failed to write");

        let config = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(config.touch.swipe_threshold, Some(70.0));
        assert_eq!(config.touch.double_tap_window_ms, Some(DEFAULT_DOUBLE_TAP_WINDOW_MS));
        assert_eq!(config.transition, TransitionConfig::default());
    }

    #[test]
    fn gesture_settings_clamp_out_of_range_values() {
        let config = Config {
            touch: TouchConfig {
                swipe_threshold: Some(1.0),
                double_tap_window_ms: Some(10_000),
                double_tap_radius: Some(-4.0),
                tap_max_movement: None,
            },
            ..Config::default()
        };

        let settings = config.gesture_settings();
        assert_eq!(settings.swipe_threshold.value(), MIN_SWIPE_THRESHOLD);
        assert_eq!(settings.double_tap_window.value(), MAX_DOUBLE_TAP_WINDOW_MS);
        assert_eq!(settings.double_tap_radius, DEFAULT_DOUBLE_TAP_RADIUS);
        assert_eq!(settings.tap_max_movement, DEFAULT_TAP_MAX_MOVEMENT);
    }

    #[test]
    fn default_config_resolves_to_default_settings() {
        assert_eq!(Config::default().gesture_settings(), GestureSettings::default());
    }
}
