//! Configuration file handling for PrintArea.
//!
//! Supports JSON and TOML files, chosen by extension. Configuration is
//! organized into sections:
//! - Interaction tuning (handle offset, hit tolerance, scale floor)
//! - Logging (level, output format)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use printarea_core::constants::{HIT_TOLERANCE_PX, MIN_SCALE_RATIO, ROTATE_HANDLE_OFFSET_PX};
use printarea_interaction::InteractionOptions;

use crate::error::{SettingsError, SettingsResult};

const APP_DIR: &str = "printarea";
const CONFIG_FILE: &str = "config.toml";
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Interaction tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionSettings {
    /// Screen pixels between the top edge and the rotate handle
    pub rotate_handle_offset_px: f64,
    /// Pixel radius for hitting a handle
    pub hit_tolerance_px: f64,
    /// Smallest scale factor per gesture
    pub min_scale_ratio: f64,
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            rotate_handle_offset_px: ROTATE_HANDLE_OFFSET_PX,
            hit_tolerance_px: HIT_TOLERANCE_PX,
            min_scale_ratio: MIN_SCALE_RATIO,
        }
    }
}

impl From<&InteractionSettings> for InteractionOptions {
    fn from(settings: &InteractionSettings) -> Self {
        Self {
            rotate_handle_offset_px: settings.rotate_handle_offset_px,
            min_scale_ratio: settings.min_scale_ratio,
        }
    }
}

/// Logging preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter level when `RUST_LOG` is unset
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub interaction: InteractionSettings,
    pub logging: LoggingSettings,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform configuration directory for PrintArea.
    pub fn config_dir() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no configuration directory on this platform".into())
            })
    }

    /// Default configuration file location.
    pub fn default_path() -> SettingsResult<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Loads the default file, falling back to defaults when it does not
    /// exist.
    pub fn load_or_default() -> SettingsResult<Self> {
        let path = Self::default_path()?;
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = match Format::from_path(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Save config to file (JSON or TOML), creating parent directories.
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::from_path(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                SettingsError::ConfigDirectory(format!("{}: {}", parent.display(), e))
            })?;
        }

        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        debug!(path = %path.display(), "config saved");
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let interaction = &self.interaction;

        if !interaction.rotate_handle_offset_px.is_finite()
            || interaction.rotate_handle_offset_px < 0.0
        {
            return Err(SettingsError::invalid(
                "interaction.rotate_handle_offset_px",
                "must be a finite value >= 0",
            ));
        }

        if !interaction.hit_tolerance_px.is_finite() || interaction.hit_tolerance_px <= 0.0 {
            return Err(SettingsError::invalid(
                "interaction.hit_tolerance_px",
                "must be > 0",
            ));
        }

        if !(interaction.min_scale_ratio > 0.0 && interaction.min_scale_ratio <= 1.0) {
            return Err(SettingsError::invalid(
                "interaction.min_scale_ratio",
                "must be in (0, 1]",
            ));
        }

        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(SettingsError::invalid(
                "logging.level",
                format!("expected one of {}", LOG_LEVELS.join(", ")),
            ));
        }

        Ok(())
    }

    pub fn interaction_options(&self) -> InteractionOptions {
        InteractionOptions::from(&self.interaction)
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        if path.extension().is_some_and(|ext| ext == "json") {
            Ok(Format::Json)
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            Ok(Format::Toml)
        } else {
            Err(SettingsError::invalid(
                "path",
                format!("{} must be .json or .toml", path.display()),
            ))
        }
    }
}
