//! Runtime settings
//!
//! Loaded from an optional JSON file; every field has a default so a
//! partial file (or none at all) is fine.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::platform::time::DEFAULT_MAX_DELTA;
use crate::sim::camera::{DEFAULT_MOUSE_SENSITIVITY, DEFAULT_ZOOM_SENSITIVITY};

/// Why a settings file could not be used
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read settings file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Player-facing and runner settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Session seed; a random one is drawn when absent
    pub seed: Option<u64>,
    /// Camera radians per pointer pixel
    pub mouse_sensitivity: f32,
    /// Camera distance per scroll unit
    pub zoom_sensitivity: f32,
    /// Draw translucent collision spheres
    pub show_hitboxes: bool,
    /// Cap on a single frame's delta time (seconds)
    pub max_delta_time: f32,
    /// Frames simulated by the headless runner
    pub demo_frames: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            mouse_sensitivity: DEFAULT_MOUSE_SENSITIVITY,
            zoom_sensitivity: DEFAULT_ZOOM_SENSITIVITY,
            show_hitboxes: true,
            max_delta_time: DEFAULT_MAX_DELTA,
            demo_frames: 3600,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON text
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read, parse and validate a settings file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("mouse_sensitivity", self.mouse_sensitivity),
            ("zoom_sensitivity", self.zoom_sensitivity),
            ("max_delta_time", self.max_delta_time),
        ];
        for (name, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        Ok(())
    }
}
