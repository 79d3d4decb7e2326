//! Session configuration
//!
//! All fields have defaults, so an empty JSON object is a valid
//! configuration. Values are clamped into range after loading.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::temporal::playback::{DEFAULT_SPEED, MAX_SPEED, MIN_SPEED};

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Logical drawing surface size used by the render mapper
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 400.0,
        }
    }
}

/// Tunables for one visualization session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Playback speed at session start, 1..=10
    pub default_speed: u8,
    /// Length of randomized numeric datasets
    pub random_length: usize,
    /// Exclusive upper bound of randomized values
    pub random_max: i64,
    /// Node count of randomized graphs
    pub random_graph_nodes: usize,
    /// Extra edges added on top of the random spanning tree
    pub random_graph_extra_edges: usize,
    /// Parse edge pairs typed by the user as directed
    pub directed: bool,
    /// Seed for randomization; entropy when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub canvas: CanvasConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_speed: DEFAULT_SPEED,
            random_length: 15,
            random_max: 100,
            random_graph_nodes: 6,
            random_graph_extra_edges: 2,
            directed: false,
            seed: None,
            canvas: CanvasConfig::default(),
        }
    }
}

impl SessionConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SessionConfig = serde_json::from_str(json)?;
        Ok(config.sanitized())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loaded configuration from {}", path.display());
        Self::from_json_str(&text)
    }

    /// Clamps every field into its usable range
    pub fn sanitized(mut self) -> Self {
        let defaults = CanvasConfig::default();
        self.default_speed = self.default_speed.clamp(MIN_SPEED, MAX_SPEED);
        self.random_max = self.random_max.max(1);
        if !(self.canvas.width.is_finite() && self.canvas.width > 0.0) {
            self.canvas.width = defaults.width;
        }
        if !(self.canvas.height.is_finite() && self.canvas.height > 0.0) {
            self.canvas.height = defaults.height;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = SessionConfig::from_json_str("{}").unwrap();
        assert_eq!(config, SessionConfig::default());
        assert_eq!(config.default_speed, 5);
        assert_eq!(config.random_length, 15);
        assert_eq!(config.canvas.width, 800.0);
        assert!(!config.directed);
    }

    #[test]
    fn test_values_are_clamped() {
        let config = SessionConfig::from_json_str(
            r#"{"default_speed": 40, "random_max": -3, "canvas": {"width": 0}}"#,
        )
        .unwrap();
        assert_eq!(config.default_speed, MAX_SPEED);
        assert_eq!(config.random_max, 1);
        assert_eq!(config.canvas.width, 800.0);
        assert_eq!(config.canvas.height, 400.0);
    }

    #[test]
    fn test_malformed_json_is_reported() {
        assert!(matches!(
            SessionConfig::from_json_str("{\"default_speed\": \"fast\"}"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_is_reported() {
        let err = SessionConfig::load("/nonexistent/algoscope.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/algoscope.json"));
    }
}
