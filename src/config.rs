//! Engine configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Which hand pose confirms the hovered cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GestureKind {
    /// All four fingers curled.
    #[default]
    Fist,
    /// Thumb tip touching the index fingertip.
    Pinch,
}

/// Engine settings.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Pause before the computer's reply is applied, in milliseconds.
    #[serde(default = "default_thinking_delay_ms")]
    thinking_delay_ms: u64,

    /// Pose that confirms a move.
    #[serde(default)]
    gesture: GestureKind,

    /// Maximum thumb-to-index distance that counts as a pinch.
    #[serde(default = "default_pinch_threshold")]
    pinch_threshold: f32,
}

#[instrument]
fn default_thinking_delay_ms() -> u64 {
    400
}

#[instrument]
fn default_pinch_threshold() -> f32 {
    0.05
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            thinking_delay_ms: default_thinking_delay_ms(),
            gesture: GestureKind::default(),
            pinch_threshold: default_pinch_threshold(),
        }
    }
}

impl EngineConfig {
    /// Loads configuration from a TOML file.
    ///
    /// Missing keys fall back to their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            thinking_delay_ms = config.thinking_delay_ms,
            gesture = ?config.gesture,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.pinch_threshold > 0.0 && self.pinch_threshold < 1.0) {
            return Err(ConfigError::new(format!(
                "pinch_threshold must be in (0, 1), got {}",
                self.pinch_threshold
            )));
        }
        Ok(())
    }

    /// Thinking delay as a [`Duration`].
    pub fn thinking_delay(&self) -> Duration {
        Duration::from_millis(self.thinking_delay_ms)
    }

    /// Returns a copy with a different thinking delay.
    pub fn with_thinking_delay_ms(mut self, thinking_delay_ms: u64) -> Self {
        self.thinking_delay_ms = thinking_delay_ms;
        self
    }

    /// Returns a copy with a different confirm gesture.
    pub fn with_gesture(mut self, gesture: GestureKind) -> Self {
        self.gesture = gesture;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(*config.thinking_delay_ms(), 400);
        assert_eq!(config.thinking_delay(), Duration::from_millis(400));
        assert_eq!(*config.gesture(), GestureKind::Fist);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = EngineConfig::from_toml("").expect("empty config is valid");
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "thinking_delay_ms = 50\ngesture = \"pinch\"").expect("write config");

        let config = EngineConfig::from_file(file.path()).expect("valid config");
        assert_eq!(*config.thinking_delay_ms(), 50);
        assert_eq!(*config.gesture(), GestureKind::Pinch);
        assert_eq!(*config.pinch_threshold(), 0.05);
    }

    #[test]
    fn test_missing_file() {
        let err = EngineConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(err.message.contains("Failed to read config file"));
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(EngineConfig::from_toml("gesture = \"wave\"").is_err());
        assert!(EngineConfig::from_toml("pinch_threshold = 2.0").is_err());
    }
}
