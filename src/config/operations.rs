//! Config loading, validation, and utility operations.

use super::model::Config;
use crate::error::{CharterError, Result};
use std::path::Path;
use tracing::debug;

impl Config {
    /// Load config from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            CharterError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load config from `path` if it exists, otherwise return the defaults.
    ///
    /// A config file that exists but fails to parse or validate is an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            debug!(path = %path.display(), "loading config");
            Self::load(path)
        } else {
            debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty file means all defaults.
        let config: Config = if yaml.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(yaml).map_err(|e| {
                CharterError::UserError(format!("failed to parse config YAML: {}", e))
            })?
        };

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            CharterError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `vision_candidates` must contain at least one non-empty path
    /// - `sprint_duration_days` must be positive
    /// - `specialization_threshold` must be positive
    /// - `high_priority_threshold` must not be below `specialization_threshold`
    pub fn validate(&self) -> Result<()> {
        if self.vision_candidates.is_empty() {
            return Err(invalid("vision_candidates must list at least one path"));
        }
        if self.vision_candidates.iter().any(|c| c.trim().is_empty()) {
            return Err(invalid("vision_candidates entries must be non-empty"));
        }

        if self.sprint_duration_days == 0 {
            return Err(invalid("sprint_duration_days must be greater than 0"));
        }

        if self.specialization_threshold == 0 {
            return Err(invalid("specialization_threshold must be greater than 0"));
        }

        if self.high_priority_threshold < self.specialization_threshold {
            return Err(CharterError::UserError(format!(
                "config validation failed: high_priority_threshold ({}) must be at least specialization_threshold ({})",
                self.high_priority_threshold, self.specialization_threshold
            )));
        }

        Ok(())
    }
}

fn invalid(message: &str) -> CharterError {
    CharterError::UserError(format!("config validation failed: {}", message))
}
