//! Configuration loading for rekha.
//!
//! Loads all tunables from a single YAML file. Every section and field is
//! optional; missing values fall back to the defaults.
//!
//! ```yaml
//! detection:
//!   max_attempts: 500
//!   inlier_tolerance: 4.0
//!   max_point_gap: 3.5
//!   min_inliers: 7
//!   min_density: 0.7
//!   seed: 42
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::extraction::RansacLineConfig;

/// Full rekha configuration loaded from YAML.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RekhaConfig {
    /// Line detection settings
    #[serde(default)]
    pub detection: RansacLineConfig,
}

impl RekhaConfig {
    /// Load and validate configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&contents)?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse and validate from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to a YAML string.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write configuration to a YAML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        std::fs::write(path, self.to_yaml()?)?;
        Ok(())
    }

    /// Check every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.detection.validate()
    }
}

impl RansacLineConfig {
    /// Check that every parameter is in range.
    ///
    /// # Errors
    /// [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive_finite("inlier_tolerance", self.inlier_tolerance)?;
        positive_finite("max_point_gap", self.max_point_gap)?;

        if !self.min_density.is_finite() || self.min_density < 0.0 {
            return Err(invalid(
                "min_density",
                format!("must be finite and non-negative, got {}", self.min_density),
            ));
        }
        if self.min_inliers < 2 {
            return Err(invalid(
                "min_inliers",
                format!("must be at least 2, got {}", self.min_inliers),
            ));
        }
        if self.max_attempts == 0 {
            return Err(invalid("max_attempts", "must be at least 1".to_string()));
        }
        if self.max_refits == 0 {
            return Err(invalid("max_refits", "must be at least 1".to_string()));
        }

        Ok(())
    }
}

fn positive_finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("must be positive and finite, got {value}")))
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}
