//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the booking
//! rules from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::BookingRules;

/// Loads and provides access to the booking-rules configuration.
///
/// The `ConfigLoader` reads a YAML rules file from a directory and hands
/// out the resulting [`BookingRules`] policy.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// └── rules.yaml   # max bookings per day, buffer hours, operating window
/// ```
///
/// # Example
///
/// ```no_run
/// use booking_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Buffer: {} hours", loader.rules().buffer_hours);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    rules: BookingRules,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/default")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if the
    /// rules file is missing or contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let rules_path = path.as_ref().join("rules.yaml");
        let rules = Self::load_yaml::<BookingRules>(&rules_path)?;
        Ok(Self { rules })
    }

    /// Creates a loader directly from an in-memory policy.
    ///
    /// Used by tests and by embedders that obtain their policy elsewhere.
    pub fn with_rules(rules: BookingRules) -> Self {
        Self { rules }
    }

    /// Returns the loaded booking rules.
    pub fn rules(&self) -> &BookingRules {
        &self.rules
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::with_rules(BookingRules::default())
    }
}
