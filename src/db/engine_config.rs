//! Engine configuration file support.
//!
//! Reads `voi.toml`: which repository backend to use plus optional
//! `[policy]` overrides for the analyzer thresholds.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::factory::RepositoryType;
use super::repository::RepositoryError;
use crate::services::policy::AnalysisPolicy;

/// Engine configuration from file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub repository: RepositorySettings,
    /// Analyzer threshold overrides. Missing fields keep their defaults.
    #[serde(default)]
    pub policy: AnalysisPolicy,
}

/// Repository type settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositorySettings {
    #[serde(rename = "type")]
    pub repo_type: String,
}

impl Default for RepositorySettings {
    fn default() -> Self {
        RepositorySettings {
            repo_type: "local".to_string(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            repository: RepositorySettings::default(),
            policy: AnalysisPolicy::default(),
        }
    }
}

impl EngineConfig {
    /// Load engine configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            RepositoryError::configuration(format!("Failed to read config file: {}", e))
        })?;

        let config: EngineConfig = toml::from_str(&content).map_err(|e| {
            RepositoryError::configuration(format!("Failed to parse config file: {}", e))
        })?;

        Ok(config)
    }

    /// Load engine configuration from the default location, falling back to
    /// defaults when no `voi.toml` exists.
    ///
    /// Searches for `voi.toml` in:
    /// 1. Current directory
    /// 2. Parent directory
    pub fn from_default_location() -> Result<Self, RepositoryError> {
        let search_paths = vec![PathBuf::from("voi.toml"), PathBuf::from("../voi.toml")];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Ok(EngineConfig::default())
    }

    /// Get the repository type from configuration.
    pub fn repository_type(&self) -> Result<RepositoryType, String> {
        RepositoryType::from_str(&self.repository.repo_type)
    }
}
