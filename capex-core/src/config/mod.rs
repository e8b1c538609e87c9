//! Workspace configuration.
//!
//! All lookup tables (regional index, inflation series, review bounds) are
//! explicit configuration handed to components at construction time — no
//! ambient global state, so tests can swap tables per case. Loaded from TOML;
//! an empty file yields full defaults and a partial file overrides per-field.

pub mod defaults;

mod inflation_config;
mod regional_config;
mod retrieval_config;
mod review_config;

pub use inflation_config::InflationConfig;
pub use regional_config::RegionalIndexConfig;
pub use retrieval_config::RetrievalConfig;
pub use review_config::ReviewConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{CapexResult, ConfigError};

/// Top-level configuration for the estimation pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CapexConfig {
    pub regional: RegionalIndexConfig,
    pub inflation: InflationConfig,
    pub retrieval: RetrievalConfig,
    pub review: ReviewConfig,
}

impl CapexConfig {
    /// Parse a TOML string, filling unspecified fields with defaults.
    pub fn from_toml(input: &str) -> CapexResult<Self> {
        let config = toml::from_str(input).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        Ok(config)
    }

    /// Load configuration from a TOML file on disk.
    pub fn from_path(path: &std::path::Path) -> CapexResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&content)
    }
}
