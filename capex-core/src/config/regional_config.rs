use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Regional cost/productivity index table (baseline North America = 1.00).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionalIndexConfig {
    /// Index applied to regions missing from the table.
    pub default_index: f64,
    /// Region name → productivity index.
    pub indices: HashMap<String, f64>,
}

impl RegionalIndexConfig {
    /// Look up a region's index, falling back to the configured default.
    pub fn index_for(&self, region: &str) -> f64 {
        self.indices
            .get(region)
            .copied()
            .unwrap_or(self.default_index)
    }
}

impl Default for RegionalIndexConfig {
    fn default() -> Self {
        Self {
            default_index: defaults::DEFAULT_REGION_INDEX,
            indices: defaults::default_regional_indices(),
        }
    }
}
