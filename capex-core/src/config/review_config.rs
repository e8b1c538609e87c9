use serde::{Deserialize, Serialize};

use super::defaults;

/// Reviewer sanity-check bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewConfig {
    /// Expected complexity-modifier range.
    pub complexity_min: f64,
    pub complexity_max: f64,
    /// Estimate/median ratio above which the estimate is flagged as high.
    pub high_ratio: f64,
    /// Estimate/median ratio below which the estimate is flagged as low.
    pub low_ratio: f64,
    /// Minimum positive historical totals required for the distribution check.
    pub min_sample: usize,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            complexity_min: defaults::DEFAULT_COMPLEXITY_MIN,
            complexity_max: defaults::DEFAULT_COMPLEXITY_MAX,
            high_ratio: defaults::DEFAULT_HIGH_RATIO,
            low_ratio: defaults::DEFAULT_LOW_RATIO,
            min_sample: defaults::DEFAULT_MIN_SAMPLE,
        }
    }
}
