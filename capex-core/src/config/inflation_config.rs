use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Cumulative construction-inflation series anchored to a reference year.
///
/// Years missing from the table fall back to per-year compounding:
/// `annual_factor ^ (reference_year - year)`, clamped at 1.0 for years at or
/// after the reference year.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InflationConfig {
    /// Year the series is anchored to.
    pub reference_year: i32,
    /// Compounding factor per missing year.
    pub annual_factor: f64,
    /// Calendar year (string key, TOML table keys are strings) → cumulative
    /// factor to the reference year.
    pub by_year: HashMap<String, f64>,
}

impl InflationConfig {
    /// Tabulated cumulative factor for a year, if present.
    pub fn tabulated(&self, year: i32) -> Option<f64> {
        self.by_year.get(&year.to_string()).copied()
    }
}

impl Default for InflationConfig {
    fn default() -> Self {
        Self {
            reference_year: defaults::DEFAULT_REFERENCE_YEAR,
            annual_factor: defaults::DEFAULT_ANNUAL_INFLATION_FACTOR,
            by_year: defaults::default_inflation_series(),
        }
    }
}
