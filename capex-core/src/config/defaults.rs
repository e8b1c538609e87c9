//! Default values for all configuration sections.

use std::collections::HashMap;

/// Productivity index applied to regions missing from the table.
pub const DEFAULT_REGION_INDEX: f64 = 1.00;

/// Year the cumulative inflation series is anchored to.
pub const DEFAULT_REFERENCE_YEAR: i32 = 2023;

/// Per-year compounding factor used when a year is not tabulated.
pub const DEFAULT_ANNUAL_INFLATION_FACTOR: f64 = 1.03;

/// Default number of comparables retrieved per request.
pub const DEFAULT_TOP_K: usize = 5;

/// Expected complexity-modifier range, checked by the reviewer.
pub const DEFAULT_COMPLEXITY_MIN: f64 = 0.95;
pub const DEFAULT_COMPLEXITY_MAX: f64 = 1.25;

/// Estimate/median ratio bounds for the distribution check.
pub const DEFAULT_HIGH_RATIO: f64 = 2.0;
pub const DEFAULT_LOW_RATIO: f64 = 0.5;

/// Minimum positive historical totals required to run the distribution check.
pub const DEFAULT_MIN_SAMPLE: usize = 3;

/// Baseline regional cost/productivity indices (North America = 1.00).
pub fn default_regional_indices() -> HashMap<String, f64> {
    HashMap::from([
        ("North America".to_string(), 1.00),
        ("Europe".to_string(), 1.08),
    ])
}

/// Cumulative inflation factors to the reference year, keyed by year.
pub fn default_inflation_series() -> HashMap<String, f64> {
    HashMap::from([
        ("2015".to_string(), 1.28),
        ("2016".to_string(), 1.25),
        ("2017".to_string(), 1.22),
        ("2018".to_string(), 1.18),
        ("2019".to_string(), 1.15),
        ("2020".to_string(), 1.12),
        ("2021".to_string(), 1.10),
        ("2022".to_string(), 1.07),
        ("2023".to_string(), 1.04),
    ])
}
