//! Inflation-factor derivation from a base project's execution year.

use capex_core::config::InflationConfig;

/// Cumulative inflation factor for an execution year.
///
/// Tabulated years use the configured series. Other years compound the
/// annual factor once per year before the reference year; years at or after
/// the reference year yield 1.0.
pub fn derive_inflation_factor(execution_year: i32, config: &InflationConfig) -> f64 {
    if let Some(factor) = config.tabulated(execution_year) {
        return factor;
    }
    let years = (config.reference_year - execution_year).max(0);
    config.annual_factor.powi(years)
}
