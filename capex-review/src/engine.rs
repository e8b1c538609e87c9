//! ReviewEngine: range check → distribution check → confidence.

use tracing::debug;

use capex_core::config::ReviewConfig;
use capex_core::models::{
    ComparableSet, ConfidenceLabel, ReviewOutcome, ScaledResult, ScalingFactors,
};

use crate::stats::median;

/// Rule-based estimate reviewer. Pure: no I/O, no state beyond its config.
pub struct ReviewEngine {
    config: ReviewConfig,
}

impl ReviewEngine {
    pub fn new(config: ReviewConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReviewConfig {
        &self.config
    }

    /// Run the checks in fixed order and derive the confidence label.
    ///
    /// Flags and notes come out in check order: range first, distribution
    /// second. The distribution check is gated on `min_sample` positive
    /// historical totals; below that it is skipped silently.
    pub fn review(
        &self,
        comparables: &ComparableSet,
        scaled: &ScaledResult,
        factors: &ScalingFactors,
    ) -> ReviewOutcome {
        let mut flags = Vec::new();
        let mut notes = Vec::new();

        // Check 1: complexity modifier inside the expected band.
        let complexity = factors.complexity_modifier;
        if !(self.config.complexity_min..=self.config.complexity_max).contains(&complexity) {
            flags.push(format!(
                "Complexity modifier {complexity} outside expected range {}-{}.",
                self.config.complexity_min, self.config.complexity_max
            ));
        }

        // Check 2: scaled total vs the historical distribution.
        let totals: Vec<f64> = comparables
            .projects()
            .map(|p| p.total_cost_usd)
            .filter(|total| *total > 0.0)
            .collect();
        if totals.len() >= self.config.min_sample {
            let med = median(&totals);
            let ratio = if med > 0.0 {
                scaled.total_estimated_cost / med
            } else {
                0.0
            };
            if ratio > self.config.high_ratio {
                flags.push(format!(
                    "Total estimate >{}x median of comparables.",
                    self.config.high_ratio
                ));
            } else if ratio < self.config.low_ratio {
                flags.push(format!(
                    "Total estimate <{}x median of comparables.",
                    self.config.low_ratio
                ));
            }
            // The advisory note lands whether or not a flag fired.
            notes.push(format!(
                "Median of comparables: {med:.0}; estimate/median ratio: {ratio:.2}"
            ));
        } else {
            debug!(
                samples = totals.len(),
                min_sample = self.config.min_sample,
                "skipping distribution check, not enough positive totals"
            );
        }

        let confidence = ConfidenceLabel::from_flag_count(flags.len());
        ReviewOutcome {
            flags,
            notes,
            confidence,
        }
    }
}

impl Default for ReviewEngine {
    fn default() -> Self {
        Self::new(ReviewConfig::default())
    }
}
