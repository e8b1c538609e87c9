//! ScalingEngine: resolve factors, scale the WBS, add soft costs.

use tracing::debug;

use capex_core::config::InflationConfig;
use capex_core::models::{HistoricalProject, ScaledResult, ScaledWbs, ScalingFactors, SoftCosts};
use capex_core::money::{round_currency, round_factor};

use crate::inflation::derive_inflation_factor;

/// Factor set after inflation resolution: all four multipliers concrete.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedFactors {
    pub capacity_scale_factor: f64,
    pub regional_index_factor: f64,
    pub inflation_factor: f64,
    pub complexity_modifier: f64,
}

impl ResolvedFactors {
    /// Product of the four factors, applied uniformly to every WBS component.
    pub fn combined(&self) -> f64 {
        self.capacity_scale_factor
            * self.regional_index_factor
            * self.inflation_factor
            * self.complexity_modifier
    }

    /// Back to the payload shape, inflation now always present.
    pub fn as_scaling_factors(&self) -> ScalingFactors {
        ScalingFactors {
            capacity_scale_factor: self.capacity_scale_factor,
            regional_index_factor: self.regional_index_factor,
            inflation_factor: Some(self.inflation_factor),
            complexity_modifier: self.complexity_modifier,
        }
    }
}

/// Deterministic cost scaler. Holds the inflation series used when the
/// oracle's inflation factor has to be replaced.
pub struct ScalingEngine {
    inflation: InflationConfig,
}

impl ScalingEngine {
    pub fn new(inflation: InflationConfig) -> Self {
        Self { inflation }
    }

    /// Resolve the working factor set for a base project.
    ///
    /// The oracle's inflation value is not assumed reliable: absent or
    /// non-positive values are replaced by a derivation from the base
    /// project's execution year. The oracle's payload stays untouched.
    pub fn resolve(&self, base: &HistoricalProject, factors: &ScalingFactors) -> ResolvedFactors {
        let inflation_factor = match factors.supplied_inflation() {
            Some(value) => value,
            None => {
                let derived = derive_inflation_factor(base.execution_year, &self.inflation);
                debug!(
                    execution_year = base.execution_year,
                    derived, "inflation factor derived from base execution year"
                );
                derived
            }
        };
        ResolvedFactors {
            capacity_scale_factor: factors.capacity_scale_factor,
            regional_index_factor: factors.regional_index_factor,
            inflation_factor,
            complexity_modifier: factors.complexity_modifier,
        }
    }

    /// Scale the base project's WBS and add soft costs. Pure; no side effects.
    pub fn apply(
        &self,
        base: &HistoricalProject,
        factors: &ScalingFactors,
        soft_costs: &SoftCosts,
    ) -> ScaledResult {
        let resolved = self.resolve(base, factors);
        self.apply_resolved(base, resolved, soft_costs)
    }

    /// Scale with an already-resolved factor set.
    pub fn apply_resolved(
        &self,
        base: &HistoricalProject,
        resolved: ResolvedFactors,
        soft_costs: &SoftCosts,
    ) -> ScaledResult {
        let combined = resolved.combined();
        let [civil, mechanical, electrical, automation] = base.wbs_components();

        let scaled_wbs = ScaledWbs {
            civil_cost: round_currency(civil * combined),
            mechanical_cost: round_currency(mechanical * combined),
            electrical_cost: round_currency(electrical * combined),
            automation_cost: round_currency(automation * combined),
        };
        let subtotal = scaled_wbs.subtotal();
        let engineering_cost = round_currency(subtotal * soft_costs.engineering_pct);
        let contingency_cost = round_currency(subtotal * soft_costs.contingency_pct);
        let total_estimated_cost = round_currency(subtotal + engineering_cost + contingency_cost);

        ScaledResult {
            scaled_wbs,
            engineering_cost,
            contingency_cost,
            total_estimated_cost,
            applied_factor: round_factor(combined),
        }
    }
}
