use serde::{Deserialize, Serialize};

/// Scaled WBS amounts in currency units, rounded to cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaledWbs {
    pub civil_cost: f64,
    pub mechanical_cost: f64,
    pub electrical_cost: f64,
    pub automation_cost: f64,
}

impl ScaledWbs {
    /// Sum of the four scaled components (the soft-cost base).
    pub fn subtotal(&self) -> f64 {
        self.civil_cost + self.mechanical_cost + self.electrical_cost + self.automation_cost
    }
}

/// Deterministic scaling output. Recomputed each run, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaledResult {
    pub scaled_wbs: ScaledWbs,
    pub engineering_cost: f64,
    pub contingency_cost: f64,
    pub total_estimated_cost: f64,
    /// Product of the four scaling factors, rounded to 4 decimals for audit.
    pub applied_factor: f64,
}
