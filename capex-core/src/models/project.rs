use serde::{Deserialize, Serialize};

/// A historical project row from the corpus. Loaded once, never mutated.
///
/// The total cost should approximate the sum of WBS components plus soft
/// costs; this is not enforced, only used by the reviewer's sanity checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalProject {
    pub project_id: String,
    pub project_name: String,
    pub project_type: String,
    pub region: String,
    pub site: String,
    pub capacity: f64,
    pub total_cost_usd: f64,
    pub civil_cost: f64,
    pub mechanical_cost: f64,
    pub electrical_cost: f64,
    pub automation_cost: f64,
    pub contingency_pct: f64,
    pub execution_year: i32,
}

impl HistoricalProject {
    /// WBS components in canonical order: civil, mechanical, electrical,
    /// automation. Components absent from the source row were parsed as 0.
    pub fn wbs_components(&self) -> [f64; 4] {
        [
            self.civil_cost,
            self.mechanical_cost,
            self.electrical_cost,
            self.automation_cost,
        ]
    }
}
