use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::comparable::Comparable;
use super::factors::{ScalingFactors, SoftCosts};
use super::project::HistoricalProject;
use super::request::ProjectRequest;
use super::review::ReviewOutcome;
use super::scaled::ScaledResult;

/// Output payload of one estimation run, consumed by the external report
/// renderer. Everything a human-facing summary needs, nothing rendered here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatePayload {
    pub estimate_id: Uuid,
    pub generated_at: DateTime<Utc>,
    /// The request, echoed back verbatim.
    pub request: ProjectRequest,
    /// The nearest comparable used as the scaling base.
    pub base_comparable: HistoricalProject,
    /// All retrieved comparables with distances, nearest first.
    pub comparables: Vec<Comparable>,
    /// Factors actually applied, after the inflation fallback.
    pub scaling_factors: ScalingFactors,
    pub soft_costs: SoftCosts,
    pub scaled_result: ScaledResult,
    pub review: ReviewOutcome,
    /// Oracle rationale strings, passed through unmodified.
    pub rationale: Vec<String>,
    /// Pipeline-level notes, e.g. the project-type fallback degradation.
    pub notes: Vec<String>,
}
