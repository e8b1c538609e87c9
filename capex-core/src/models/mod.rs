//! Shared value objects for the estimation pipeline.
//!
//! Everything here is constructed and consumed within a single run, except
//! [`HistoricalProject`], which is loaded once and never mutated.

mod comparable;
mod factors;
mod payload;
mod project;
mod request;
mod review;
mod scaled;

pub use comparable::{Comparable, ComparableSet};
pub use factors::{FactorEstimate, ScalingFactors, SoftCosts};
pub use payload::EstimatePayload;
pub use project::HistoricalProject;
pub use request::ProjectRequest;
pub use review::{ConfidenceLabel, ReviewOutcome};
pub use scaled::{ScaledResult, ScaledWbs};
