//! # capex-core
//!
//! Foundation crate for the capex estimation workspace.
//! Defines all shared models, errors, config, constants, and traits.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod money;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::CapexConfig;
pub use errors::{CapexError, CapexResult};
pub use models::{
    ComparableSet, ConfidenceLabel, EstimatePayload, FactorEstimate, HistoricalProject,
    ProjectRequest, ReviewOutcome, ScaledResult, ScalingFactors, SoftCosts,
};
pub use traits::IFactorOracle;
