//! Project feature vectors.
//!
//! Three dimensions in fixed order: capacity, regional cost index, execution
//! year. The region index comes from the shared regional-index table;
//! unmapped regions use the configured default.

use capex_core::config::RegionalIndexConfig;
use capex_core::constants::FEATURE_DIMENSIONS;
use capex_core::models::{HistoricalProject, ProjectRequest};

/// Raw (un-normalized) feature vector for a project or a request.
/// Recomputed on demand, never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector(pub [f64; FEATURE_DIMENSIONS]);

impl FeatureVector {
    pub fn for_project(project: &HistoricalProject, regional: &RegionalIndexConfig) -> Self {
        Self([
            project.capacity,
            regional.index_for(&project.region),
            f64::from(project.execution_year),
        ])
    }

    pub fn for_request(request: &ProjectRequest, regional: &RegionalIndexConfig) -> Self {
        Self([
            request.capacity,
            regional.index_for(&request.region),
            f64::from(request.execution_year),
        ])
    }
}
