use serde::{Deserialize, Serialize};

/// A new-project estimation request. Immutable per run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRequest {
    pub project_type: String,
    pub region: String,
    pub capacity: f64,
    pub execution_year: i32,
}
