use serde::{Deserialize, Serialize};

use super::project::HistoricalProject;

/// One retrieved comparable with its distance to the request in normalized
/// feature space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparable {
    pub project: HistoricalProject,
    pub distance: f64,
}

/// Ordered retrieval result, nearest first.
///
/// Index 0 is the base comparable used for scaling. `type_fallback` marks the
/// documented degradation where no corpus row matched the requested project
/// type and the whole corpus was searched instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparableSet {
    pub comparables: Vec<Comparable>,
    pub type_fallback: bool,
}

impl ComparableSet {
    /// The nearest comparable's project, used as the scaling base.
    pub fn base(&self) -> Option<&HistoricalProject> {
        self.comparables.first().map(|c| &c.project)
    }

    pub fn len(&self) -> usize {
        self.comparables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comparables.is_empty()
    }

    /// Iterate over the comparable projects, nearest first.
    pub fn projects(&self) -> impl Iterator<Item = &HistoricalProject> {
        self.comparables.iter().map(|c| &c.project)
    }
}
