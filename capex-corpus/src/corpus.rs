use capex_core::models::HistoricalProject;

/// The read-only historical corpus. Loaded once at process start; shared
/// freely across concurrent estimation runs, never mutated after load.
#[derive(Debug, Clone)]
pub struct ProjectCorpus {
    projects: Vec<HistoricalProject>,
}

impl ProjectCorpus {
    pub fn new(projects: Vec<HistoricalProject>) -> Self {
        Self { projects }
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// All projects in original corpus order.
    pub fn projects(&self) -> &[HistoricalProject] {
        &self.projects
    }
}
