/// Capex system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Canonical WBS component column order: civil, mechanical, electrical,
/// automation. Corpus parsing, scaling, and payload assembly all follow it.
pub const WBS_COMPONENTS: [&str; 4] = [
    "civil_cost",
    "mechanical_cost",
    "electrical_cost",
    "automation_cost",
];

/// Number of dimensions in a project feature vector:
/// capacity, region index, execution year.
pub const FEATURE_DIMENSIONS: usize = 3;
