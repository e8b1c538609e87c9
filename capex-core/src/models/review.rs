use std::fmt;

use serde::{Deserialize, Serialize};

/// Three-level confidence label, a pure function of the reviewer's flag
/// count: 0 → High, 1 → Medium, 2+ → Low. No weighting between flag types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceLabel {
    High,
    Medium,
    Low,
}

impl ConfidenceLabel {
    pub fn from_flag_count(flags: usize) -> Self {
        match flags {
            0 => Self::High,
            1 => Self::Medium,
            _ => Self::Low,
        }
    }
}

impl fmt::Display for ConfidenceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        };
        write!(f, "{label}")
    }
}

/// Reviewer output: problems, advisory notes, and the confidence label.
/// Flags and notes preserve the order in which the checks ran.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewOutcome {
    pub flags: Vec<String>,
    pub notes: Vec<String>,
    pub confidence: ConfidenceLabel,
}
