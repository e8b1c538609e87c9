//! Min-max feature normalization.

use capex_core::constants::FEATURE_DIMENSIONS;

use crate::features::FeatureVector;

/// Per-dimension min-max transform fitted once over the full corpus.
///
/// Maps each dimension linearly onto [0, 1] using the fitted bounds. A
/// dimension with zero span (max == min) transforms to 0.0 instead of
/// dividing by zero. Query vectors outside the fitted bounds map outside
/// [0, 1]; that is intentional, distances stay meaningful.
///
/// Fitting is independent per instance: two normalizers fitted on different
/// corpora share no state.
#[derive(Debug, Clone, PartialEq)]
pub struct MinMaxNormalizer {
    mins: [f64; FEATURE_DIMENSIONS],
    maxs: [f64; FEATURE_DIMENSIONS],
}

impl MinMaxNormalizer {
    /// Fit per-dimension bounds. Returns `None` for an empty input set.
    pub fn fit(vectors: &[FeatureVector]) -> Option<Self> {
        let first = vectors.first()?;
        let mut mins = first.0;
        let mut maxs = first.0;
        for vector in &vectors[1..] {
            for dim in 0..FEATURE_DIMENSIONS {
                mins[dim] = mins[dim].min(vector.0[dim]);
                maxs[dim] = maxs[dim].max(vector.0[dim]);
            }
        }
        Some(Self { mins, maxs })
    }

    /// Apply the fitted transform to a vector.
    pub fn transform(&self, vector: &FeatureVector) -> [f64; FEATURE_DIMENSIONS] {
        let mut out = [0.0; FEATURE_DIMENSIONS];
        for dim in 0..FEATURE_DIMENSIONS {
            let span = self.maxs[dim] - self.mins[dim];
            out[dim] = if span == 0.0 {
                0.0
            } else {
                (vector.0[dim] - self.mins[dim]) / span
            };
        }
        out
    }
}
