//! Trait seams between the deterministic core and external collaborators.

use crate::errors::CapexResult;
use crate::models::{ComparableSet, FactorEstimate, ProjectRequest};

/// The external factor-producing oracle, consumed as a blocking call.
///
/// Given the request and the retrieved comparables, an implementation returns
/// adjustment factors and soft-cost percentages. The reasoning behind the
/// values is opaque; the pipeline validates the payload's structural contract
/// before scaling and never re-derives or "fixes" out-of-range values —
/// judging those is the reviewer's job.
pub trait IFactorOracle {
    fn infer_factors(
        &self,
        request: &ProjectRequest,
        comparables: &ComparableSet,
    ) -> CapexResult<FactorEstimate>;
}
