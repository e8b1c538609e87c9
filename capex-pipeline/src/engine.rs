//! EstimatePipeline: orchestrates the full estimation run.

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use capex_core::config::CapexConfig;
use capex_core::errors::{CapexResult, RetrievalError};
use capex_core::models::{EstimatePayload, ProjectRequest};
use capex_core::traits::IFactorOracle;
use capex_corpus::ProjectCorpus;
use capex_retrieval::RetrievalEngine;
use capex_review::ReviewEngine;
use capex_scaling::ScalingEngine;

/// The estimation pipeline. Built once over a loaded corpus (fitting the
/// retrieval normalizer in the process) and reused for every request.
pub struct EstimatePipeline {
    retrieval: RetrievalEngine,
    scaling: ScalingEngine,
    review: ReviewEngine,
    top_k: usize,
}

impl EstimatePipeline {
    /// Build over a loaded corpus. Fails on an empty corpus.
    pub fn new(corpus: ProjectCorpus, config: &CapexConfig) -> CapexResult<Self> {
        let retrieval = RetrievalEngine::new(corpus, config.regional.clone())?;
        Ok(Self {
            retrieval,
            scaling: ScalingEngine::new(config.inflation.clone()),
            review: ReviewEngine::new(config.review.clone()),
            top_k: config.retrieval.top_k,
        })
    }

    pub fn corpus(&self) -> &ProjectCorpus {
        self.retrieval.corpus()
    }

    /// Run one estimation with the configured top-k.
    pub fn estimate(
        &self,
        request: &ProjectRequest,
        oracle: &dyn IFactorOracle,
    ) -> CapexResult<EstimatePayload> {
        self.estimate_with_top_k(request, oracle, self.top_k)
    }

    /// Run one estimation with an explicit top-k.
    pub fn estimate_with_top_k(
        &self,
        request: &ProjectRequest,
        oracle: &dyn IFactorOracle,
        top_k: usize,
    ) -> CapexResult<EstimatePayload> {
        // Step 1: retrieve comparables. The base comparable is required, so
        // top_k is at least 1.
        let comparables = self.retrieval.find_similar(request, top_k.max(1));
        let mut notes = Vec::new();
        if comparables.type_fallback {
            notes.push(format!(
                "No historical projects of type '{}'; searched the whole corpus instead.",
                request.project_type
            ));
        }
        let base = comparables
            .base()
            .cloned()
            .ok_or(RetrievalError::EmptyCorpus)?;
        debug!(
            comparables = comparables.len(),
            base = %base.project_id,
            "comparables retrieved"
        );

        // Step 2: consult the external oracle and hold it to its contract.
        let estimate = oracle.infer_factors(request, &comparables)?;
        estimate.validate()?;
        debug!(rationale_items = estimate.rationale.len(), "oracle payload accepted");

        // Step 3: deterministic scaling, inflation fallback included.
        let resolved = self.scaling.resolve(&base, &estimate.scaling_factors);
        let scaled = self
            .scaling
            .apply_resolved(&base, resolved, &estimate.soft_costs);

        // Step 4: review against bounds and the historical distribution.
        let review = self
            .review
            .review(&comparables, &scaled, &estimate.scaling_factors);

        info!(
            total = scaled.total_estimated_cost,
            confidence = %review.confidence,
            "estimate complete"
        );

        Ok(EstimatePayload {
            estimate_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            request: request.clone(),
            base_comparable: base,
            comparables: comparables.comparables,
            scaling_factors: resolved.as_scaling_factors(),
            soft_costs: estimate.soft_costs,
            scaled_result: scaled,
            review,
            rationale: estimate.rationale,
            notes,
        })
    }
}
