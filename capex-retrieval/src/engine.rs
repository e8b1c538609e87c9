//! RetrievalEngine: type filter → vectorize → normalize → K nearest.

use std::cmp::Ordering;

use tracing::{debug, warn};

use capex_core::config::RegionalIndexConfig;
use capex_core::constants::FEATURE_DIMENSIONS;
use capex_core::errors::{CapexResult, RetrievalError};
use capex_core::models::{Comparable, ComparableSet, HistoricalProject, ProjectRequest};
use capex_corpus::ProjectCorpus;

use crate::features::FeatureVector;
use crate::normalize::MinMaxNormalizer;

/// Comparable-project retriever.
///
/// Owns the corpus and a normalizer fitted over the *entire* corpus at
/// construction time — the same fitted transform serves every request, and
/// also applies when the type filter narrows the candidate set. `&self`
/// retrieval keeps the engine shareable across concurrent runs.
#[derive(Debug)]
pub struct RetrievalEngine {
    corpus: ProjectCorpus,
    regional: RegionalIndexConfig,
    normalizer: MinMaxNormalizer,
}

impl RetrievalEngine {
    /// Construct over a corpus, fitting the min-max normalizer once.
    pub fn new(corpus: ProjectCorpus, regional: RegionalIndexConfig) -> CapexResult<Self> {
        let vectors: Vec<FeatureVector> = corpus
            .projects()
            .iter()
            .map(|p| FeatureVector::for_project(p, &regional))
            .collect();
        let normalizer = MinMaxNormalizer::fit(&vectors).ok_or(RetrievalError::EmptyCorpus)?;
        Ok(Self {
            corpus,
            regional,
            normalizer,
        })
    }

    /// The corpus this engine retrieves from.
    pub fn corpus(&self) -> &ProjectCorpus {
        &self.corpus
    }

    /// Find up to `top_k` comparables for a request, nearest first.
    ///
    /// Candidates of the requested project type are preferred; when none
    /// exist the whole corpus is searched and the result is marked
    /// `type_fallback`. Ties in distance keep original corpus order.
    pub fn find_similar(&self, request: &ProjectRequest, top_k: usize) -> ComparableSet {
        let same_type: Vec<&HistoricalProject> = self
            .corpus
            .projects()
            .iter()
            .filter(|p| p.project_type == request.project_type)
            .collect();

        let type_fallback = same_type.is_empty();
        if type_fallback {
            warn!(
                project_type = %request.project_type,
                "no same-type projects in corpus, searching whole corpus"
            );
        }
        let candidates: Vec<&HistoricalProject> = if type_fallback {
            self.corpus.projects().iter().collect()
        } else {
            same_type
        };

        let query = self
            .normalizer
            .transform(&FeatureVector::for_request(request, &self.regional));

        let mut comparables: Vec<Comparable> = candidates
            .into_iter()
            .map(|project| {
                let row = self
                    .normalizer
                    .transform(&FeatureVector::for_project(project, &self.regional));
                Comparable {
                    project: project.clone(),
                    distance: euclidean(&query, &row),
                }
            })
            .collect();

        // Stable sort: equal distances keep corpus order.
        comparables.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(Ordering::Equal)
        });
        comparables.truncate(top_k);

        debug!(
            returned = comparables.len(),
            top_k, type_fallback, "retrieval complete"
        );

        ComparableSet {
            comparables,
            type_fallback,
        }
    }
}

fn euclidean(a: &[f64; FEATURE_DIMENSIONS], b: &[f64; FEATURE_DIMENSIONS]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}
