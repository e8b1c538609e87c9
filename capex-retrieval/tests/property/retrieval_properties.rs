use capex_core::config::RegionalIndexConfig;
use capex_core::models::{HistoricalProject, ProjectRequest};
use capex_corpus::ProjectCorpus;
use capex_retrieval::{FeatureVector, MinMaxNormalizer, RetrievalEngine};
use proptest::prelude::*;

const TYPES: [&str; 3] = ["Filling Line", "Packaging Hall", "Utilities Upgrade"];
const REGIONS: [&str; 3] = ["North America", "Europe", "Patagonia"];

fn arb_project() -> impl Strategy<Value = HistoricalProject> {
    (
        0usize..TYPES.len(),
        0usize..REGIONS.len(),
        1.0f64..1000.0,
        2000i32..2026,
        0.0f64..20_000_000.0,
    )
        .prop_map(|(t, r, capacity, year, total)| HistoricalProject {
            project_id: format!("P-{t}-{r}"),
            project_name: "prop project".to_string(),
            project_type: TYPES[t].to_string(),
            region: REGIONS[r].to_string(),
            site: "Plant Prop".to_string(),
            capacity,
            total_cost_usd: total,
            civil_cost: total * 0.15,
            mechanical_cost: total * 0.45,
            electrical_cost: total * 0.12,
            automation_cost: total * 0.08,
            contingency_pct: 8.0,
            execution_year: year,
        })
}

fn arb_request() -> impl Strategy<Value = ProjectRequest> {
    (
        0usize..TYPES.len(),
        0usize..REGIONS.len(),
        1.0f64..1000.0,
        2000i32..2026,
    )
        .prop_map(|(t, r, capacity, year)| ProjectRequest {
            project_type: TYPES[t].to_string(),
            region: REGIONS[r].to_string(),
            capacity,
            execution_year: year,
        })
}

// ── Fitted corpus vectors always land in [0, 1] ─────────────────────────

proptest! {
    #[test]
    fn corpus_vectors_transform_into_unit_interval(
        projects in prop::collection::vec(arb_project(), 1..30)
    ) {
        let regional = RegionalIndexConfig::default();
        let vectors: Vec<FeatureVector> = projects
            .iter()
            .map(|p| FeatureVector::for_project(p, &regional))
            .collect();
        let normalizer = MinMaxNormalizer::fit(&vectors).unwrap();

        for vector in &vectors {
            for value in normalizer.transform(vector) {
                prop_assert!((0.0..=1.0).contains(&value));
            }
        }
    }
}

// ── Retrieval invariants: size bound, type preference, ordering ─────────

proptest! {
    #[test]
    fn retrieval_respects_top_k_type_and_ordering(
        projects in prop::collection::vec(arb_project(), 1..30),
        request in arb_request(),
        top_k in 0usize..10,
    ) {
        let any_same_type = projects
            .iter()
            .any(|p| p.project_type == request.project_type);
        let same_type_count = projects
            .iter()
            .filter(|p| p.project_type == request.project_type)
            .count();

        let engine = RetrievalEngine::new(
            ProjectCorpus::new(projects),
            RegionalIndexConfig::default(),
        )
        .unwrap();
        let result = engine.find_similar(&request, top_k);

        prop_assert!(result.len() <= top_k);
        if any_same_type {
            prop_assert!(!result.type_fallback);
            prop_assert_eq!(result.len(), top_k.min(same_type_count));
            for project in result.projects() {
                prop_assert_eq!(&project.project_type, &request.project_type);
            }
        } else {
            prop_assert!(result.type_fallback);
        }
        for pair in result.comparables.windows(2) {
            prop_assert!(pair[0].distance <= pair[1].distance);
        }
    }
}

// ── Retrieval is deterministic ──────────────────────────────────────────

proptest! {
    #[test]
    fn retrieval_is_deterministic(
        projects in prop::collection::vec(arb_project(), 1..20),
        request in arb_request(),
    ) {
        let engine = RetrievalEngine::new(
            ProjectCorpus::new(projects),
            RegionalIndexConfig::default(),
        )
        .unwrap();
        let first = engine.find_similar(&request, 5);
        let second = engine.find_similar(&request, 5);
        prop_assert_eq!(first, second);
    }
}
