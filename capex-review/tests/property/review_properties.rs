use capex_core::config::ReviewConfig;
use capex_core::models::{
    Comparable, ComparableSet, ConfidenceLabel, HistoricalProject, ScaledResult, ScaledWbs,
    ScalingFactors,
};
use capex_review::ReviewEngine;
use proptest::prelude::*;

fn comparable_with_total(total: f64) -> Comparable {
    Comparable {
        project: HistoricalProject {
            project_id: "P-PROP".to_string(),
            project_name: "prop comparable".to_string(),
            project_type: "Filling Line".to_string(),
            region: "Europe".to_string(),
            site: "Plant Prop".to_string(),
            capacity: 400.0,
            total_cost_usd: total,
            civil_cost: 0.0,
            mechanical_cost: 0.0,
            electrical_cost: 0.0,
            automation_cost: 0.0,
            contingency_pct: 8.0,
            execution_year: 2021,
        },
        distance: 0.0,
    }
}

fn scaled_with_total(total: f64) -> ScaledResult {
    ScaledResult {
        scaled_wbs: ScaledWbs {
            civil_cost: 0.0,
            mechanical_cost: 0.0,
            electrical_cost: 0.0,
            automation_cost: 0.0,
        },
        engineering_cost: 0.0,
        contingency_cost: 0.0,
        total_estimated_cost: total,
        applied_factor: 1.0,
    }
}

proptest! {
    #[test]
    fn confidence_is_a_pure_function_of_flag_count(
        totals in prop::collection::vec(0.0f64..20_000_000.0, 0..8),
        scaled_total in 100_000.0f64..100_000_000.0,
        complexity in 0.5f64..1.6,
    ) {
        let engine = ReviewEngine::new(ReviewConfig::default());
        let comparables = ComparableSet {
            comparables: totals.iter().map(|t| comparable_with_total(*t)).collect(),
            type_fallback: false,
        };
        let factors = ScalingFactors {
            capacity_scale_factor: 1.0,
            regional_index_factor: 1.0,
            inflation_factor: Some(1.0),
            complexity_modifier: complexity,
        };

        let outcome = engine.review(&comparables, &scaled_with_total(scaled_total), &factors);

        // At most one flag per check.
        prop_assert!(outcome.flags.len() <= 2);
        let expected = match outcome.flags.len() {
            0 => ConfidenceLabel::High,
            1 => ConfidenceLabel::Medium,
            _ => ConfidenceLabel::Low,
        };
        prop_assert_eq!(outcome.confidence, expected);

        // The advisory note appears exactly when the distribution check ran.
        let positive = totals.iter().filter(|t| **t > 0.0).count();
        let expected_notes = usize::from(positive >= 3);
        prop_assert_eq!(outcome.notes.len(), expected_notes);
    }
}

proptest! {
    #[test]
    fn review_is_deterministic(
        totals in prop::collection::vec(0.0f64..20_000_000.0, 0..8),
        scaled_total in 100_000.0f64..100_000_000.0,
        complexity in 0.5f64..1.6,
    ) {
        let engine = ReviewEngine::new(ReviewConfig::default());
        let comparables = ComparableSet {
            comparables: totals.iter().map(|t| comparable_with_total(*t)).collect(),
            type_fallback: false,
        };
        let factors = ScalingFactors {
            capacity_scale_factor: 1.0,
            regional_index_factor: 1.0,
            inflation_factor: Some(1.0),
            complexity_modifier: complexity,
        };

        let first = engine.review(&comparables, &scaled_with_total(scaled_total), &factors);
        let second = engine.review(&comparables, &scaled_with_total(scaled_total), &factors);
        prop_assert_eq!(first, second);
    }
}
