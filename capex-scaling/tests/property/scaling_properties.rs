use capex_core::config::InflationConfig;
use capex_core::models::{HistoricalProject, ScalingFactors, SoftCosts};
use capex_core::money::round_factor;
use capex_scaling::ScalingEngine;
use proptest::prelude::*;

fn arb_base() -> impl Strategy<Value = HistoricalProject> {
    (
        0.0f64..10_000_000.0,
        0.0f64..10_000_000.0,
        0.0f64..10_000_000.0,
        0.0f64..10_000_000.0,
        2000i32..2026,
    )
        .prop_map(|(civil, mechanical, electrical, automation, year)| HistoricalProject {
            project_id: "P-PROP".to_string(),
            project_name: "prop base".to_string(),
            project_type: "Filling Line".to_string(),
            region: "Europe".to_string(),
            site: "Plant Prop".to_string(),
            capacity: 400.0,
            total_cost_usd: civil + mechanical + electrical + automation,
            civil_cost: civil,
            mechanical_cost: mechanical,
            electrical_cost: electrical,
            automation_cost: automation,
            contingency_pct: 8.0,
            execution_year: year,
        })
}

fn arb_factors() -> impl Strategy<Value = ScalingFactors> {
    (
        0.5f64..2.0,
        0.5f64..2.0,
        prop::option::of(0.5f64..2.0),
        0.5f64..2.0,
    )
        .prop_map(|(capacity, regional, inflation, complexity)| ScalingFactors {
            capacity_scale_factor: capacity,
            regional_index_factor: regional,
            inflation_factor: inflation,
            complexity_modifier: complexity,
        })
}

fn arb_soft() -> impl Strategy<Value = SoftCosts> {
    (0.0f64..0.3, 0.0f64..0.3).prop_map(|(engineering_pct, contingency_pct)| SoftCosts {
        engineering_pct,
        contingency_pct,
    })
}

// ── Total equals subtotal + engineering + contingency ───────────────────

proptest! {
    #[test]
    fn total_is_sum_of_parts(
        base in arb_base(),
        factors in arb_factors(),
        soft in arb_soft(),
    ) {
        let engine = ScalingEngine::new(InflationConfig::default());
        let result = engine.apply(&base, &factors, &soft);

        let parts = result.scaled_wbs.subtotal()
            + result.engineering_cost
            + result.contingency_cost;
        prop_assert!((result.total_estimated_cost - parts).abs() < 0.006);
    }
}

// ── Applied factor is the 4-decimal product of the resolved factors ─────

proptest! {
    #[test]
    fn applied_factor_is_rounded_product(
        base in arb_base(),
        factors in arb_factors(),
        soft in arb_soft(),
    ) {
        let engine = ScalingEngine::new(InflationConfig::default());
        let resolved = engine.resolve(&base, &factors);
        let result = engine.apply(&base, &factors, &soft);

        prop_assert_eq!(result.applied_factor, round_factor(resolved.combined()));
    }
}

// ── Scaling is deterministic ────────────────────────────────────────────

proptest! {
    #[test]
    fn scaling_is_deterministic(
        base in arb_base(),
        factors in arb_factors(),
        soft in arb_soft(),
    ) {
        let engine = ScalingEngine::new(InflationConfig::default());
        let first = engine.apply(&base, &factors, &soft);
        let second = engine.apply(&base, &factors, &soft);
        prop_assert_eq!(first, second);
    }
}

// ── Every monetary output is rounded to cents ───────────────────────────

proptest! {
    #[test]
    fn outputs_are_cent_aligned(
        base in arb_base(),
        factors in arb_factors(),
        soft in arb_soft(),
    ) {
        let engine = ScalingEngine::new(InflationConfig::default());
        let result = engine.apply(&base, &factors, &soft);

        for amount in [
            result.scaled_wbs.civil_cost,
            result.scaled_wbs.mechanical_cost,
            result.scaled_wbs.electrical_cost,
            result.scaled_wbs.automation_cost,
            result.engineering_cost,
            result.contingency_cost,
            result.total_estimated_cost,
        ] {
            let cents = amount * 100.0;
            prop_assert!((cents - cents.round()).abs() < 1e-4);
        }
    }
}
