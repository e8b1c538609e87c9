//! # capex-review
//!
//! Sanity-checks a scaled estimate against configured bounds and the
//! historical cost distribution of its comparables.
//!
//! ## Checks (fixed order)
//! 1. **Range** — complexity modifier inside the configured band
//! 2. **Distribution** — scaled total vs the median of positive historical
//!    totals, gated on a minimum sample size
//!
//! Confidence is a pure function of the flag count: 0 → High, 1 → Medium,
//! 2+ → Low.

pub mod engine;
pub mod stats;

pub use engine::ReviewEngine;
