//! # capex-scaling
//!
//! Turns a base comparable's WBS costs and a set of multiplicative adjustment
//! factors into a scaled estimate with soft costs. Pure arithmetic, no I/O:
//! identical inputs always produce identical output.
//!
//! The combined factor (capacity x region x inflation x complexity) applies
//! uniformly to all four WBS components; there is no per-category
//! differentiation.

pub mod engine;
pub mod inflation;

pub use engine::{ResolvedFactors, ScalingEngine};
pub use inflation::derive_inflation_factor;
