//! # capex-retrieval
//!
//! Finds the historical projects most similar to a request.
//!
//! ## Pipeline
//! 1. **Filter** — same project type first (exact match); whole corpus as a
//!    documented fallback when no row matches
//! 2. **Vectorize** — capacity, region index, execution year
//! 3. **Normalize** — min-max transform fitted over the *entire* corpus
//! 4. **Select** — K nearest by Euclidean distance, nearest first, ties in
//!    corpus order

pub mod engine;
pub mod features;
pub mod normalize;

pub use engine::RetrievalEngine;
pub use features::FeatureVector;
pub use normalize::MinMaxNormalizer;
