//! # capex-corpus
//!
//! Loads the historical-project corpus from JSON rows and validates each row
//! before anything downstream sees it.
//!
//! Row policy: rows missing project_type, region, capacity, or
//! execution_year — or carrying non-numeric values where numbers are
//! required — are dropped and logged, never fatal for the whole load.
//! A corpus with zero surviving rows is fatal (`EmptyCorpus`).

pub mod corpus;
pub mod loader;

pub use corpus::ProjectCorpus;
pub use loader::{load_corpus, parse_rows};
