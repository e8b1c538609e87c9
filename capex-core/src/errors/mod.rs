//! Error types for the capex workspace.
//!
//! One enum per subsystem, aggregated into [`CapexError`]. Fatal errors carry
//! enough context (stage, field, path) to render a user-facing message.

mod config_error;
mod corpus_error;
mod oracle_error;
mod retrieval_error;

pub use config_error::ConfigError;
pub use corpus_error::CorpusError;
pub use oracle_error::OracleError;
pub use retrieval_error::RetrievalError;

/// Top-level error for anything an estimation run can surface.
#[derive(Debug, thiserror::Error)]
pub enum CapexError {
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    #[error("corpus: {0}")]
    Corpus(#[from] CorpusError),

    #[error("retrieval: {0}")]
    Retrieval(#[from] RetrievalError),

    #[error("oracle: {0}")]
    Oracle(#[from] OracleError),
}

/// Convenience result alias used across the workspace.
pub type CapexResult<T> = Result<T, CapexError>;
