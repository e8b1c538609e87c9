/// Comparable-retrieval errors.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("cannot retrieve comparables from an empty corpus")]
    EmptyCorpus,
}
