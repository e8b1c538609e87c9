/// Corpus loading errors.
///
/// Row-level problems (missing or non-numeric required fields) are not errors
/// at this level: the offending row is dropped and logged. These variants are
/// the corpus-fatal cases.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("failed to read corpus file {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("failed to parse corpus file {path}: {reason}")]
    Parse { path: String, reason: String },

    #[error("corpus has no usable rows after validation")]
    EmptyCorpus,
}
