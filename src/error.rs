use thiserror::Error;

/// Errors returned by the library.
///
/// The search and k-mer routines never fail: degenerate inputs give empty
/// results. Only loading and parsing of user-supplied names can fail.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// I/O error while reading input.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("file does not exist: {0}")]
    FileNotFound(String),
    #[error("no FASTA header line found in '{0}'")]
    MissingHeader(String),
    #[error("no sequence data found in '{0}'")]
    EmptySequence(String),
    #[error("unknown search algorithm '{0}' (expected kmp, bm, rk or naive)")]
    UnknownAlgorithm(String),
    #[error("unknown ranking strategy '{0}' (expected sort or heap)")]
    UnknownStrategy(String),
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;
