use thiserror::Error;

/// Failure modes of a scan run.
///
/// All variants are terminal at this layer: no retries, and a multi-target
/// scan reports the first failing target's error with no partial results.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The scanner subprocess could not be started or exited non-zero. The
    /// message is the subprocess's own stderr text, which is more diagnostic
    /// than a generic failure wrapper.
    #[error("{0}")]
    Execution(String),

    /// The results file could not be read back after a successful exit.
    #[error("failed to read scanner results: {0}")]
    Io(#[from] std::io::Error),

    /// The results file did not contain a JSON object.
    #[error("scanner results were not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
