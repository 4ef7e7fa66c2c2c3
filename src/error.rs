// Error types for the benchmark harness

use thiserror::Error;

/// Result type alias for harness operations
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors that can abort a benchmark run
#[derive(Debug, Error)]
pub enum BenchError {
    /// Rejected input, raised before any worker is scheduled
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The size/variant partition or the aggregator contract was broken
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    /// The result table is missing cells after the run finished
    #[error("Incomplete run: expected {expected} cells, got {actual}")]
    IncompleteRun { expected: usize, actual: usize },

    /// A worker thread panicked while measuring a cell
    #[error("Worker panicked: {0}")]
    WorkerPanicked(String),

    /// A post-run verifier rejected the result table
    #[error("Verification failed: {0}")]
    Verification(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
