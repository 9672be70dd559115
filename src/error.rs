//! Error types for the TSP hill climber.
//!
//! Every failure path in the crate surfaces as a distinct [`TspError`] kind.
//! Errors are terminal for the current call: no retries, no partial results.

use thiserror::Error;

/// Errors raised by matrix loading, tour construction, and the search core.
#[derive(Debug, Error)]
pub enum TspError {
    /// Malformed input: a ragged or non-square matrix, a non-finite distance
    /// entry, or a sequence that is not a permutation of `0..n`.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A tour references a city with no corresponding row/column in the
    /// distance matrix (mismatched matrix size vs. permutation length).
    #[error("city index {city} out of range for a {dimension}x{dimension} distance matrix")]
    IndexOutOfRange { city: usize, dimension: usize },

    /// The best-neighbor selector was handed an empty neighborhood. Only
    /// possible for tours of length <= 1, which the hill-climbing controller
    /// short-circuits; reaching this from `HillClimb` indicates a bug there.
    #[error("cannot select a best neighbor from an empty neighborhood")]
    EmptyNeighborhood,

    /// I/O failure while reading a matrix file or writing a report.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The matrix file is not a valid JSON nested-list literal.
    #[error("matrix parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Failure while writing a trajectory CSV.
    #[error("csv export error: {0}")]
    Csv(#[from] csv::Error),
}
