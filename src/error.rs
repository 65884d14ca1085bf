//! Error types for comparisons.

use thiserror::Error;

/// Result type alias for comparison operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building ranges or comparing sequences.
#[derive(Debug, Error)]
pub enum Error {
    /// A range was constructed with its begin past its end.
    #[error("end must be equal or greater than begin (begin={begin}, end={end})")]
    InvalidRange {
        /// Inclusive start that was requested.
        begin: usize,
        /// Exclusive end that was requested.
        end: usize,
    },

    /// A locator returned a run whose two sides differ in length.
    ///
    /// This is never retryable: the active locator is broken.
    #[error("largest run sides differ in length (left={left}, right={right})")]
    RunLengthMismatch {
        /// Length of the run in the left sequence.
        left: usize,
        /// Length of the run in the right sequence.
        right: usize,
    },

    /// The minimum expected similarity is not a number in `[0, 1]`.
    #[error("minimum expectation must lie in [0, 1], got {0}")]
    InvalidExpectation(f64),

    /// Underlying I/O failure, raised by transcript writers and the CLI.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
