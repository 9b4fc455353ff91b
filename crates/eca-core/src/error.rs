//! Error types for the automaton engine.

use thiserror::Error;

/// Result type alias for engine operations.
pub type AutomatonResult<T> = Result<T, AutomatonError>;

/// Errors that can occur during engine operations.
///
/// All variants are deterministic validation failures raised at the boundary
/// of a public operation, before any state has been mutated.
#[derive(Debug, Error)]
pub enum AutomatonError {
    /// Rule number outside the Wolfram range.
    #[error("rule number out of range: {number} (must be in 0..=255)")]
    InvalidRule { number: i32 },

    /// Grid width is zero or the initial row has the wrong length.
    #[error("invalid width: expected a row of {expected} cells, got {actual}")]
    InvalidWidth { expected: usize, actual: usize },

    /// Negative generation count requested.
    #[error("invalid generation count: {requested} (must be >= 0)")]
    InvalidGenerationCount { requested: i64 },

    /// Classification requested on a history too short to show any trend.
    #[error("insufficient history: {actual} generations (need at least {required})")]
    InsufficientHistory { required: usize, actual: usize },

    /// Two rows that must share a width do not.
    #[error("row length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
}
