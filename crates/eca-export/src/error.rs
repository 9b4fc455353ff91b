//! Error types for the export layer.

use eca_core::AutomatonError;
use thiserror::Error;

/// Result type alias for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Errors that can occur while exporting or re-importing a history.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Underlying file or stream error.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// A serialized row held something other than `0`/`1`.
    #[error("malformed row at line {line}: unexpected character {found:?}")]
    MalformedRow { line: usize, found: char },

    /// A serialized row disagreed with the established width.
    #[error("row length mismatch at line {line}: expected {expected} cells, got {actual}")]
    RowLengthMismatch {
        line: usize,
        expected: usize,
        actual: usize,
    },

    /// There is nothing to serialize.
    #[error("nothing to export: history is empty")]
    EmptyHistory,

    /// Validation failure from the core while rebuilding grids.
    #[error("engine error: {0}")]
    Engine(#[from] AutomatonError),
}
