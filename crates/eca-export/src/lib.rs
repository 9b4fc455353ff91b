//! Export collaborator for the elementary cellular automaton engine.
//!
//! The core engine owns a history of fixed-width binary rows; this crate
//! turns that history into durable artifacts and back:
//!
//! - **rows**: the plain binary-row format (one `0`/`1` line per
//!   generation), the canonical round-trippable representation
//! - **document**: a self-describing JSON record of a run (parameters,
//!   summary statistics, rows)
//! - **csv**: spreadsheet-friendly export with one column per cell
//! - **render**: plain-text block art for terminals
//!
//! Plotting, color schemes, and image/GIF formats are deliberately out of
//! scope here.

mod csv;
mod document;
mod error;
mod render;
mod rows;

pub use csv::{read_csv, write_csv};
pub use document::EvolutionDocument;
pub use error::{ExportError, ExportResult};
pub use render::{render_history, render_rule};
pub use rows::{decode_row, encode_row, load_rows, read_rows, save_rows, write_rows};
