//! The JSON evolution document.
//!
//! Bundles a run's parameters, summary statistics, and full row history
//! into a single self-describing JSON file.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use eca_core::{BoundaryPolicy, EvolutionEngine, EvolutionSummary, Grid};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ExportError, ExportResult};
use crate::rows::{decode_row, encode_row};

/// A complete, self-describing record of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionDocument {
    /// Rule number that drove the run.
    pub rule: u8,

    /// Row width.
    pub width: usize,

    /// Boundary policy in effect.
    pub boundary: BoundaryPolicy,

    /// Generations recorded, including generation 0.
    pub generations: usize,

    /// Summary statistics at export time.
    pub summary: EvolutionSummary,

    /// The full history as `0`/`1` row strings, generation 0 first.
    pub rows: Vec<String>,
}

impl EvolutionDocument {
    /// Capture an engine's accumulated run.
    pub fn from_engine(engine: &EvolutionEngine) -> Self {
        Self {
            rule: engine.rule().number(),
            width: engine.width(),
            boundary: engine.boundary(),
            generations: engine.history().len(),
            summary: engine.summary(),
            rows: engine.history().iter().map(encode_row).collect(),
        }
    }

    /// Rebuild the grid history recorded in this document.
    pub fn to_history(&self) -> ExportResult<Vec<Grid>> {
        let mut history = Vec::with_capacity(self.rows.len());
        for (i, row) in self.rows.iter().enumerate() {
            let grid = decode_row(row, i + 1)?;
            if grid.width() != self.width {
                return Err(ExportError::RowLengthMismatch {
                    line: i + 1,
                    expected: self.width,
                    actual: grid.width(),
                });
            }
            history.push(grid);
        }
        if history.is_empty() {
            return Err(ExportError::EmptyHistory);
        }
        Ok(history)
    }

    /// Write the document as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> ExportResult<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        info!(
            path = %path.display(),
            rule = self.rule,
            generations = self.generations,
            "document_saved"
        );
        Ok(())
    }

    /// Load a document previously written by [`EvolutionDocument::save`].
    pub fn load(path: &Path) -> ExportResult<Self> {
        let file = File::open(path)?;
        let doc: Self = serde_json::from_reader(BufReader::new(file))?;
        info!(path = %path.display(), rule = doc.rule, "document_loaded");
        Ok(doc)
    }
}
