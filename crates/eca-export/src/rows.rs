//! The plain binary-row format.
//!
//! A history serializes as one line per generation, each line exactly
//! `width` characters of `0`/`1`. The format carries no metadata, is
//! trivially diffable, and round-trips exactly: reading back yields the
//! same grids that were written.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use eca_core::Grid;
use tracing::debug;

use crate::error::{ExportError, ExportResult};

/// Encode one generation as a `0`/`1` string.
pub fn encode_row(grid: &Grid) -> String {
    grid.cells().iter().map(|&c| if c { '1' } else { '0' }).collect()
}

/// Decode one `0`/`1` line back into a grid.
///
/// `line_number` is only used for error reporting.
pub fn decode_row(line: &str, line_number: usize) -> ExportResult<Grid> {
    let mut cells = Vec::with_capacity(line.len());
    for ch in line.chars() {
        match ch {
            '0' => cells.push(false),
            '1' => cells.push(true),
            found => {
                return Err(ExportError::MalformedRow {
                    line: line_number,
                    found,
                })
            }
        }
    }
    Ok(Grid::new(cells.len(), cells)?)
}

/// Write a history as binary-row lines.
pub fn write_rows<W: Write>(writer: &mut W, history: &[Grid]) -> ExportResult<()> {
    if history.is_empty() {
        return Err(ExportError::EmptyHistory);
    }
    for grid in history {
        writeln!(writer, "{}", encode_row(grid))?;
    }
    Ok(())
}

/// Read a history back from binary-row lines.
///
/// Every row must match the width of the first; blank trailing lines are
/// ignored.
pub fn read_rows<R: BufRead>(reader: R) -> ExportResult<Vec<Grid>> {
    let mut history = Vec::new();
    let mut width = None;

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }

        let grid = decode_row(line, i + 1)?;
        if let Some(expected) = width {
            if grid.width() != expected {
                return Err(ExportError::RowLengthMismatch {
                    line: i + 1,
                    expected,
                    actual: grid.width(),
                });
            }
        } else {
            width = Some(grid.width());
        }
        history.push(grid);
    }

    if history.is_empty() {
        return Err(ExportError::EmptyHistory);
    }
    Ok(history)
}

/// Write a history to a file in the binary-row format.
pub fn save_rows(path: &Path, history: &[Grid]) -> ExportResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_rows(&mut writer, history)?;
    writer.flush()?;
    debug!(path = %path.display(), generations = history.len(), "rows_saved");
    Ok(())
}

/// Load a history from a binary-row file.
pub fn load_rows(path: &Path) -> ExportResult<Vec<Grid>> {
    let file = File::open(path)?;
    let history = read_rows(BufReader::new(file))?;
    debug!(path = %path.display(), generations = history.len(), "rows_loaded");
    Ok(history)
}
