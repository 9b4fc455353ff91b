//! CSV export of a history.
//!
//! One record per generation with a leading generation index:
//!
//! ```text
//! generation,cell_0,cell_1,...,cell_{w-1}
//! 0,0,0,1,0,0
//! 1,0,1,1,1,0
//! ```

use std::io::{BufRead, Write};

use eca_core::Grid;

use crate::error::{ExportError, ExportResult};

/// Write a history as CSV with a header row.
pub fn write_csv<W: Write>(writer: &mut W, history: &[Grid]) -> ExportResult<()> {
    let width = match history.first() {
        Some(first) => first.width(),
        None => return Err(ExportError::EmptyHistory),
    };

    write!(writer, "generation")?;
    for i in 0..width {
        write!(writer, ",cell_{i}")?;
    }
    writeln!(writer)?;

    for (t, grid) in history.iter().enumerate() {
        write!(writer, "{t}")?;
        for &cell in grid.cells() {
            write!(writer, ",{}", cell as u8)?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Read a history back from CSV written by [`write_csv`].
///
/// The header and the generation-index column are skipped; only the cell
/// columns are rebuilt.
pub fn read_csv<R: BufRead>(reader: R) -> ExportResult<Vec<Grid>> {
    let mut history: Vec<Grid> = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end();
        if i == 0 || line.is_empty() {
            continue;
        }

        let mut cells = Vec::new();
        for field in line.split(',').skip(1) {
            match field {
                "0" => cells.push(false),
                "1" => cells.push(true),
                other => {
                    return Err(ExportError::MalformedRow {
                        line: i + 1,
                        found: other.chars().next().unwrap_or(' '),
                    })
                }
            }
        }

        if let Some(first) = history.first() {
            if cells.len() != first.width() {
                return Err(ExportError::RowLengthMismatch {
                    line: i + 1,
                    expected: first.width(),
                    actual: cells.len(),
                });
            }
        }
        let width = cells.len();
        history.push(Grid::new(width, cells)?);
    }

    if history.is_empty() {
        return Err(ExportError::EmptyHistory);
    }
    Ok(history)
}
