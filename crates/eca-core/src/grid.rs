//! One-dimensional cell rows and boundary policies.
//!
//! A `Grid` is a fixed-width ordered row of binary cells. Cells are `bool`,
//! so the {0,1} value domain is enforced by the type rather than checked at
//! runtime. The width is fixed at construction and preserved across every
//! transition.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AutomatonError, AutomatonResult};

/// How a cell's missing off-grid neighbors are resolved at the row edges.
///
/// Fixed per simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryPolicy {
    /// Wrap around: the row is a ring.
    #[default]
    Periodic,
    /// Off-grid neighbors hold a constant value.
    Fixed { value: bool },
    /// Off-grid neighbors mirror the edge cell itself.
    Reflective,
}

impl BoundaryPolicy {
    /// Fixed boundary with the conventional dead (`false`) constant.
    pub fn fixed() -> Self {
        Self::Fixed { value: false }
    }
}

impl fmt::Display for BoundaryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Periodic => write!(f, "periodic"),
            Self::Fixed { value: false } => write!(f, "fixed"),
            Self::Fixed { value: true } => write!(f, "fixed-one"),
            Self::Reflective => write!(f, "reflective"),
        }
    }
}

impl FromStr for BoundaryPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            // "circular" is the spelling older tooling used for periodic.
            "periodic" | "circular" => Ok(Self::Periodic),
            "fixed" | "fixed-zero" => Ok(Self::Fixed { value: false }),
            "fixed-one" => Ok(Self::Fixed { value: true }),
            "reflective" | "mirror" => Ok(Self::Reflective),
            other => Err(format!(
                "unknown boundary policy '{other}' (expected periodic, fixed, fixed-one, or reflective)"
            )),
        }
    }
}

/// A fixed-width row of binary cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: Vec<bool>,
}

impl Grid {
    /// Create a grid from an explicit cell row.
    ///
    /// Fails with `InvalidWidth` if `width` is zero or `cells` does not
    /// have exactly `width` entries.
    pub fn new(width: usize, cells: Vec<bool>) -> AutomatonResult<Self> {
        if width == 0 || cells.len() != width {
            return Err(AutomatonError::InvalidWidth {
                expected: width,
                actual: cells.len(),
            });
        }
        Ok(Self { cells })
    }

    /// A grid of `width` dead cells with a single live cell in the center.
    pub fn single_center(width: usize) -> AutomatonResult<Self> {
        let mut cells = vec![false; width];
        if let Some(center) = cells.get_mut(width / 2) {
            *center = true;
        }
        Self::new(width, cells)
    }

    /// Build a row whose width is already guaranteed by construction
    /// (transition results are always as wide as their source row).
    pub(crate) fn from_transition(cells: Vec<bool>) -> Self {
        Self { cells }
    }

    /// Number of cells in the row.
    pub fn width(&self) -> usize {
        self.cells.len()
    }

    /// Read-only view of the cells.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// The cell at `index`. Panics if out of range, like slice indexing.
    pub fn get(&self, index: usize) -> bool {
        self.cells[index]
    }

    /// Number of live cells.
    pub fn ones(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Fraction of live cells, in `0.0..=1.0`.
    pub fn density(&self) -> f64 {
        self.ones() as f64 / self.width() as f64
    }

    /// True if every cell holds the same value.
    pub fn is_uniform(&self) -> bool {
        self.cells.iter().all(|&c| c == self.cells[0])
    }

    /// The `(left, center, right)` neighborhood of the cell at `index`,
    /// with off-grid neighbors resolved by `policy`.
    ///
    /// Under the periodic policy a width-1 row self-wraps: the single cell
    /// is its own left and right neighbor. That is intentional, not an
    /// error.
    pub fn neighbors(&self, index: usize, policy: BoundaryPolicy) -> (bool, bool, bool) {
        let width = self.width();
        let center = self.cells[index];
        let (left, right) = match policy {
            BoundaryPolicy::Periodic => (
                self.cells[(index + width - 1) % width],
                self.cells[(index + 1) % width],
            ),
            BoundaryPolicy::Fixed { value } => (
                if index > 0 { self.cells[index - 1] } else { value },
                if index + 1 < width {
                    self.cells[index + 1]
                } else {
                    value
                },
            ),
            BoundaryPolicy::Reflective => (
                if index > 0 { self.cells[index - 1] } else { center },
                if index + 1 < width {
                    self.cells[index + 1]
                } else {
                    center
                },
            ),
        };
        (left, center, right)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &cell in &self.cells {
            write!(f, "{}", if cell { '█' } else { '░' })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(bits: &[u8]) -> Grid {
        Grid::new(bits.len(), bits.iter().map(|&b| b == 1).collect()).unwrap()
    }

    #[test]
    fn test_width_validation() {
        assert!(matches!(
            Grid::new(0, vec![]),
            Err(AutomatonError::InvalidWidth { expected: 0, actual: 0 })
        ));
        assert!(matches!(
            Grid::new(3, vec![true]),
            Err(AutomatonError::InvalidWidth { expected: 3, actual: 1 })
        ));
    }

    #[test]
    fn test_single_center() {
        let grid = Grid::single_center(11).unwrap();
        assert_eq!(grid.ones(), 1);
        assert!(grid.get(5));
    }

    #[test]
    fn test_periodic_neighbors_wrap() {
        let grid = row(&[1, 0, 1, 0, 1]);
        // First cell sees the last as its left neighbor.
        assert_eq!(grid.neighbors(0, BoundaryPolicy::Periodic), (true, true, false));
        assert_eq!(grid.neighbors(4, BoundaryPolicy::Periodic), (false, true, true));
    }

    #[test]
    fn test_fixed_neighbors() {
        let grid = row(&[1, 0, 1, 0, 1]);
        assert_eq!(grid.neighbors(0, BoundaryPolicy::fixed()), (false, true, false));
        assert_eq!(
            grid.neighbors(4, BoundaryPolicy::Fixed { value: true }),
            (false, true, true)
        );
    }

    #[test]
    fn test_reflective_neighbors_mirror_edge() {
        let grid = row(&[1, 0, 0, 0, 0]);
        assert_eq!(grid.neighbors(0, BoundaryPolicy::Reflective), (true, true, false));
        assert_eq!(grid.neighbors(4, BoundaryPolicy::Reflective), (false, false, false));
    }

    #[test]
    fn test_width_one_periodic_self_wraps() {
        let grid = row(&[1]);
        assert_eq!(grid.neighbors(0, BoundaryPolicy::Periodic), (true, true, true));
    }

    #[test]
    fn test_uniformity_and_density() {
        assert!(row(&[1, 1, 1]).is_uniform());
        assert!(row(&[0, 0]).is_uniform());
        let mixed = row(&[1, 0, 1, 1]);
        assert!(!mixed.is_uniform());
        assert_eq!(mixed.density(), 0.75);
    }

    #[test]
    fn test_boundary_policy_parsing() {
        assert_eq!("periodic".parse::<BoundaryPolicy>().unwrap(), BoundaryPolicy::Periodic);
        assert_eq!("circular".parse::<BoundaryPolicy>().unwrap(), BoundaryPolicy::Periodic);
        assert_eq!("fixed".parse::<BoundaryPolicy>().unwrap(), BoundaryPolicy::fixed());
        assert_eq!(
            "Reflective".parse::<BoundaryPolicy>().unwrap(),
            BoundaryPolicy::Reflective
        );
        assert!("toroidal".parse::<BoundaryPolicy>().is_err());
    }
}
