//! Row-level measurements consumed by the classifier and by callers that
//! want to inspect a run numerically.

use crate::error::{AutomatonError, AutomatonResult};
use crate::grid::Grid;

/// Live-cell fraction of each generation, in history order.
pub fn density_series(history: &[Grid]) -> Vec<f64> {
    history.iter().map(Grid::density).collect()
}

/// Fraction of cells that changed between consecutive generations.
///
/// Returns one entry per step, so the result is one shorter than the
/// history. Empty for histories with fewer than two generations.
pub fn activity_series(history: &[Grid]) -> Vec<f64> {
    history
        .windows(2)
        .map(|pair| {
            let changed = pair[0]
                .cells()
                .iter()
                .zip(pair[1].cells())
                .filter(|(a, b)| a != b)
                .count();
            changed as f64 / pair[0].width() as f64
        })
        .collect()
}

/// Number of positions at which two rows differ.
pub fn hamming_distance(a: &Grid, b: &Grid) -> AutomatonResult<usize> {
    if a.width() != b.width() {
        return Err(AutomatonError::LengthMismatch {
            left: a.width(),
            right: b.width(),
        });
    }
    Ok(a.cells()
        .iter()
        .zip(b.cells())
        .filter(|(x, y)| x != y)
        .count())
}

/// Shannon entropy of a row's cell distribution, in bits (0.0 for a
/// uniform row, 1.0 for an even live/dead split).
pub fn shannon_entropy(grid: &Grid) -> f64 {
    let p = grid.density();
    let mut entropy = 0.0;
    for q in [p, 1.0 - p] {
        if q > 0.0 {
            entropy -= q * q.log2();
        }
    }
    entropy
}

/// True if the row reads the same left-to-right and right-to-left.
pub fn is_reflection_symmetric(grid: &Grid) -> bool {
    let cells = grid.cells();
    cells.iter().eq(cells.iter().rev())
}

/// Population variance of a sample. 0.0 for empty or single-entry input.
pub(crate) fn variance(samples: &[f64]) -> f64 {
    if samples.len() < 2 {
        return 0.0;
    }
    let mean = samples.iter().sum::<f64>() / samples.len() as f64;
    samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / samples.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(bits: &[u8]) -> Grid {
        Grid::new(bits.len(), bits.iter().map(|&b| b == 1).collect()).unwrap()
    }

    #[test]
    fn test_density_series() {
        let history = vec![row(&[1, 1, 0, 0]), row(&[1, 0, 0, 0])];
        assert_eq!(density_series(&history), vec![0.5, 0.25]);
    }

    #[test]
    fn test_activity_series() {
        let history = vec![row(&[1, 1, 0, 0]), row(&[1, 0, 1, 0]), row(&[1, 0, 1, 0])];
        assert_eq!(activity_series(&history), vec![0.5, 0.0]);
    }

    #[test]
    fn test_hamming_distance() {
        assert_eq!(hamming_distance(&row(&[1, 0, 1]), &row(&[0, 0, 1])).unwrap(), 1);
        assert!(matches!(
            hamming_distance(&row(&[1, 0]), &row(&[1, 0, 1])),
            Err(AutomatonError::LengthMismatch { left: 2, right: 3 })
        ));
    }

    #[test]
    fn test_shannon_entropy() {
        assert_eq!(shannon_entropy(&row(&[0, 0, 0, 0])), 0.0);
        assert_eq!(shannon_entropy(&row(&[1, 1, 0, 0])), 1.0);
        let skewed = shannon_entropy(&row(&[1, 0, 0, 0]));
        assert!(skewed > 0.0 && skewed < 1.0);
    }

    #[test]
    fn test_reflection_symmetry() {
        assert!(is_reflection_symmetric(&row(&[1, 0, 1])));
        assert!(is_reflection_symmetric(&row(&[0, 1, 1, 0])));
        assert!(!is_reflection_symmetric(&row(&[1, 1, 0])));
    }

    #[test]
    fn test_variance() {
        assert_eq!(variance(&[]), 0.0);
        assert_eq!(variance(&[0.5]), 0.0);
        assert_eq!(variance(&[0.5, 0.5, 0.5]), 0.0);
        assert!(variance(&[0.0, 1.0]) > 0.2);
    }
}
