//! Exact-repeat cycle detection over a generation history.

use serde::{Deserialize, Serialize};

use crate::grid::Grid;

/// A detected cycle: `transient` generations of lead-in, then a repeating
/// block of `period` generations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodResult {
    /// Number of generations before the cycle begins.
    pub transient: usize,
    /// Length of the repeating block, >= 1.
    pub period: usize,
}

/// Scan `history` for an exact-repeat cycle.
///
/// Examines at most the first `min(max_window, history.len())` generations.
/// A candidate `(transient, period)` is accepted when every generation from
/// the transient onward equals the generation one period later, for the
/// whole examined window, and the window holds at least two full periods of
/// evidence. Candidates are tried smallest period first, then smallest
/// transient, so the tightest cycle description wins.
///
/// Equality between generations is exact elementwise equality. Cost is
/// O(window²) in the worst case, acceptable for the caller-bounded windows
/// this is used with (typically a few hundred generations).
pub fn detect_period(history: &[Grid], max_window: usize) -> Option<PeriodResult> {
    let window = history.len().min(max_window);
    if window < 2 {
        return None;
    }

    for period in 1..=window / 2 {
        // Two full periods of evidence: transient + 2*period must fit.
        for transient in 0..=window - 2 * period {
            let repeats = (0..window - transient - period)
                .all(|k| history[transient + k] == history[transient + k + period]);
            if repeats {
                return Some(PeriodResult { transient, period });
            }
        }
    }

    None
}
