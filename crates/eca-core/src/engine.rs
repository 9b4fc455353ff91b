//! The evolution engine that drives generation-by-generation simulation.
//!
//! `EvolutionEngine` is the main entry point: it owns the rule table, the
//! current generation, and the accumulated history, and advances the row
//! one synchronous step at a time.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::classify::{classify, Classification, ClassifierConfig};
use crate::error::{AutomatonError, AutomatonResult};
use crate::grid::{BoundaryPolicy, Grid};
use crate::period::{detect_period, PeriodResult};
use crate::rule::RuleTable;

/// Summary statistics over a completed (or in-progress) run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionSummary {
    /// Rule number driving the run.
    pub rule: u8,
    /// Row width.
    pub width: usize,
    /// Generations in history, including generation 0.
    pub generations: usize,
    /// Boundary policy in effect.
    pub boundary: BoundaryPolicy,
    /// Live-cell fraction of generation 0.
    pub initial_density: f64,
    /// Live-cell fraction of the latest generation.
    pub final_density: f64,
    /// Mean live-cell fraction across all generations.
    pub mean_density: f64,
    /// Lowest per-generation density seen.
    pub min_density: f64,
    /// Highest per-generation density seen.
    pub max_density: f64,
    /// Exact-repeat cycle over the full history, if one exists.
    pub period: Option<PeriodResult>,
}

/// Simulates one elementary cellular automaton instance.
///
/// The engine exclusively owns its rule, current generation, and history.
/// History starts at generation 0 (the initial row), grows by exactly one
/// entry per `step`, and is never truncated during a run. For a fixed rule,
/// initial row, boundary policy, and generation count, evolution is
/// bit-for-bit reproducible.
///
/// Instances are independent: nothing is shared, so callers that want to
/// sweep many rules concurrently can run one engine per rule with no
/// locking (`RuleTable` is `Copy` and safe to share read-only).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionEngine {
    rule: RuleTable,
    boundary: BoundaryPolicy,
    current: Grid,
    history: Vec<Grid>,
}

impl EvolutionEngine {
    /// Create an engine at generation 0.
    pub fn new(rule: RuleTable, initial: Grid, boundary: BoundaryPolicy) -> Self {
        let history = vec![initial.clone()];
        Self {
            rule,
            boundary,
            current: initial,
            history,
        }
    }

    /// The rule table driving this engine.
    pub fn rule(&self) -> RuleTable {
        self.rule
    }

    /// The boundary policy in effect.
    pub fn boundary(&self) -> BoundaryPolicy {
        self.boundary
    }

    /// Row width. Invariant across all generations.
    pub fn width(&self) -> usize {
        self.current.width()
    }

    /// The latest generation.
    pub fn current(&self) -> &Grid {
        &self.current
    }

    /// Index of the latest generation (0 right after construction).
    pub fn generation(&self) -> usize {
        self.history.len() - 1
    }

    /// The full accumulated history, generation 0 first. Read-only.
    pub fn history(&self) -> &[Grid] {
        &self.history
    }

    /// Advance one generation and return it.
    ///
    /// The next row is computed entirely from the current one (every
    /// cell's neighborhood is read before any cell is written), then
    /// appended to history.
    pub fn step(&mut self) -> &Grid {
        let next: Vec<bool> = (0..self.current.width())
            .map(|i| {
                let (l, c, r) = self.current.neighbors(i, self.boundary);
                self.rule.apply(l, c, r)
            })
            .collect();

        let next = Grid::from_transition(next);

        debug!(
            generation = self.history.len(),
            density = next.density(),
            "engine_step"
        );

        self.history.push(next.clone());
        self.current = next;
        &self.current
    }

    /// Advance `generations` steps, returning the new generations in order.
    ///
    /// Fails with `InvalidGenerationCount` if `generations` is negative;
    /// zero is a no-op returning an empty slice.
    pub fn evolve(&mut self, generations: i64) -> AutomatonResult<&[Grid]> {
        if generations < 0 {
            return Err(AutomatonError::InvalidGenerationCount {
                requested: generations,
            });
        }

        info!(
            rule = self.rule.number(),
            generations,
            width = self.width(),
            "evolution_run_start"
        );

        let start = self.history.len();
        for _ in 0..generations {
            self.step();
        }

        Ok(&self.history[start..])
    }

    /// Reset to generation 0, clearing history.
    ///
    /// With `None` the engine restarts from its original generation 0;
    /// with a new row, the row must match the engine width.
    pub fn reset(&mut self, initial: Option<Grid>) -> AutomatonResult<()> {
        let initial = match initial {
            Some(grid) => {
                if grid.width() != self.width() {
                    return Err(AutomatonError::InvalidWidth {
                        expected: self.width(),
                        actual: grid.width(),
                    });
                }
                grid
            }
            None => self.history[0].clone(),
        };

        self.current = initial.clone();
        self.history = vec![initial];
        Ok(())
    }

    /// Scan the accumulated history for an exact-repeat cycle.
    pub fn detect_period(&self, max_window: usize) -> Option<PeriodResult> {
        detect_period(&self.history, max_window)
    }

    /// Classify the accumulated history into a Wolfram class.
    pub fn classify(&self, config: &ClassifierConfig) -> AutomatonResult<Classification> {
        classify(&self.history, config)
    }

    /// Summary statistics for the run so far.
    pub fn summary(&self) -> EvolutionSummary {
        let densities: Vec<f64> = self.history.iter().map(Grid::density).collect();
        let mean = densities.iter().sum::<f64>() / densities.len() as f64;
        let min = densities.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = densities.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        EvolutionSummary {
            rule: self.rule.number(),
            width: self.width(),
            generations: self.history.len(),
            boundary: self.boundary,
            initial_density: densities[0],
            final_density: densities[densities.len() - 1],
            mean_density: mean,
            min_density: min,
            max_density: max,
            period: self.detect_period(self.history.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(rule: i32, width: usize) -> EvolutionEngine {
        EvolutionEngine::new(
            RuleTable::new(rule).unwrap(),
            Grid::single_center(width).unwrap(),
            BoundaryPolicy::Periodic,
        )
    }

    #[test]
    fn test_rule_0_clears_in_one_step() {
        let mut e = engine(0, 9);
        let next = e.step();
        assert!(next.is_uniform());
        assert_eq!(next.ones(), 0);
        assert_eq!(e.generation(), 1);
        assert_eq!(e.history().len(), 2);
    }

    #[test]
    fn test_rule_255_fills_in_one_step() {
        let mut e = engine(255, 9);
        e.step();
        assert_eq!(e.current().ones(), 9);
    }

    #[test]
    fn test_rule_254_spreads_from_center() {
        // Rule 254 turns on every neighborhood except 000.
        let mut e = engine(254, 7);
        e.step();
        assert_eq!(e.current().cells(), &[false, false, true, true, true, false, false]);
        e.step();
        assert_eq!(e.current().cells(), &[false, true, true, true, true, true, false]);
    }

    #[test]
    fn test_evolve_returns_new_generations_in_order() {
        let mut e = engine(90, 9);
        let new: Vec<Grid> = e.evolve(3).unwrap().to_vec();
        assert_eq!(new.len(), 3);
        assert_eq!(e.history().len(), 4);
        assert_eq!(&new[..], &e.history()[1..]);
    }

    #[test]
    fn test_evolve_zero_is_a_no_op() {
        let mut e = engine(30, 9);
        assert!(e.evolve(0).unwrap().is_empty());
        assert_eq!(e.history().len(), 1);
    }

    #[test]
    fn test_negative_generation_count_rejected() {
        let mut e = engine(30, 9);
        assert!(matches!(
            e.evolve(-1),
            Err(AutomatonError::InvalidGenerationCount { requested: -1 })
        ));
        // Failed validation must not have touched history.
        assert_eq!(e.history().len(), 1);
    }

    #[test]
    fn test_determinism() {
        let mut a = engine(110, 31);
        let mut b = engine(110, 31);
        a.evolve(40).unwrap();
        b.evolve(40).unwrap();
        assert_eq!(a.history(), b.history());
    }

    #[test]
    fn test_width_invariant() {
        let mut e = engine(30, 13);
        e.evolve(25).unwrap();
        assert!(e.history().iter().all(|g| g.width() == 13));
    }

    #[test]
    fn test_reset_restores_generation_zero() {
        let mut e = engine(30, 9);
        e.evolve(10).unwrap();
        e.reset(None).unwrap();
        assert_eq!(e.generation(), 0);
        assert_eq!(e.current(), &Grid::single_center(9).unwrap());
    }

    #[test]
    fn test_reset_rejects_mismatched_width() {
        let mut e = engine(30, 9);
        let narrow = Grid::single_center(5).unwrap();
        assert!(matches!(
            e.reset(Some(narrow)),
            Err(AutomatonError::InvalidWidth { expected: 9, actual: 5 })
        ));
    }

    #[test]
    fn test_summary_densities() {
        let mut e = engine(0, 8);
        e.evolve(2).unwrap();
        let summary = e.summary();
        assert_eq!(summary.rule, 0);
        assert_eq!(summary.generations, 3);
        assert_eq!(summary.initial_density, 1.0 / 8.0);
        assert_eq!(summary.final_density, 0.0);
        assert_eq!(summary.period, Some(crate::period::PeriodResult { transient: 1, period: 1 }));
    }
}
