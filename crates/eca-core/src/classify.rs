//! Wolfram-class classification of long-run behavior.
//!
//! Wolfram's taxonomy sorts elementary rules into four classes:
//!
//! - **Class I**: evolution dies into a homogeneous row
//! - **Class II**: evolution settles into simple periodic structures
//! - **Class III**: chaotic, apparently random behavior
//! - **Class IV**: localized complex structures over a regular background
//!
//! The classifier here is a heuristic over statistical signals (uniformity,
//! detected periods, density variance, step activity), not a proof. The
//! class III/IV boundary in particular is approximate: deciding whether
//! localized structures persist indefinitely is a halting-style question
//! that no finite window can settle, and published classifications of
//! rules such as 110 rest on far longer runs than a simulation here will
//! see. Every decision therefore ships with the raw [`ClassEvidence`] it
//! was based on, so a caller can re-decide with its own thresholds, and
//! [`known_class`] exposes the literature labels for the famous rules.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::{activity_series, density_series, variance};
use crate::engine::EvolutionEngine;
use crate::error::{AutomatonError, AutomatonResult};
use crate::grid::{BoundaryPolicy, Grid};
use crate::period::{detect_period, PeriodResult};
use crate::rule::RuleTable;

/// One of Wolfram's four behavioral classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WolframClass {
    /// Class I: evolves to a homogeneous row.
    Homogeneous,
    /// Class II: evolves to simple stable or periodic structures.
    Periodic,
    /// Class III: chaotic, apparently random behavior.
    Chaotic,
    /// Class IV: localized complex structures, potentially universal.
    Complex,
}

impl WolframClass {
    /// The conventional class number, 1 through 4.
    pub fn number(&self) -> u8 {
        match self {
            Self::Homogeneous => 1,
            Self::Periodic => 2,
            Self::Chaotic => 3,
            Self::Complex => 4,
        }
    }

    /// All classes in conventional order.
    pub fn all() -> [WolframClass; 4] {
        [
            Self::Homogeneous,
            Self::Periodic,
            Self::Chaotic,
            Self::Complex,
        ]
    }
}

impl fmt::Display for WolframClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Homogeneous => write!(f, "Class I (homogeneous)"),
            Self::Periodic => write!(f, "Class II (periodic)"),
            Self::Chaotic => write!(f, "Class III (chaotic)"),
            Self::Complex => write!(f, "Class IV (complex)"),
        }
    }
}

/// Where a classification label came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassSource {
    /// Computed from the simulated history.
    #[default]
    Computed,
    /// Taken from the published literature table.
    Literature,
}

/// Thresholds for the classification heuristic.
///
/// Passed explicitly into [`classify`]; there is no process-wide
/// configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Longest period still considered "simple" (Class II).
    pub period_threshold: usize,
    /// A Class II transient may cover at most this fraction of history.
    pub max_transient_fraction: f64,
    /// Late-history density variance at or below this is "bounded".
    pub variance_ceiling: f64,
    /// Late variance may exceed early variance by at most this factor
    /// before the run reads as diverging.
    pub variance_growth_limit: f64,
    /// Minimum late-history step activity for structures to count as
    /// persisting rather than frozen.
    pub activity_floor: f64,
    /// Late-history step activity above this reads as chaotic churn
    /// rather than localized structure.
    pub activity_ceiling: f64,
    /// Cap on the period-detection window.
    pub detection_window: usize,
    /// Minimum history length needed to compute any trend.
    pub min_history: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            period_threshold: 8,
            max_transient_fraction: 0.5,
            variance_ceiling: 0.01,
            variance_growth_limit: 4.0,
            activity_floor: 0.01,
            activity_ceiling: 0.4,
            detection_window: 256,
            min_history: 2,
        }
    }
}

impl ClassifierConfig {
    /// A stricter profile: only tight cycles count as periodic and the
    /// structural-persistence band is narrower.
    pub fn strict() -> Self {
        Self {
            period_threshold: 4,
            variance_ceiling: 0.005,
            activity_floor: 0.02,
            detection_window: 512,
            ..Default::default()
        }
    }
}

/// The measurements a classification was decided on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassEvidence {
    /// Live-cell fraction of the last generation.
    pub final_density: f64,
    /// Whether the last generation is uniform.
    pub uniform_final: bool,
    /// Exact-repeat cycle found in the examined window, if any.
    pub period: Option<PeriodResult>,
    /// Density variance over the first half of history.
    pub early_variance: f64,
    /// Density variance over the second half of history.
    pub late_variance: f64,
    /// Mean changed-cell fraction per step over the second half.
    pub late_activity: f64,
}

/// A class label plus the evidence and confidence behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// The assigned Wolfram class.
    pub class: WolframClass,
    /// How sure the heuristic is, in `0.0..=1.0`.
    pub confidence: f64,
    /// Where the label came from.
    pub source: ClassSource,
    /// The raw measurements, always computed, for caller-side overrides.
    pub evidence: ClassEvidence,
}

/// Classify a generation history into a Wolfram class.
///
/// The decision policy is evaluated in order, first match wins:
///
/// 1. last generation uniform → Class I;
/// 2. a period of at most `period_threshold` with a transient no longer
///    than `max_transient_fraction` of the history → Class II;
/// 3. no period, bounded non-growing density variance, and step activity
///    inside the structural band → Class IV;
/// 4. anything else → Class III.
///
/// Fails with `InsufficientHistory` when the history is shorter than
/// `config.min_history` generations. See the module docs for why the
/// III/IV split is heuristic.
pub fn classify(history: &[Grid], config: &ClassifierConfig) -> AutomatonResult<Classification> {
    if history.len() < config.min_history {
        return Err(AutomatonError::InsufficientHistory {
            required: config.min_history,
            actual: history.len(),
        });
    }

    let densities = density_series(history);
    let activity = activity_series(history);
    let half = densities.len() / 2;

    let early_variance = variance(&densities[..half]);
    let late_variance = variance(&densities[half..]);
    let late_activity = {
        let late = &activity[activity.len() / 2..];
        late.iter().sum::<f64>() / late.len() as f64
    };

    let last = &history[history.len() - 1];
    let window = history.len().min(config.detection_window);
    let period = detect_period(history, window);

    let evidence = ClassEvidence {
        final_density: last.density(),
        uniform_final: last.is_uniform(),
        period,
        early_variance,
        late_variance,
        late_activity,
    };

    let (class, confidence) = decide(&evidence, history.len(), config);

    debug!(
        class = %class,
        confidence,
        late_variance,
        late_activity,
        period = ?period,
        "history_classified"
    );

    Ok(Classification {
        class,
        confidence,
        source: ClassSource::Computed,
        evidence,
    })
}

fn decide(
    evidence: &ClassEvidence,
    history_len: usize,
    config: &ClassifierConfig,
) -> (WolframClass, f64) {
    if evidence.uniform_final {
        return (WolframClass::Homogeneous, 0.9);
    }

    if let Some(p) = evidence.period {
        let transient_ok =
            p.transient as f64 <= history_len as f64 * config.max_transient_fraction;
        if p.period <= config.period_threshold && transient_ok {
            return (WolframClass::Periodic, 0.85);
        }
    }

    let bounded = evidence.late_variance <= config.variance_ceiling;
    let non_growing = evidence.late_variance
        <= (evidence.early_variance * config.variance_growth_limit).max(config.variance_ceiling);
    let structural_band = evidence.late_activity >= config.activity_floor
        && evidence.late_activity <= config.activity_ceiling;

    if evidence.period.is_none() && bounded && non_growing && structural_band {
        (WolframClass::Complex, 0.6)
    } else {
        (WolframClass::Chaotic, 0.7)
    }
}

/// Published classification for the well-studied rules, where one exists.
///
/// Mirrors the standard literature tables; rules whose class is disputed
/// or unlisted return `None` and must be classified computationally.
pub fn known_class(rule: u8) -> Option<WolframClass> {
    use WolframClass::*;
    match rule {
        0 | 8 | 32 | 40 | 128 | 136 | 160 | 168 => Some(Homogeneous),

        1..=7 | 9..=15 | 19 | 23..=29 | 31 | 33..=39 | 50 | 51 | 55..=58 | 62 | 90 | 94
        | 102 | 150 | 154 | 158 | 178 | 184 | 188 | 190 | 194 | 198 | 206 | 218 | 220 | 222
        | 250 => Some(Periodic),

        18 | 22 | 30 | 45 | 60 | 73 | 75 | 86 | 89 | 101 | 105 | 106 | 109 | 120 | 122 | 129
        | 131 | 133 | 135 | 139 | 141 | 149 | 151 | 161 | 163 | 165 | 167 | 169 | 171 | 182
        | 183 | 195 | 225 => Some(Chaotic),

        41 | 54 | 110 | 124 | 137 | 193 => Some(Complex),

        _ => None,
    }
}

/// Classify a rule by running a fresh simulation from a single-center row.
///
/// When `use_known` is set and the rule has a literature label, that label
/// wins (confidence 1.0) and the computed measurements are still attached
/// as evidence, matching the behavior callers expect from the published
/// tables. Pass `use_known = false` to force a purely computational
/// classification.
pub fn classify_rule(
    rule: i32,
    width: usize,
    generations: i64,
    boundary: BoundaryPolicy,
    config: &ClassifierConfig,
    use_known: bool,
) -> AutomatonResult<Classification> {
    let table = RuleTable::new(rule)?;
    let mut engine = EvolutionEngine::new(table, Grid::single_center(width)?, boundary);
    engine.evolve(generations)?;

    let mut classification = engine.classify(config)?;

    if use_known {
        if let Some(class) = known_class(table.number()) {
            classification.class = class;
            classification.confidence = 1.0;
            classification.source = ClassSource::Literature;
        }
    }

    debug!(
        rule = table.number(),
        class = %classification.class,
        source = ?classification.source,
        "rule_classified"
    );

    Ok(classification)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(bits: &[u8]) -> Grid {
        Grid::new(bits.len(), bits.iter().map(|&b| b == 1).collect()).unwrap()
    }

    /// Rows with exactly `ones` live cells, offset so every row differs.
    fn shifted_row(width: usize, ones: usize, offset: usize) -> Grid {
        let cells = (0..width).map(|i| (i + width - offset % width) % width < ones).collect();
        Grid::new(width, cells).unwrap()
    }

    #[test]
    fn test_insufficient_history() {
        let config = ClassifierConfig::default();
        assert!(matches!(
            classify(&[row(&[1, 0])], &config),
            Err(AutomatonError::InsufficientHistory { required: 2, actual: 1 })
        ));
        assert!(matches!(
            classify(&[], &config),
            Err(AutomatonError::InsufficientHistory { .. })
        ));
    }

    #[test]
    fn test_uniform_final_is_class_one() {
        let config = ClassifierConfig::default();
        let history = vec![row(&[1, 0, 1, 0]), row(&[0, 0, 0, 0])];
        let c = classify(&history, &config).unwrap();
        assert_eq!(c.class, WolframClass::Homogeneous);
        assert!(c.evidence.uniform_final);

        // All-ones is just as homogeneous as all-zeros.
        let history = vec![row(&[1, 0, 1, 0]), row(&[1, 1, 1, 1])];
        let c = classify(&history, &config).unwrap();
        assert_eq!(c.class, WolframClass::Homogeneous);
    }

    #[test]
    fn test_short_cycle_is_class_two() {
        let config = ClassifierConfig::default();
        let a = row(&[1, 0, 0, 1]);
        let b = row(&[0, 1, 1, 0]);
        let mut history = Vec::new();
        for _ in 0..6 {
            history.push(a.clone());
            history.push(b.clone());
        }
        let c = classify(&history, &config).unwrap();
        assert_eq!(c.class, WolframClass::Periodic);
        assert_eq!(c.evidence.period, Some(PeriodResult { transient: 0, period: 2 }));
    }

    #[test]
    fn test_long_cycle_is_not_class_two() {
        // An exact cycle longer than the threshold falls through to the
        // III/IV branch.
        let config = ClassifierConfig::default();
        let width = 24;
        let cycle: Vec<Grid> = (0..12).map(|i| shifted_row(width, 3, i)).collect();
        let mut history = Vec::new();
        for _ in 0..4 {
            history.extend(cycle.iter().cloned());
        }
        let c = classify(&history, &config).unwrap();
        assert_ne!(c.class, WolframClass::Periodic);
        assert_eq!(
            c.evidence.period,
            Some(PeriodResult { transient: 0, period: 12 })
        );
    }

    #[test]
    fn test_glider_history_is_class_four() {
        // A two-cell structure drifting right: constant density, steady
        // low activity, no repeat inside the window.
        let config = ClassifierConfig::default();
        let width = 40;
        let history: Vec<Grid> = (0..20)
            .map(|t| {
                let cells = (0..width).map(|i| i == t || i == t + 1).collect();
                Grid::new(width, cells).unwrap()
            })
            .collect();
        let c = classify(&history, &config).unwrap();
        assert_eq!(c.class, WolframClass::Complex);
        assert_eq!(c.evidence.period, None);
    }

    #[test]
    fn test_growing_density_swings_are_class_three() {
        let config = ClassifierConfig::default();
        let width = 20;
        let mut history = Vec::new();
        // Calm first half, violent density oscillation in the second.
        for i in 0..10 {
            history.push(shifted_row(width, 10, i));
        }
        for i in 0..5 {
            history.push(shifted_row(width, 2, i));
            history.push(shifted_row(width, 18, i));
        }
        let c = classify(&history, &config).unwrap();
        assert_eq!(c.class, WolframClass::Chaotic);
        assert!(c.evidence.late_variance > config.variance_ceiling);
    }

    #[test]
    fn test_known_class_table() {
        assert_eq!(known_class(0), Some(WolframClass::Homogeneous));
        assert_eq!(known_class(90), Some(WolframClass::Periodic));
        assert_eq!(known_class(30), Some(WolframClass::Chaotic));
        assert_eq!(known_class(110), Some(WolframClass::Complex));
        assert_eq!(known_class(54), Some(WolframClass::Complex));
        assert_eq!(known_class(17), None);
    }

    #[test]
    fn test_classify_rule_prefers_literature() {
        let config = ClassifierConfig::default();
        let c = classify_rule(30, 51, 60, BoundaryPolicy::Periodic, &config, true).unwrap();
        assert_eq!(c.class, WolframClass::Chaotic);
        assert_eq!(c.source, ClassSource::Literature);
        assert_eq!(c.confidence, 1.0);

        let computed =
            classify_rule(30, 51, 60, BoundaryPolicy::Periodic, &config, false).unwrap();
        assert_eq!(computed.source, ClassSource::Computed);
        // Rule 30 from a single seed never settles into a short cycle.
        assert_ne!(computed.class, WolframClass::Homogeneous);
        assert_ne!(computed.class, WolframClass::Periodic);
    }

    #[test]
    fn test_classify_rule_validates_inputs() {
        let config = ClassifierConfig::default();
        assert!(matches!(
            classify_rule(256, 51, 60, BoundaryPolicy::Periodic, &config, true),
            Err(AutomatonError::InvalidRule { number: 256 })
        ));
        assert!(matches!(
            classify_rule(30, 51, -3, BoundaryPolicy::Periodic, &config, true),
            Err(AutomatonError::InvalidGenerationCount { requested: -3 })
        ));
    }

    #[test]
    fn test_class_numbers_and_display() {
        assert_eq!(WolframClass::Homogeneous.number(), 1);
        assert_eq!(WolframClass::Complex.number(), 4);
        assert_eq!(WolframClass::Chaotic.to_string(), "Class III (chaotic)");
        assert_eq!(WolframClass::all().len(), 4);
    }
}
