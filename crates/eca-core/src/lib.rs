//! Elementary cellular automaton engine with behavioral classification.
//!
//! This crate simulates Wolfram's 256 elementary one-dimensional binary
//! cellular automata: given a rule number, an initial row of cells, and a
//! boundary policy, it computes successive generations and classifies the
//! long-run behavior into Wolfram's classes I-IV.
//!
//! ## Core Concepts
//!
//! - **RuleTable**: the 8-entry neighborhood lookup derived from a rule
//!   number in 0..=255
//! - **Grid**: a fixed-width row of binary cells
//! - **BoundaryPolicy**: how off-grid neighbors resolve at the row edges
//!   (periodic, fixed, or reflective)
//! - **EvolutionEngine**: owns the rule, the current row, and the
//!   append-only generation history
//! - **PeriodResult / Classification**: derived views over the history
//!
//! ## The Evolution Model
//!
//! ```text
//! EvolutionEngine = {
//!     rule:    RuleTable,       // immutable, Copy
//!     current: Grid,            // generation t
//!     history: Vec<Grid>,       // generations 0..=t, append-only
//! }
//! ```
//!
//! Each step reads every cell's `(left, center, right)` neighborhood from
//! the current generation before writing any cell of the next, so a step
//! is a pure function of the previous row. Runs are bit-for-bit
//! reproducible for fixed inputs.
//!
//! ## Example
//!
//! ```
//! use eca_core::{BoundaryPolicy, ClassifierConfig, EvolutionEngine, Grid, RuleTable};
//!
//! let rule = RuleTable::new(90)?;
//! let mut engine = EvolutionEngine::new(
//!     rule,
//!     Grid::single_center(63)?,
//!     BoundaryPolicy::Periodic,
//! );
//! engine.evolve(31)?;
//!
//! let class = engine.classify(&ClassifierConfig::default())?;
//! println!("rule 90 behaves as {}", class.class);
//! # Ok::<(), eca_core::AutomatonError>(())
//! ```

pub mod analysis;
mod classify;
mod engine;
mod error;
mod grid;
mod init;
mod period;
mod rule;

pub use classify::{
    classify, classify_rule, known_class, ClassEvidence, ClassSource, Classification,
    ClassifierConfig, WolframClass,
};
pub use engine::{EvolutionEngine, EvolutionSummary};
pub use error::{AutomatonError, AutomatonResult};
pub use grid::{BoundaryPolicy, Grid};
pub use init::InitPattern;
pub use period::{detect_period, PeriodResult};
pub use rule::RuleTable;
