//! A tour of the famous elementary rules.
//!
//! Runs a handful of well-studied rules (30 chaotic, 90 Sierpinski
//! triangle, 110 universal computation, 184 traffic flow) and prints
//! each evolution as block art together with its classification.
//!
//! Run with:
//! ```bash
//! cargo run --example famous_rules -p eca-core
//! ```

use eca_core::{
    BoundaryPolicy, ClassifierConfig, EvolutionEngine, Grid, InitPattern, RuleTable,
};

const WIDTH: usize = 79;
const GENERATIONS: i64 = 24;

fn run_rule(rule: i32, title: &str, initial: Grid) -> Result<(), eca_core::AutomatonError> {
    let mut engine = EvolutionEngine::new(
        RuleTable::new(rule)?,
        initial,
        BoundaryPolicy::Periodic,
    );
    engine.evolve(GENERATIONS)?;

    println!("=== {} / {title} ===", engine.rule());
    for generation in engine.history() {
        println!("{generation}");
    }

    let summary = engine.summary();
    println!(
        "final density {:.3}, period {:?}",
        summary.final_density, summary.period
    );

    let classification = engine.classify(&ClassifierConfig::default())?;
    println!(
        "computed: {} (confidence {:.2})",
        classification.class, classification.confidence
    );
    if let Some(known) = eca_core::known_class(engine.rule().number()) {
        println!("literature: {known}");
    }
    println!();

    Ok(())
}

fn main() -> Result<(), eca_core::AutomatonError> {
    run_rule(30, "chaotic", Grid::single_center(WIDTH)?)?;
    run_rule(90, "Sierpinski triangle", Grid::single_center(WIDTH)?)?;
    run_rule(110, "universal computation", Grid::single_center(WIDTH)?)?;

    // Rule 184 reads as single-lane traffic: live cells are cars that
    // advance into free space. Start it from a seeded random jam.
    let jam = InitPattern::Random {
        density: 0.4,
        seed: 42,
    }
    .build(WIDTH)?;
    run_rule(184, "traffic flow", jam)?;

    Ok(())
}
