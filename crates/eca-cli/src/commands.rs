//! Command implementations for the `eca` binary.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tracing::info;

use eca_core::{
    classify_rule, BoundaryPolicy, ClassifierConfig, Classification, EvolutionEngine,
    InitPattern, RuleTable, WolframClass,
};
use eca_export::{render_history, render_rule, write_csv, write_rows, EvolutionDocument};

/// Everything `eca evolve` needs.
#[derive(Debug, Clone)]
pub struct EvolveOptions {
    pub rule: i32,
    pub width: usize,
    pub generations: i64,
    pub boundary: BoundaryPolicy,
    pub init: String,
    pub density: f64,
    pub seed: u64,
    pub output: Option<PathBuf>,
    pub format: String,
}

/// Resolve the `--init`/`--density`/`--seed` flags into a preset.
fn resolve_init(init: &str, density: f64, seed: u64) -> Result<InitPattern> {
    let pattern: InitPattern = init.parse().map_err(anyhow::Error::msg)?;
    Ok(match pattern {
        // The flag values win over the preset's stock parameters.
        InitPattern::Random { .. } => InitPattern::Random { density, seed },
        other => other,
    })
}

/// Run one simulation and print or export it.
pub fn evolve(options: EvolveOptions) -> Result<()> {
    let rule = RuleTable::new(options.rule)?;
    let initial = resolve_init(&options.init, options.density, options.seed)?
        .build(options.width)?;

    let mut engine = EvolutionEngine::new(rule, initial, options.boundary);
    engine.evolve(options.generations)?;

    let summary = engine.summary();
    info!(
        rule = summary.rule,
        generations = summary.generations,
        final_density = summary.final_density,
        "evolution_complete"
    );

    let rendered = match options.format.as_str() {
        "text" => render_history(engine.history()),
        "rows" => {
            let mut buf = Vec::new();
            write_rows(&mut buf, engine.history())?;
            String::from_utf8(buf).context("row output is not valid utf-8")?
        }
        "csv" => {
            let mut buf = Vec::new();
            write_csv(&mut buf, engine.history())?;
            String::from_utf8(buf).context("csv output is not valid utf-8")?
        }
        "json" => {
            if let Some(path) = &options.output {
                EvolutionDocument::from_engine(&engine).save(path)?;
                println!("wrote {}", path.display());
                return Ok(());
            }
            serde_json::to_string_pretty(&EvolutionDocument::from_engine(&engine))?
        }
        other => bail!("unknown format '{other}' (expected text, rows, json, or csv)"),
    };

    match options.output {
        Some(path) => {
            let mut writer = BufWriter::new(
                File::create(&path)
                    .with_context(|| format!("cannot create {}", path.display()))?,
            );
            writer.write_all(rendered.as_bytes())?;
            writer.flush()?;
            println!("wrote {}", path.display());
        }
        None => {
            print!("{rendered}");
            if options.format == "text" {
                println!(
                    "rule {} | {} generations | final density {:.3} | period {}",
                    summary.rule,
                    summary.generations,
                    summary.final_density,
                    match summary.period {
                        Some(p) => format!("{} (transient {})", p.period, p.transient),
                        None => "none".to_string(),
                    }
                );
            }
        }
    }

    Ok(())
}

fn print_classification(rule: i32, c: &Classification) {
    println!("rule {rule}: {} [{:?}]", c.class, c.source);
    println!("  confidence:    {:.2}", c.confidence);
    println!("  final density: {:.3}", c.evidence.final_density);
    println!(
        "  period:        {}",
        match c.evidence.period {
            Some(p) => format!("{} (transient {})", p.period, p.transient),
            None => "none found".to_string(),
        }
    );
    println!(
        "  density var:   {:.5} early, {:.5} late",
        c.evidence.early_variance, c.evidence.late_variance
    );
    println!("  late activity: {:.3}", c.evidence.late_activity);
}

/// Classify one rule and print the label with its evidence.
pub fn classify(
    rule: i32,
    width: usize,
    generations: i64,
    boundary: BoundaryPolicy,
    use_known: bool,
) -> Result<()> {
    let config = ClassifierConfig::default();
    let classification = classify_rule(rule, width, generations, boundary, &config, use_known)?;
    print_classification(rule, &classification);
    Ok(())
}

/// Classify all 256 rules and print the per-class distribution.
pub fn sweep(width: usize, generations: i64, use_known: bool) -> Result<()> {
    let config = ClassifierConfig::default();
    let mut by_class: Vec<(WolframClass, Vec<u8>)> = WolframClass::all()
        .into_iter()
        .map(|class| (class, Vec::new()))
        .collect();

    for rule in 0..=255u8 {
        let c = classify_rule(
            rule as i32,
            width,
            generations,
            BoundaryPolicy::Periodic,
            &config,
            use_known,
        )?;
        for (class, rules) in &mut by_class {
            if *class == c.class {
                rules.push(rule);
            }
        }
    }

    println!("classified 256 rules ({width} cells, {generations} generations)");
    for (class, rules) in &by_class {
        println!();
        println!("{class}: {} rules", rules.len());
        for chunk in rules.chunks(16) {
            let line: Vec<String> = chunk.iter().map(|r| format!("{r:>3}")).collect();
            println!("  {}", line.join(" "));
        }
    }

    Ok(())
}

/// Print a rule's transition table.
pub fn rule(rule: i32) -> Result<()> {
    let table = RuleTable::new(rule)?;
    print!("{}", render_rule(&table));
    Ok(())
}
