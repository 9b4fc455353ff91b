//! eca - simulate and classify Wolfram's elementary cellular automata.
//!
//! Thin front end over `eca-core` and `eca-export`: constructs an engine
//! from CLI arguments, runs it, and hands the history to the export layer.
//! Invalid rule numbers, widths, and generation counts surface as a
//! descriptive message and a non-zero exit code.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;

use eca_core::BoundaryPolicy;

mod commands;

/// Simulate and classify elementary cellular automata.
///
/// Run `eca evolve --rule 30` for a quick look at a rule, or
/// `eca sweep` to classify all 256 of them.
#[derive(Parser, Debug)]
#[command(
    name = "eca",
    author,
    version,
    about = "Elementary cellular automata: evolve, inspect, classify",
    long_about = None
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Evolve one rule and print or export the generations.
    Evolve {
        /// Wolfram rule number (0-255).
        #[arg(short, long)]
        rule: i32,

        /// Number of cells in the row.
        #[arg(short, long, default_value_t = 101)]
        width: usize,

        /// Generations to compute beyond the initial row.
        #[arg(short = 'n', long, default_value_t = 100)]
        generations: i64,

        /// Boundary policy: periodic, fixed, fixed-one, or reflective.
        #[arg(short, long, default_value = "periodic")]
        boundary: BoundaryPolicy,

        /// Initial row preset: single, random, or alternating.
        #[arg(long, default_value = "single")]
        init: String,

        /// Live-cell probability for the random preset.
        #[arg(long, default_value_t = 0.5)]
        density: f64,

        /// Seed for the random preset.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Write the result to this path instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format: text, rows, json, or csv.
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Classify one rule's long-run behavior into Wolfram classes I-IV.
    Classify {
        /// Wolfram rule number (0-255).
        #[arg(short, long)]
        rule: i32,

        /// Number of cells in the row.
        #[arg(short, long, default_value_t = 101)]
        width: usize,

        /// Generations to simulate before classifying.
        #[arg(short = 'n', long, default_value_t = 200)]
        generations: i64,

        /// Boundary policy: periodic, fixed, fixed-one, or reflective.
        #[arg(short, long, default_value = "periodic")]
        boundary: BoundaryPolicy,

        /// Ignore the literature table and classify computationally.
        #[arg(long)]
        no_known: bool,
    },

    /// Classify all 256 rules and print a per-class tally.
    Sweep {
        /// Number of cells in the row.
        #[arg(short, long, default_value_t = 101)]
        width: usize,

        /// Generations to simulate per rule.
        #[arg(short = 'n', long, default_value_t = 200)]
        generations: i64,

        /// Ignore the literature table and classify computationally.
        #[arg(long)]
        no_known: bool,
    },

    /// Print a rule's transition table.
    Rule {
        /// Wolfram rule number (0-255).
        #[arg(short, long)]
        rule: i32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing based on verbosity
    let level = if cli.quiet {
        Level::ERROR
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN // Default to less noise
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Evolve {
            rule,
            width,
            generations,
            boundary,
            init,
            density,
            seed,
            output,
            format,
        } => {
            let options = commands::EvolveOptions {
                rule,
                width,
                generations,
                boundary,
                init,
                density,
                seed,
                output,
                format,
            };
            commands::evolve(options)?;
        }

        Commands::Classify {
            rule,
            width,
            generations,
            boundary,
            no_known,
        } => {
            commands::classify(rule, width, generations, boundary, !no_known)?;
        }

        Commands::Sweep {
            width,
            generations,
            no_known,
        } => {
            commands::sweep(width, generations, !no_known)?;
        }

        Commands::Rule { rule } => {
            commands::rule(rule)?;
        }
    }

    Ok(())
}
