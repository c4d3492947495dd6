use std::path::PathBuf;

use clap::Parser;

use hearts_replay::config::{ReplayConfig, ResolvedOutputs};
use hearts_replay::logging::init_logging;
use hearts_replay::replay::ReplayRunner;

/// Deterministic replay driver for recorded Hearts games.
#[derive(Debug, Parser)]
#[command(
    name = "hearts-replay",
    author,
    version,
    about = "Replays a JSONL file of Hearts moves through the rules engine"
)]
struct Cli {
    /// Path to the YAML configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "replay.yaml")]
    config: PathBuf,

    /// Override the run identifier (substitutes {run_id} templates).
    #[arg(long, value_name = "RUN_ID")]
    run_id: Option<String>,

    /// Override the RNG seed used for automatic deals.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Override the moves file to replay.
    #[arg(long, value_name = "FILE")]
    moves: Option<String>,

    /// Exit after validating the configuration (no moves are replayed).
    #[arg(long)]
    validate_only: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = ReplayConfig::from_path(&cli.config)?;

    if let Some(run_id) = cli.run_id {
        config.run_id = run_id;
    }

    if let Some(seed) = cli.seed {
        config.game.seed = seed;
    }

    if let Some(moves) = cli.moves {
        config.moves = moves;
    }

    config.validate()?;

    let outputs: ResolvedOutputs = config.resolved_outputs();
    let run_id = config.run_id.clone();

    println!(
        "Loaded configuration '{run_id}' (seed {}, moves from {})",
        config.game.seed,
        outputs.moves.display()
    );

    if cli.validate_only {
        println!("Validation-only mode: replay skipped.");
        return Ok(());
    }

    let logging_guard = init_logging(&config.logging, &outputs)?;
    let runner = ReplayRunner::new(config, outputs);
    let result = runner.run()?;
    let summary = &result.summary;

    println!(
        "Replay complete for '{run_id}': {} moves applied, {} rejected, {} deals; phase {}",
        summary.moves_applied, summary.moves_rejected, summary.deals, summary.game.phase
    );
    println!("Scores: {:?}", summary.game.scores);
    println!("Summary: {}", result.summary_path.display());
    if let Some(log_path) = logging_guard.log_path.as_ref() {
        println!("Trace log: {}", log_path.display());
    }

    Ok(())
}
