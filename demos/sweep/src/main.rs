//! sweep - run the cleaning simulation once per agent count.
//!
//! Every run starts from the same grid size and dirt percentage.  Each one
//! writes `dirty_cells.csv` and `agent_moves.csv` into `<out>/<agents>ag/`
//! and prints a setup/result summary to stdout.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

use vc_core::{CleanerConfig, ConflictPolicy};
use vc_output::{CsvWriter, RecordingObserver, RunSummary};
use vc_sim::ModelBuilder;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "sweep", about = "Cleaning-agent simulation over several agent counts")]
struct Cli {
    /// Grid width in cells
    #[arg(long, default_value_t = 30)]
    width: u32,

    /// Grid height in cells
    #[arg(long, default_value_t = 30)]
    height: u32,

    /// Percentage of cells dirty at start (0-100)
    #[arg(long, default_value_t = 50.0)]
    dirty: f64,

    /// Comma-separated agent counts, one run each
    #[arg(long, value_delimiter = ',', default_values_t = [100, 150, 200])]
    agents: Vec<usize>,

    /// Step budget per run
    #[arg(long, default_value_t = 2_000)]
    max_steps: u64,

    /// Write per-agent move totals every N steps (0 = never)
    #[arg(long, default_value_t = 1)]
    snapshot_every: u64,

    /// Random seed shared by every run (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Output directory
    #[arg(long, default_value = "output")]
    out: PathBuf,

    /// Only the first agent to claim a cell in a step may move into it
    #[arg(long)]
    first_wins: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .compact()
        .init();

    if cli.agents.is_empty() {
        bail!("--agents needs at least one count");
    }

    let policy = if cli.first_wins {
        ConflictPolicy::FirstRegisteredWins
    } else {
        ConflictPolicy::Unarbitrated
    };

    for &agents in &cli.agents {
        run_one(&cli, agents, policy)?;
    }
    Ok(())
}

fn run_one(cli: &Cli, agents: usize, policy: ConflictPolicy) -> Result<()> {
    let mut config = CleanerConfig::new(cli.width, cli.height, cli.dirty, agents)
        .with_conflict_policy(policy);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let mut model = ModelBuilder::new(config)
        .snapshot_interval(cli.snapshot_every)
        .build()
        .with_context(|| format!("building model with {agents} agents"))?;

    let dir = cli.out.join(format!("{agents}ag"));
    fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;
    let mut observer = RecordingObserver::new(CsvWriter::new(&dir)?);

    info!(agents, seed = model.seed(), out = %dir.display(), "run started");
    let t0 = Instant::now();
    let steps = model.run(cli.max_steps, &mut observer);
    let elapsed = t0.elapsed();

    if let Some(e) = observer.take_error() {
        return Err(e).with_context(|| format!("writing results to {}", dir.display()));
    }

    let summary = RunSummary::from_model(&model);
    if !summary.halted {
        warn!(agents, steps, remaining = summary.remaining_dirty, "step budget exhausted");
    }
    info!(agents, steps, elapsed_ms = elapsed.as_millis() as u64, "run finished");

    println!("{summary}");
    println!();
    Ok(())
}
