//! `depot-plan` — find the minimum charger count for a shuttle batch.
//!
//! Reads a shuttle batch (CSV or the plain count-header format), runs the
//! feasibility search, prints the text report to stdout, and optionally
//! writes `assignments.csv` / `trials.csv` to an output directory.
//!
//! ```text
//! depot-plan --jobs fleet.csv --max-wait 30
//! depot-plan --jobs fleet.txt --format plain --max-wait 0 --out ./out
//! ```

mod logger;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use depot_core::{PlanParams, DEFAULT_HORIZON_MINUTES};
use depot_fleet::{load_shuttles_csv, load_shuttles_plain};
use depot_output::{render_report, write_search_outcome, CsvWriter};
use depot_search::{minimum_chargers_observed, SearchObserver};
use depot_sim::TrialOutcome;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Format {
    /// `id,priority,arrival_minute,service_minutes` with a header row.
    Csv,
    /// Count line followed by `id priority arrival service` quadruples.
    Plain,
}

#[derive(Parser, Debug)]
#[command(name = "depot-plan", about = "Minimum-charger planner for a shuttle batch")]
struct Cli {
    /// Shuttle batch file.
    #[arg(long)]
    jobs: PathBuf,

    /// Longest any shuttle may wait between arrival and dispatch, in minutes.
    #[arg(long)]
    max_wait: u64,

    /// Input file format.
    #[arg(long, value_enum, default_value = "csv")]
    format: Format,

    /// Trial abort ceiling in simulated minutes.
    #[arg(long, default_value_t = DEFAULT_HORIZON_MINUTES)]
    horizon: u64,

    /// Directory for CSV output (`assignments.csv`, `trials.csv`).
    #[arg(long)]
    out: Option<PathBuf>,
}

// ── Search progress → log ─────────────────────────────────────────────────────

struct LogProbes;

impl SearchObserver for LogProbes {
    fn on_trial_start(&mut self, chargers: usize) {
        log::debug!("trying {chargers} charger(s)");
    }

    fn on_trial_end(&mut self, chargers: usize, outcome: &TrialOutcome) {
        match outcome {
            TrialOutcome::Feasible(schedule) => {
                log::info!(
                    "{chargers} charger(s): feasible, max wait {} min",
                    schedule.max_waited(),
                );
            }
            TrialOutcome::Infeasible(reason) => {
                log::info!("{chargers} charger(s): infeasible — {reason}");
            }
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    logger::init();
    let cli = Cli::parse();

    let batch = match cli.format {
        Format::Csv => load_shuttles_csv(&cli.jobs),
        Format::Plain => load_shuttles_plain(&cli.jobs),
    }
    .with_context(|| format!("loading shuttle batch from {}", cli.jobs.display()))?;
    log::info!("loaded {} shuttle(s) from {}", batch.len(), cli.jobs.display());

    let params = PlanParams {
        max_wait_minutes: cli.max_wait,
        horizon_minutes:  cli.horizon,
    };

    let outcome = minimum_chargers_observed(&batch, params, &mut LogProbes)
        .context("feasibility search failed")?;

    print!("{}", render_report(&outcome, &params));

    if let Some(dir) = &cli.out {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating output directory {}", dir.display()))?;
        let mut writer = CsvWriter::new(dir)?;
        write_search_outcome(&mut writer, &outcome)?;
        log::info!("wrote assignments.csv and trials.csv to {}", dir.display());
    }

    Ok(())
}
