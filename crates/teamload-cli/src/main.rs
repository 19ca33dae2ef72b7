//! TeamLoad command line front end.
//!
//! Loads planning inputs, runs the staffing-demand engine, and prints the
//! result as text or JSON. Runs entirely in-process with no state kept
//! between invocations.
//!
//! Usage:
//!   teamload report
//!   teamload report --inputs plan.json --team-size 9 --json
//!   teamload defaults > plan.json
//!   teamload check --verbose
//!
//! Log verbosity follows `RUST_LOG` (default `warn`); logs go to stderr.

mod check;
mod error;
mod inputs;
mod render;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use teamload_logic::constants::sweep;
use teamload_logic::inputs::PlanningInputs;
use teamload_logic::report::build_report;
use tracing_subscriber::EnvFilter;

use crate::inputs::{load_inputs, sweep_range, Overrides};

#[derive(Parser)]
#[command(name = "teamload", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute staffing demand and print the planning report
    Report(ReportArgs),
    /// Print the reference planning inputs as JSON
    Defaults,
    /// Run the engine self-checks against the reference scenario
    Check {
        /// Print passing checks as well as failures
        #[arg(long)]
        verbose: bool,
    },
}

#[derive(Args)]
struct ReportArgs {
    /// JSON inputs file; missing fields take reference values
    #[arg(long, short)]
    inputs: Option<PathBuf>,
    /// Override the planned team size
    #[arg(long)]
    team_size: Option<u32>,
    /// Override the risk buffer percentage
    #[arg(long)]
    risk: Option<f64>,
    /// Use this many hotfix hours instead of the release model
    #[arg(long)]
    manual_hotfix: Option<f64>,
    /// Smallest team size in the debt sweep
    #[arg(long, default_value_t = sweep::MIN_TEAM_SIZE)]
    sweep_min: u32,
    /// Largest team size in the debt sweep
    #[arg(long, default_value_t = sweep::MAX_TEAM_SIZE)]
    sweep_max: u32,
    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Report(args) => run_report(args),
        Commands::Defaults => run_defaults(),
        Commands::Check { verbose } => run_check(verbose),
    }
}

fn run_report(args: ReportArgs) -> Result<()> {
    let overrides = Overrides {
        team_size: args.team_size,
        risk_percent: args.risk,
        manual_hotfix_hours: args.manual_hotfix,
    };
    let inputs = load_inputs(args.inputs.as_deref(), &overrides)
        .context("Could not assemble planning inputs")?;
    let range = sweep_range(args.sweep_min, args.sweep_max)?;

    let report = build_report(&inputs, range);
    log::info!(
        "demand {:.0} h, capacity {:.0} h, {:.2} FTE needed, coverage {:.1}%",
        report.results.total_demand,
        report.results.team_capacity,
        report.results.fte_needed,
        report.results.coverage_percent
    );
    if !report.results.fte_needed.is_finite() {
        log::warn!("effective hours per developer is zero; staffing ratios are not finite");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &report).context("Could not serialize report")?;
        writeln!(out)?;
    } else {
        render::render_text(&report, &mut out).context("Could not write report")?;
    }
    Ok(())
}

fn run_defaults() -> Result<()> {
    let json = serde_json::to_string_pretty(&PlanningInputs::default())
        .context("Could not serialize default inputs")?;
    println!("{}", json);
    Ok(())
}

fn run_check(verbose: bool) -> Result<()> {
    println!("=== TeamLoad Engine Checks ===\n");

    let results = check::run_all();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.len() - passed;

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed,
        results.len(),
        failed
    );

    if failed > 0 {
        log::error!("{} engine checks failed", failed);
        std::process::exit(1);
    }
    Ok(())
}
