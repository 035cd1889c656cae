//! Main entry point for the matchmaking simulator
//!
//! Parses the run options, loads the simulation parameters, runs one or more
//! simulations and writes the console report and CSV stats lines.

use anyhow::Result;
use clap::Parser;
use matchmaking_sim::{
    run_batch, RunOptions, SimulationParameters, SimulationReport, StrategyRegistry,
};
use std::path::PathBuf;
use tracing::{error, info};

/// Matchmaking Simulator - offline evaluation of matchmaking and rating policies
#[derive(Parser)]
#[command(
    name = "matchmaking-sim",
    version,
    about = "Matchmaking Simulation CLI Tool",
    long_about = "Simulates synthetic players joining 1v1 and group queues, being matched, \
                 playing and requeueing, and reports wait times and rating averages per queue."
)]
struct Args {
    /// Total simulation time in seconds
    #[arg(long, value_name = "SECONDS", default_value_t = 3600.0)]
    sim_time: f64,

    /// Number of players in the simulation
    #[arg(long, value_name = "COUNT", default_value_t = 5000)]
    num_players: usize,

    /// Rating strategy to use
    #[arg(long, value_name = "NAME", default_value = "naive")]
    elo_strategy: String,

    /// Matchmaking strategy to use
    #[arg(long, value_name = "NAME", default_value = "naive")]
    mm_strategy: String,

    /// File to which stats are appended
    #[arg(long, value_name = "FILE", default_value = "matchmaking_stats.log")]
    log_file: PathBuf,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Simulation configuration file (JSON or TOML)
    #[arg(long, value_name = "FILE", default_value = "simulation_config.json")]
    sim_config: PathBuf,

    /// Number of independent runs with consecutive seeds
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    runs: usize,

    /// Print reports as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    log_level: String,

    /// Enable debug mode
    #[arg(short, long, help = "Enable debug mode with verbose logging")]
    debug: bool,

    /// Dry run mode (validate config and exit)
    #[arg(long, help = "Validate configuration and exit without running")]
    dry_run: bool,

    /// List registered strategies and exit
    #[arg(long)]
    list_strategies: bool,
}

impl Args {
    fn run_options(&self) -> RunOptions {
        RunOptions {
            sim_time: self.sim_time,
            num_players: self.num_players,
            elo_strategy: self.elo_strategy.clone(),
            mm_strategy: self.mm_strategy.clone(),
            seed: self.seed,
            log_file: self.log_file.clone(),
        }
    }
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

fn print_report(report: &SimulationReport, json: bool) -> Result<()> {
    if json {
        println!("{}", report.to_json_pretty()?);
    } else {
        println!("{}", report);
    }
    Ok(())
}

fn run(args: &Args) -> Result<()> {
    let strategies = StrategyRegistry::with_defaults();

    if args.list_strategies {
        println!("Rating strategies: {}", strategies.rating_names().join(", "));
        println!(
            "Matchmaking strategies: {}",
            strategies.matchmaking_names().join(", ")
        );
        return Ok(());
    }

    let options = args.run_options();
    options.validate()?;
    // Resolve names up front so a typo fails before any work is done
    strategies.rating(&options.elo_strategy)?;
    strategies.matchmaking(&options.mm_strategy)?;

    let params = SimulationParameters::from_file(&args.sim_config)?;

    if args.dry_run {
        info!("Configuration validation successful");
        info!("Dry run completed - exiting without running the simulation");
        return Ok(());
    }

    let reports = run_batch(&params, &options, &strategies, args.runs)?;
    for report in &reports {
        report.append_to_log(&options.log_file)?;
        print_report(report, args.json)?;
    }

    info!(
        "Appended {} run(s) to {}",
        reports.len(),
        options.log_file.display()
    );
    Ok(())
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { args.log_level.as_str() };
    if let Err(e) = init_logging(log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(&args) {
        error!("Simulation failed: {:#}", e);
        return Err(e);
    }
    Ok(())
}
