//! # Name Registry Node
//!
//! Replays a scenario file against a fresh registry and prints the report.
//!
//! ## Startup Sequence
//!
//! 1. Parse CLI arguments
//! 2. Load configuration (file, then `NS_*` environment)
//! 3. Initialize logging (`RUST_LOG` wins over the configured level)
//! 4. Seed genesis balances and replay the scenario
//! 5. Print the report as JSON on stdout

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use node_runtime::{NodeConfig, NodeRuntime, Scenario};

#[derive(Parser, Debug)]
#[command(name = "ns-node")]
#[command(about = "Name registry node: replays commands against a bidding registry")]
#[command(version)]
struct Args {
    /// Scenario file (genesis, commands, queries) in JSON
    scenario: PathBuf,

    /// Optional JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pretty-print the report
    #[arg(long)]
    pretty: bool,
}

fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .context("Invalid log filter")?;
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = NodeConfig::load(args.config.as_deref()).context("Failed to load configuration")?;
    init_logging(&config.log_level)?;

    let raw = fs::read_to_string(&args.scenario)
        .with_context(|| format!("Failed to read scenario {:?}", args.scenario))?;
    let scenario: Scenario = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse scenario {:?}", args.scenario))?;

    info!(
        commands = scenario.commands.len(),
        queries = scenario.queries.len(),
        "Replaying scenario"
    );

    let runtime = NodeRuntime::new(&config, &scenario.genesis)?;
    let report = runtime.replay(&scenario)?;

    let output = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", output);

    Ok(())
}
