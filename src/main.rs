//! # Railhop CLI
//!
//! Command-line interface for the railhop library.
//! Reads one query and prints the minimum number of hops, or `Impossible`.

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info, LevelFilter};
use railhop::{Network, Scanner, SolverConfig};
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::time::Instant;

mod cli;

use cli::OutputFormat;

/// Command-line interface for railhop
#[derive(Parser)]
#[command(name = "railhop")]
#[command(about = "Minimum railway hops between two cities, with airports sharing one hub")]
#[command(long_about = "Reads a single query:
  n m k s t                        # cities, railways, airports, source, target
  k airport cities
  m railway pairs

City numbers are 1-indexed. Prints the hop count, or 'Impossible'.
  railhop network.txt
  railhop < network.txt
  railhop --format json network.txt")]
#[command(version = env!("RAILHOP_VERSION"))]
struct Cli {
    /// Input file, or "-" for stdin
    #[arg(default_value = "-")]
    input: PathBuf,

    /// Initial capacity of the search queue
    #[arg(long, default_value_t = SolverConfig::default().initial_queue_capacity)]
    queue_capacity: usize,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging to stderr
    let mut logger = env_logger::Builder::from_default_env();
    logger.target(env_logger::Target::Stderr);
    if cli.verbose {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    if let Err(e) = run(&cli) {
        error!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let start = Instant::now();

    let network = if cli.input.as_os_str() == "-" {
        read_network(io::stdin().lock()).context("Failed to read query from stdin")?
    } else {
        let file = File::open(&cli.input)
            .with_context(|| format!("Failed to open {}", cli.input.display()))?;
        read_network(file).with_context(|| format!("Failed to read {}", cli.input.display()))?
    };

    let config = SolverConfig {
        initial_queue_capacity: cli.queue_capacity,
    };
    let stats = network.search(config).context("Search failed")?;
    info!(
        "query {} -> {} answered in {:.3}s ({} nodes expanded)",
        network.source + 1,
        network.target + 1,
        start.elapsed().as_secs_f64(),
        stats.expanded
    );

    let line = cli::render(cli.format, &network, stats.outcome)
        .context("Failed to render result")?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{line}")?;
    stdout.flush()?;

    Ok(())
}

fn read_network<R: Read>(reader: R) -> railhop::Result<Network> {
    Network::read(&mut Scanner::new(reader))
}
