//! Renders a query outcome for stdout

use clap::ValueEnum;
use railhop::{Network, Outcome};
use serde::Serialize;

/// How the answer is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The hop count, or `Impossible`
    Text,
    /// A single JSON object
    Json,
}

#[derive(Debug, Serialize)]
struct JsonReport {
    source: u32,
    target: u32,
    hops: Option<u32>,
    reachable: bool,
}

/// Format `outcome` for `network`'s query. City numbers are reported 1-indexed.
pub fn render(format: OutputFormat, network: &Network, outcome: Outcome) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(outcome.to_string()),
        OutputFormat::Json => serde_json::to_string(&JsonReport {
            source: network.source + 1,
            target: network.target + 1,
            hops: outcome.hops(),
            reachable: outcome.is_reachable(),
        }),
    }
}
