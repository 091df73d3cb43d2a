//! A single railway/airport query as read from its text form
//!
//! The text form is `n m k s t`, then `k` airport cities, then `m` railway
//! endpoint pairs. City numbers are 1-indexed on the wire and 0-indexed here.

use std::io::Read;

use log::debug;

use super::error::{try_push, try_reserve, Error, Result};
use super::graph::{GraphBuilder, RailGraph};
use super::scanner::Scanner;
use super::solver::{LayeredBfs, Outcome, SearchStats, SolverConfig};

/// Most list entries reserved before any of them has been read
const MAX_UPFRONT_RESERVE: usize = 1 << 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Network {
    pub cities: u32,
    pub airports: Vec<u32>,
    pub railways: Vec<(u32, u32)>,
    pub source: u32,
    pub target: u32,
}

impl Network {
    /// Parse a complete query from `scanner`, validating every city number.
    pub fn read<R: Read>(scanner: &mut Scanner<R>) -> Result<Self> {
        let cities = scanner.next_u32("city count")?;
        let railway_count = scanner.next_u32("railway count")? as usize;
        let airport_count = scanner.next_u32("airport count")? as usize;
        if cities == 0 {
            return Err(Error::InvalidInput(
                "the network must contain at least one city".to_string(),
            ));
        }

        let city = |raw: u32| -> Result<u32> {
            if raw == 0 || raw > cities {
                return Err(Error::CityOutOfRange {
                    city: raw as u64,
                    cities: cities as u64,
                });
            }
            Ok(raw - 1)
        };

        let source = city(scanner.next_u32("source city")?)?;
        let target = city(scanner.next_u32("target city")?)?;

        // Header counts are untrusted; lists grow as entries actually arrive
        let mut airports = Vec::new();
        try_reserve(&mut airports, airport_count.min(MAX_UPFRONT_RESERVE))?;
        for _ in 0..airport_count {
            try_push(&mut airports, city(scanner.next_u32("airport city")?)?)?;
        }

        let mut railways = Vec::new();
        try_reserve(&mut railways, railway_count.min(MAX_UPFRONT_RESERVE))?;
        for _ in 0..railway_count {
            let from = city(scanner.next_u32("railway endpoint")?)?;
            let to = city(scanner.next_u32("railway endpoint")?)?;
            try_push(&mut railways, (from, to))?;
        }

        debug!(
            "read network: {} cities, {} railways, {} airports, query {} -> {}",
            cities,
            railways.len(),
            airports.len(),
            source + 1,
            target + 1
        );

        Ok(Self {
            cities,
            airports,
            railways,
            source,
            target,
        })
    }

    /// Convenience wrapper reading straight from a byte stream.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::read(&mut Scanner::new(reader))
    }

    pub fn build_graph(&self) -> Result<RailGraph> {
        let mut builder =
            GraphBuilder::with_capacity(self.cities, self.airports.len(), self.railways.len())?;
        for &city in &self.airports {
            builder.add_airport(city)?;
        }
        for &(from, to) in &self.railways {
            builder.add_railway(from, to)?;
        }
        builder.build()
    }

    /// Build the graph and run the query once.
    pub fn search(&self, config: SolverConfig) -> Result<SearchStats> {
        let graph = self.build_graph()?;
        LayeredBfs::new(config).search(&graph, self.source, self.target)
    }

    pub fn solve(&self, config: SolverConfig) -> Result<Outcome> {
        self.search(config).map(|stats| stats.outcome)
    }
}
