//! Compact CSR graph over cities plus one virtual airport hub
//!
//! Cities are numbered `0..cities` and the hub takes index `cities`, so the
//! graph has `cities + 1` nodes. Every airport city is linked to the hub,
//! which puts any two airports exactly two hops apart.
//!
//! Construction is two-pass counting, in the manner of a counting sort:
//! degrees are tallied first, an exclusive prefix sum fixes each node's slice
//! of the flat `heads` array, and a second pass writes every endpoint into
//! place through a per-node cursor. Storage is reserved once and never
//! resized afterwards.

use log::debug;

use super::error::{try_reserve, Error, Result};

/// Frozen undirected adjacency in compressed sparse row form
#[derive(Debug, Clone)]
pub struct RailGraph {
    cities: u32,
    /// Slice start per node, plus a final entry equal to `heads.len()`
    offsets: Vec<usize>,
    /// Concatenated neighbor lists, `2 * (railways + airports)` entries
    heads: Vec<u32>,
}

impl RailGraph {
    /// Number of real cities
    pub fn city_count(&self) -> u32 {
        self.cities
    }

    /// Number of nodes, hub included
    pub fn node_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Index of the virtual hub node
    pub fn hub(&self) -> u32 {
        self.cities
    }

    pub fn degree(&self, node: u32) -> usize {
        let node = node as usize;
        self.offsets[node + 1] - self.offsets[node]
    }

    pub fn neighbors(&self, node: u32) -> &[u32] {
        let node = node as usize;
        &self.heads[self.offsets[node]..self.offsets[node + 1]]
    }

    /// Total adjacency entries; always twice the number of inserted links
    pub fn adjacency_len(&self) -> usize {
        self.heads.len()
    }

    /// True for real cities; the hub is not a city
    pub fn is_city(&self, node: u32) -> bool {
        node < self.cities
    }
}

/// Collects airports and railways, then freezes them into a [`RailGraph`]
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    cities: u32,
    airports: Vec<u32>,
    railways: Vec<(u32, u32)>,
}

impl GraphBuilder {
    pub fn new(cities: u32) -> Self {
        Self {
            cities,
            airports: Vec::new(),
            railways: Vec::new(),
        }
    }

    /// Pre-size the edge lists when the counts are known up front.
    pub fn with_capacity(cities: u32, airports: usize, railways: usize) -> Result<Self> {
        let mut builder = Self::new(cities);
        try_reserve(&mut builder.airports, airports)?;
        try_reserve(&mut builder.railways, railways)?;
        Ok(builder)
    }

    /// Equip a 0-indexed city with an airport.
    pub fn add_airport(&mut self, city: u32) -> Result<&mut Self> {
        self.check_city(city)?;
        self.airports.push(city);
        Ok(self)
    }

    /// Link two 0-indexed cities with an undirected railway.
    pub fn add_railway(&mut self, from: u32, to: u32) -> Result<&mut Self> {
        self.check_city(from)?;
        self.check_city(to)?;
        self.railways.push((from, to));
        Ok(self)
    }

    pub fn build(&self) -> Result<RailGraph> {
        let hub = self.cities;
        let node_count = self.cities as usize + 1;

        // Pass 1: degrees
        let mut degree: Vec<usize> = Vec::new();
        try_reserve(&mut degree, node_count)?;
        degree.resize(node_count, 0);
        for (from, to) in self.links() {
            degree[from as usize] += 1;
            degree[to as usize] += 1;
        }

        // Exclusive prefix sum fixes every slice
        let mut offsets: Vec<usize> = Vec::new();
        try_reserve(&mut offsets, node_count + 1)?;
        let mut total = 0usize;
        for &d in &degree {
            offsets.push(total);
            total += d;
        }
        offsets.push(total);

        // Pass 2: fill slices, reusing `degree` as the write cursor
        degree.iter_mut().for_each(|d| *d = 0);
        let mut heads: Vec<u32> = Vec::new();
        try_reserve(&mut heads, total)?;
        heads.resize(total, 0);
        for (from, to) in self.links() {
            let (f, t) = (from as usize, to as usize);
            heads[offsets[f] + degree[f]] = to;
            degree[f] += 1;
            heads[offsets[t] + degree[t]] = from;
            degree[t] += 1;
        }

        let graph = RailGraph {
            cities: self.cities,
            offsets,
            heads,
        };
        debug!(
            "built CSR graph: {} nodes, {} adjacency entries, hub degree {}",
            graph.node_count(),
            graph.adjacency_len(),
            graph.degree(hub)
        );
        Ok(graph)
    }

    /// Airport-to-hub links followed by railways, in insertion order
    fn links(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let hub = self.cities;
        self.airports
            .iter()
            .map(move |&city| (city, hub))
            .chain(self.railways.iter().copied())
    }

    fn check_city(&self, city: u32) -> Result<()> {
        if city >= self.cities {
            return Err(Error::CityOutOfRange {
                city: city as u64,
                cities: self.cities as u64,
            });
        }
        Ok(())
    }
}
