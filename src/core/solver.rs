//! Layered breadth-first search for the minimum hop count
//!
//! No per-node distance is stored. Instead the queue carries explicit
//! [`QueueItem::LayerBoundary`] markers: after expanding a node that has
//! neighbors, a marker holding the next layer's counter value is pushed ahead
//! of the children. Dequeuing a marker sets the counter. Because nodes are
//! marked visited when enqueued and the queue is FIFO, every node dequeued
//! while the counter is `d` lies exactly `d - 1` hops from the source.
//!
//! A marker is pushed once per expanded node with a nonzero degree, so a
//! layer may carry several markers of the same value. Re-applying the same
//! value is idempotent.

use std::fmt;

use log::debug;

use super::error::{try_reserve, Error, Result};
use super::graph::RailGraph;
use super::queue::{RingQueue, DEFAULT_CAPACITY};

/// Result of a single query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Minimum number of hops from source to target
    Hops(u32),
    /// The target cannot be reached from the source
    Impossible,
}

impl Outcome {
    pub fn hops(self) -> Option<u32> {
        match self {
            Outcome::Hops(hops) => Some(hops),
            Outcome::Impossible => None,
        }
    }

    pub fn is_reachable(self) -> bool {
        matches!(self, Outcome::Hops(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Hops(hops) => write!(f, "{hops}"),
            Outcome::Impossible => write!(f, "Impossible"),
        }
    }
}

/// Work item carried through the BFS queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueItem {
    /// A node waiting to be expanded
    Node(u32),
    /// Counter value to apply when this marker reaches the head
    LayerBoundary(u32),
}

/// Filler for unused ring slots
impl Default for QueueItem {
    fn default() -> Self {
        QueueItem::LayerBoundary(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Starting capacity of the BFS queue; must be strictly positive
    pub initial_queue_capacity: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            initial_queue_capacity: DEFAULT_CAPACITY,
        }
    }
}

/// What a finished search found, with counters for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    pub outcome: Outcome,
    /// Nodes taken off the queue and expanded
    pub expanded: usize,
    /// Layer markers taken off the queue
    pub boundaries: usize,
    /// Queue capacity when the search ended
    pub queue_capacity: usize,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LayeredBfs {
    config: SolverConfig,
}

impl LayeredBfs {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Minimum hops from `source` to `target`, both 0-indexed cities.
    ///
    /// The hub is a graph node but not a city, so it is rejected as an
    /// endpoint along with any index past the last city.
    pub fn solve(&self, graph: &RailGraph, source: u32, target: u32) -> Result<Outcome> {
        self.search(graph, source, target).map(|stats| stats.outcome)
    }

    pub fn search(&self, graph: &RailGraph, source: u32, target: u32) -> Result<SearchStats> {
        for node in [source, target] {
            if !graph.is_city(node) {
                return Err(Error::CityOutOfRange {
                    city: node as u64,
                    cities: graph.city_count() as u64,
                });
            }
        }

        let mut queue = RingQueue::with_capacity(self.config.initial_queue_capacity)?;
        let mut visited: Vec<bool> = Vec::new();
        try_reserve(&mut visited, graph.node_count())?;
        visited.resize(graph.node_count(), false);

        let mut stats = SearchStats {
            outcome: Outcome::Impossible,
            expanded: 0,
            boundaries: 0,
            queue_capacity: 0,
        };
        // Primed for the first layer: the source itself is at distance - 1 = 0
        let mut distance: u32 = 1;

        queue.enqueue(QueueItem::Node(source))?;
        visited[source as usize] = true;

        while let Some(item) = queue.dequeue() {
            match item {
                QueueItem::LayerBoundary(next) => {
                    stats.boundaries += 1;
                    distance = next;
                }
                QueueItem::Node(node) if node == target => {
                    stats.outcome = Outcome::Hops(distance - 1);
                    break;
                }
                QueueItem::Node(node) => {
                    stats.expanded += 1;
                    let neighbors = graph.neighbors(node);
                    if !neighbors.is_empty() {
                        queue.enqueue(QueueItem::LayerBoundary(distance + 1))?;
                    }
                    for &next in neighbors {
                        if !visited[next as usize] {
                            visited[next as usize] = true;
                            queue.enqueue(QueueItem::Node(next))?;
                        }
                    }
                }
            }
        }

        stats.queue_capacity = queue.capacity();
        debug!(
            "search {} -> {}: {:?} after expanding {} nodes, {} layer markers, queue capacity {}",
            source, target, stats.outcome, stats.expanded, stats.boundaries, stats.queue_capacity
        );
        Ok(stats)
    }
}

/// Solve with the default configuration.
pub fn solve(graph: &RailGraph, source: u32, target: u32) -> Result<Outcome> {
    LayeredBfs::default().solve(graph, source, target)
}
