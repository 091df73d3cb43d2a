//! Core library modules for railhop
//!
//! Queue, CSR graph construction, layered search and the input reader.

pub mod error;
pub mod graph;
pub mod network;
pub mod queue;
pub mod scanner;
pub mod solver;

// Re-export main types for internal use
pub use graph::{GraphBuilder, RailGraph};
pub use network::Network;
pub use queue::RingQueue;
pub use scanner::Scanner;
pub use solver::{LayeredBfs, Outcome, QueueItem, SearchStats, SolverConfig};
