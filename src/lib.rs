//! # Railhop
//!
//! Minimum railway hop counts between two cities of a network in which some
//! cities also have airports. All airports share one virtual hub, so any two
//! airport cities are two hops apart.
//!
//! ## Quick Start
//!
//! ```rust
//! use railhop::{GraphBuilder, Outcome};
//!
//! # fn main() -> railhop::Result<()> {
//! let mut builder = GraphBuilder::new(4);
//! builder.add_railway(0, 1)?;
//! builder.add_airport(1)?.add_airport(3)?;
//! let graph = builder.build()?;
//!
//! assert_eq!(railhop::solve(&graph, 0, 3)?, Outcome::Hops(3));
//! assert_eq!(railhop::solve(&graph, 0, 2)?, Outcome::Impossible);
//! # Ok(())
//! # }
//! ```
//!
//! Whole queries in their text form go through [`Network`]:
//!
//! ```rust
//! use railhop::{Network, Outcome, SolverConfig};
//!
//! # fn main() -> railhop::Result<()> {
//! let network = Network::from_reader(&b"3 1 0 1 2\n1 2\n"[..])?;
//! assert_eq!(network.solve(SolverConfig::default())?, Outcome::Hops(1));
//! # Ok(())
//! # }
//! ```

pub mod core;

pub use crate::core::error::{Error, Result};
pub use crate::core::solver::solve;
pub use crate::core::{
    GraphBuilder, LayeredBfs, Network, Outcome, QueueItem, RailGraph, RingQueue, Scanner,
    SearchStats, SolverConfig,
};
