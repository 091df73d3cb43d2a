//! CLI-specific utilities for railhop
//!
//! This module contains code specific to the command-line interface,
//! separate from the core library functionality.

pub mod report;

pub use report::{render, OutputFormat};
