//! Error types for the railhop library
//!
//! Every failure a query can hit is one of these variants. An unreachable
//! target is not an error: it is reported as [`crate::Outcome::Impossible`].

use std::collections::TryReserveError;
use thiserror::Error;

/// Main error type for railhop operations
#[derive(Debug, Error)]
pub enum Error {
    /// Reading the input stream failed
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Malformed token or structurally invalid header
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The stream ended while a field was still required
    #[error("Unexpected end of input while reading {expected}")]
    UnexpectedEof { expected: &'static str },

    /// A city number outside the network
    #[error("City {city} is outside the network of {cities} cities")]
    CityOutOfRange { city: u64, cities: u64 },

    /// A queue was created with no room at all
    #[error("Queue capacity must be strictly positive")]
    ZeroCapacity,

    /// Queue growth or CSR storage could not be allocated
    #[error("Failed to allocate storage for {requested} elements")]
    AllocationFailed {
        requested: usize,
        #[source]
        source: TryReserveError,
    },
}

/// Convenience result type for railhop operations
pub type Result<T> = std::result::Result<T, Error>;

/// Reserve exactly `additional` more slots in `buf`, surfacing allocator
/// failure as [`Error::AllocationFailed`] instead of aborting.
pub(crate) fn try_reserve<T>(buf: &mut Vec<T>, additional: usize) -> Result<()> {
    buf.try_reserve_exact(additional)
        .map_err(|source| Error::AllocationFailed {
            requested: additional,
            source,
        })
}

/// Push `item`, growing `buf` fallibly when it is full.
///
/// Growth is amortized by the standard allocator policy, so a list sized from
/// an untrusted count only ever holds memory for elements actually pushed.
pub(crate) fn try_push<T>(buf: &mut Vec<T>, item: T) -> Result<()> {
    if buf.len() == buf.capacity() {
        buf.try_reserve(1).map_err(|source| Error::AllocationFailed {
            requested: buf.len() + 1,
            source,
        })?;
    }
    buf.push(item);
    Ok(())
}
