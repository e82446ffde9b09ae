//! Error types for pagesim.

use thiserror::Error;

use crate::common::PageId;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// A pure in-memory simulation has no transient-failure class: every
/// error here is a configuration error, reported synchronously to the
/// caller at the point of the offending operation and never retried.
/// A rejected operation leaves the frame table exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A frame table needs at least one frame to hold a page.
    #[error("invalid frame capacity: must be at least 1")]
    InvalidCapacity,

    /// The referenced page is outside the addressable range configured
    /// for the run.
    #[error("invalid page reference: {0}")]
    InvalidPage(PageId),

    /// The caller-selected policy string was not recognized.
    #[error("unknown replacement policy: {0:?} (expected FIFO, LRU, or LFU)")]
    UnknownPolicy(String),
}
