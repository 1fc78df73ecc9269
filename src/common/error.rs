//! Error types for swapsim.

use thiserror::Error;

use crate::common::PageId;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in swapsim.
///
/// By having a single error type, error handling stays consistent across the
/// whole engine. Every variant is a caller-facing configuration or range
/// error; invariant violations inside a policy are bugs and panic instead
/// (see [`Replacer`](crate::memory::replacer::Replacer)).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// `set_algorithm` was given a name outside the known variant set.
    ///
    /// The session is left untouched when this is returned.
    #[error("unknown replacement algorithm: {0:?}")]
    UnknownAlgorithm(String),

    /// A policy was configured with zero frames.
    #[error("frame count must be positive, got {0}")]
    InvalidFrameCount(usize),

    /// A page id outside `[0, table_size)` reached a page-table operation.
    ///
    /// No state is mutated when this is returned.
    #[error("{page} out of range for a table of {table_size} pages")]
    PageOutOfRange {
        /// The offending page id.
        page: PageId,
        /// Number of addressable pages in the current table.
        table_size: usize,
    },
}
