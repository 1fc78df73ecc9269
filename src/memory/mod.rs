//! The replacement engine.
//!
//! Everything that decides whether an access hits or faults, who gets
//! evicted, and what the outside world sees afterwards.
//!
//! # Components
//! - [`MemoryManager`] - orchestrates table + policy, counts faults
//! - [`PageTable`] - residency map for the simulated address space
//! - [`replacer`] - eviction policy implementations
//! - [`StateSnapshot`] - the externally visible value copy of the state
//! - [`SharedSession`] - single-lock shared handle for embedding layers

mod manager;
mod page_table;
pub mod replacer;
mod session;
mod snapshot;

pub use manager::MemoryManager;
pub use page_table::PageTable;
pub use replacer::{Algorithm, ReplaceOutcome, Replacer};
pub use session::SharedSession;
pub use snapshot::StateSnapshot;
