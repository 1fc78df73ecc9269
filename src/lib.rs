//! swapsim - a virtual-memory page-replacement simulator with
//! runtime-swappable eviction policies.
//!
//! # Architecture
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                          swapsim                              │
//! ├───────────────────────────────────────────────────────────────┤
//! │  ┌────────────────────────────────────────────────────────┐   │
//! │  │          SharedSession (memory/session)                │   │
//! │  │     one lock, one session - the embedding boundary     │   │
//! │  └────────────────────────────────────────────────────────┘   │
//! │                             ↓                                 │
//! │  ┌────────────────────────────────────────────────────────┐   │
//! │  │          MemoryManager (memory/manager)                │   │
//! │  │   access routing + fault counters + StateSnapshot      │   │
//! │  └────────────────────────────────────────────────────────┘   │
//! │                ↓                          ↓                   │
//! │  ┌──────────────────────┐  ┌────────────────────────────┐    │
//! │  │      PageTable       │  │  Replacer [Runtime Swap]   │    │
//! │  │  page id → frame?    │  │  ┌──────────────────────┐  │    │
//! │  │                      │  │  │ Policies: FIFO | LIFO│  │    │
//! │  └──────────────────────┘  │  └──────────────────────┘  │    │
//! │                            │   frame array + load order │    │
//! │                            └────────────────────────────┘    │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FrameId, Error, config)
//! - [`memory`] - The replacement engine: page table, policies, manager
//!
//! # Quick Start
//! ```
//! use swapsim::memory::{Algorithm, MemoryManager};
//! use swapsim::PageId;
//!
//! let mut manager = MemoryManager::new(Algorithm::Fifo, 2, 16).unwrap();
//!
//! manager.access_page(PageId::new(1)).unwrap();
//! manager.access_page(PageId::new(2)).unwrap();
//! let snapshot = manager.access_page(PageId::new(3)).unwrap(); // evicts 1
//!
//! assert_eq!(snapshot.total_faults, 3);
//! assert_eq!(snapshot.frames[0], Some(PageId::new(3)));
//! ```
//!
//! The HTTP/JSON layer that would sit on top is deliberately absent; it
//! talks to [`memory::SharedSession`] and renders [`memory::StateSnapshot`].

pub mod common;
pub mod memory;

// Re-export commonly used items at crate root for convenience
pub use common::config::{DEFAULT_FRAME_COUNT, DEFAULT_PAGE_TABLE_SIZE};
pub use common::{Error, FrameId, PageId, Result};

pub use memory::{Algorithm, MemoryManager, SharedSession, StateSnapshot};
