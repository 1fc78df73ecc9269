//! Memory manager - the replacement engine's orchestrator.
//!
//! The [`MemoryManager`] owns one [`PageTable`] and one active
//! [`Replacer`](crate::memory::replacer::Replacer) at a time, routes every
//! page access between them, and keeps the fault counters the snapshot
//! reports.

use log::{debug, warn};

use crate::common::{FrameId, PageId, Result};
use crate::memory::page_table::PageTable;
use crate::memory::replacer::{build_replacer, Algorithm, ReplaceOutcome, Replacer};
use crate::memory::snapshot::StateSnapshot;

/// One page-replacement simulation session.
///
/// # Architecture
/// ```text
/// ┌───────────────────────────────────────────────────────────┐
/// │                     MemoryManager                         │
/// │  ┌───────────────┐      ┌─────────────────────────────┐   │
/// │  │  page_table   │      │   replacer: Box<dyn ...>    │   │
/// │  │ PageId → Fid? │ ◀──▶ │  frames + order structure   │   │
/// │  └───────────────┘      └─────────────────────────────┘   │
/// │     last_fault · total_accesses · total_faults            │
/// └───────────────────────────────────────────────────────────┘
/// ```
///
/// Control flow per access: consult the page table for residency; on a miss,
/// delegate victim selection and frame assignment to the replacer, then sync
/// the page table; return a [`StateSnapshot`].
///
/// The manager is single-threaded by design. Share it across threads through
/// [`SharedSession`](crate::memory::SharedSession), which serializes callers
/// behind one lock.
pub struct MemoryManager {
    /// Active algorithm, kept for snapshots and reconstruction.
    algorithm: Algorithm,

    /// Number of frames the active replacer was built with.
    frame_count: usize,

    /// Residency map for the whole address space.
    page_table: PageTable,

    /// The active eviction policy; owns the frame array.
    replacer: Box<dyn Replacer + Send>,

    /// Whether the most recent access faulted.
    last_fault: bool,

    /// Accesses since construction or the last algorithm switch.
    total_accesses: u64,

    /// Faults since construction or the last algorithm switch.
    total_faults: u64,
}

impl MemoryManager {
    /// Create a session with the given policy and geometry.
    ///
    /// `table_size` and `frame_count` are injected by the embedding layer;
    /// [`config`](crate::common::config) provides defaults but nothing here
    /// assumes them.
    ///
    /// # Errors
    /// `Error::InvalidFrameCount` if `frame_count` is 0.
    pub fn new(algorithm: Algorithm, frame_count: usize, table_size: usize) -> Result<Self> {
        let replacer = build_replacer(algorithm, frame_count, None)?;

        Ok(Self {
            algorithm,
            frame_count,
            page_table: PageTable::new(table_size),
            replacer,
            last_fault: false,
            total_accesses: 0,
            total_faults: 0,
        })
    }

    // ========================================================================
    // Public API: Accesses
    // ========================================================================

    /// Process one access to `page` and return the resulting snapshot.
    ///
    /// On a hit the replacer is notified but (for FIFO/LIFO) nothing moves.
    /// On a fault the replacer picks a frame, evicting if it must, and the
    /// page table is updated to match.
    ///
    /// # Errors
    /// `Error::PageOutOfRange` if `page` is outside the table. The check runs
    /// before any counter is touched, so a rejected access mutates nothing.
    pub fn access_page(&mut self, page: PageId) -> Result<StateSnapshot> {
        let loaded = self.page_table.is_loaded(page)?;

        self.total_accesses += 1;
        self.last_fault = false;

        if loaded {
            self.handle_hit(page);
        } else {
            self.handle_fault(page)?;
        }

        Ok(self.state())
    }

    /// Switch to algorithm `name`, fully resetting the session.
    ///
    /// The new replacer is built before anything is touched, so an unknown
    /// name or a bad frame count leaves the existing state exactly as it
    /// was. On success the page table is cleared and all counters zeroed,
    /// a full reset, never an incremental migration of resident pages.
    ///
    /// `frame_count` falls back to the current count when `None`.
    /// `reference_string` is forwarded to policies that pre-seed; FIFO and
    /// LIFO ignore it.
    ///
    /// # Errors
    /// - `Error::UnknownAlgorithm` for a name outside the known set
    /// - `Error::InvalidFrameCount` for a zero frame count
    pub fn set_algorithm(
        &mut self,
        name: &str,
        frame_count: Option<usize>,
        reference_string: Option<&[PageId]>,
    ) -> Result<StateSnapshot> {
        let algorithm = Algorithm::parse(name)?;
        let frame_count = frame_count.unwrap_or(self.frame_count);
        let replacer = build_replacer(algorithm, frame_count, reference_string)?;

        debug!(
            "switching to {} with {} frames (was {} with {})",
            algorithm, frame_count, self.algorithm, self.frame_count
        );

        self.algorithm = algorithm;
        self.frame_count = frame_count;
        self.replacer = replacer;
        self.page_table.clear();
        self.last_fault = false;
        self.total_accesses = 0;
        self.total_faults = 0;

        Ok(self.state())
    }

    // ========================================================================
    // Public API: State and info
    // ========================================================================

    /// Take a snapshot of the current state. Pure read.
    pub fn state(&self) -> StateSnapshot {
        let page_table: Vec<u8> = (0..self.page_table.table_size())
            .map(|i| {
                // In-range by construction of the iterator.
                match self.page_table.frame_of(PageId::new(i as u32)) {
                    Ok(Some(_)) => 1,
                    _ => 0,
                }
            })
            .collect();

        let frames = self.replacer.frames().to_vec();
        let occupied = frames.iter().filter(|s| s.is_some()).count();
        let frame_occupancy: Vec<u8> = (0..self.frame_count)
            .map(|i| u8::from(i < occupied))
            .collect();

        StateSnapshot {
            algorithm: self.algorithm,
            page_table,
            frames,
            frame_occupancy,
            last_fault: self.last_fault,
            total_accesses: self.total_accesses,
            total_faults: self.total_faults,
            fault_rate: StateSnapshot::compute_fault_rate(self.total_faults, self.total_accesses),
        }
    }

    /// The active algorithm.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Number of frames in the active policy.
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Number of addressable page ids.
    pub fn table_size(&self) -> usize {
        self.page_table.table_size()
    }

    /// Whether the most recent access faulted.
    pub fn last_fault(&self) -> bool {
        self.last_fault
    }

    /// Accesses since the last reset.
    pub fn total_accesses(&self) -> u64 {
        self.total_accesses
    }

    /// Faults since the last reset.
    pub fn total_faults(&self) -> u64 {
        self.total_faults
    }

    /// Fault rate as a percentage, two decimal places.
    pub fn fault_rate(&self) -> f64 {
        StateSnapshot::compute_fault_rate(self.total_faults, self.total_accesses)
    }

    // ========================================================================
    // Internal: Hit and fault paths
    // ========================================================================

    /// Handle a hit: notify the policy, touch nothing else.
    fn handle_hit(&mut self, page: PageId) {
        self.replacer.access(page);
        debug!("{} hit", page);
    }

    /// Handle a fault: place the page, evicting a victim if needed, and
    /// bring the page table back in sync with the frame array.
    fn handle_fault(&mut self, page: PageId) -> Result<()> {
        self.last_fault = true;
        self.total_faults += 1;

        match self.replacer.replace(page) {
            ReplaceOutcome::Hit => {
                // The table said non-resident but the replacer disagrees.
                // Fall through to re-sync the table below.
                warn!("{} resident in frames but absent from page table", page);
            }
            ReplaceOutcome::FaultNoEviction => {
                debug!("{} fault, free frame used", page);
            }
            ReplaceOutcome::FaultEvicted(victim) => {
                debug!("{} fault, evicted {}", page, victim);
                self.page_table.unload_page(victim)?;
            }
        }

        // First (lowest-index) slot holding the page; duplicates cannot
        // occur at steady state but the tie-break is definite regardless.
        let slot = self
            .replacer
            .frames()
            .iter()
            .position(|s| *s == Some(page))
            .expect("faulted page missing from frame array after replace");

        self.page_table.load_page(page, FrameId::new(slot))?;

        Ok(())
    }
}
