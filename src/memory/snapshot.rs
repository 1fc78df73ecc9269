//! Externally visible state snapshots.

use std::fmt;

use crate::common::PageId;
use crate::memory::replacer::Algorithm;

/// A point-in-time copy of the simulation state.
///
/// This is a value copy, never an alias: mutating the manager after taking a
/// snapshot cannot be observed through it. It is the only thing the engine
/// hands to the outside (a rendering layer would serialize it as-is).
///
/// # Field shapes
/// - `page_table[i]` is `1` when page `i` is resident, `0` otherwise, for
///   every id in `[0, table_size)`.
/// - `frames` preserves slot order and has length `frame_count`.
/// - `frame_occupancy[i]` is `1` iff `i` is less than the number of occupied
///   slots. This is a positional count, not a map of which specific frame is
///   full: with pages in slots 0 and 2, occupancy reads `[1, 1, 0, ...]`.
///   Surprising, but it is the contract the rendering layer consumes, so it
///   is preserved literally.
#[derive(Debug, Clone, PartialEq)]
pub struct StateSnapshot {
    /// Active replacement algorithm.
    pub algorithm: Algorithm,

    /// Residency flag (0|1) per page id.
    pub page_table: Vec<u8>,

    /// The frame array, slot order preserved.
    pub frames: Vec<Option<PageId>>,

    /// Positional occupancy indicator (0|1) per frame slot.
    pub frame_occupancy: Vec<u8>,

    /// Whether the most recent access faulted.
    pub last_fault: bool,

    /// Accesses since the last algorithm switch.
    pub total_accesses: u64,

    /// Faults since the last algorithm switch.
    pub total_faults: u64,

    /// `100 * total_faults / total_accesses`, rounded to two decimal places.
    /// Zero when no accesses have happened.
    pub fault_rate: f64,
}

impl StateSnapshot {
    /// Fault rate as a percentage rounded to two decimal places.
    ///
    /// Shared by the manager so the stored `fault_rate` and any recomputation
    /// agree bit-for-bit.
    pub fn compute_fault_rate(total_faults: u64, total_accesses: u64) -> f64 {
        if total_accesses == 0 {
            0.0
        } else {
            let raw = (total_faults as f64 / total_accesses as f64) * 100.0;
            (raw * 100.0).round() / 100.0
        }
    }

    /// Page ids currently resident, in id order.
    pub fn resident_pages(&self) -> Vec<PageId> {
        self.page_table
            .iter()
            .enumerate()
            .filter(|(_, &flag)| flag == 1)
            .map(|(i, _)| PageId::new(i as u32))
            .collect()
    }
}

impl fmt::Display for StateSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Snapshot {{ algorithm: {}, accesses: {}, faults: {}, fault_rate: {:.2}% }}",
            self.algorithm, self.total_accesses, self.total_faults, self.fault_rate
        )
    }
}
