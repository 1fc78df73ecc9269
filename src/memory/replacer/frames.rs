//! Fixed-size frame slot array shared by all eviction policies.

use crate::common::{FrameId, PageId};

/// The physical frame slots owned by a replacement policy.
///
/// A fixed-length sequence of slots, each holding a resident page or empty.
/// Every policy variant manages the same slot array and differs only in its
/// order structure, so the slot bookkeeping lives here once.
///
/// # Invariants
/// - No page id appears in more than one slot.
/// - The number of occupied slots never exceeds the length.
///
/// All lookups resolve to the lowest matching index. With the invariant above
/// there is never more than one match; the lowest-index rule just makes the
/// tie-break definite rather than dependent on iteration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameArray {
    slots: Vec<Option<PageId>>,
}

impl FrameArray {
    /// Create an all-empty array of `frame_count` slots.
    ///
    /// # Panics
    /// Panics if `frame_count` is 0. The zero case is rejected as a
    /// configuration error by [`build_replacer`](super::build_replacer)
    /// before any policy is constructed.
    pub fn new(frame_count: usize) -> Self {
        assert!(frame_count > 0, "frame_count must be > 0");
        Self {
            slots: vec![None; frame_count],
        }
    }

    /// Number of slots (occupied or not).
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when no slot holds a page.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Number of slots currently holding a page.
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Whether `page` currently occupies some slot.
    pub fn contains(&self, page: PageId) -> bool {
        self.slots.contains(&Some(page))
    }

    /// Lowest-index empty slot, if any.
    pub fn first_free(&self) -> Option<FrameId> {
        self.slots
            .iter()
            .position(Option::is_none)
            .map(FrameId::new)
    }

    /// Lowest-index slot holding `page`, if resident.
    pub fn slot_of(&self, page: PageId) -> Option<FrameId> {
        self.slots
            .iter()
            .position(|s| *s == Some(page))
            .map(FrameId::new)
    }

    /// Put `page` into `frame`, overwriting whatever the slot held.
    pub fn set(&mut self, frame: FrameId, page: PageId) {
        self.slots[frame.0] = Some(page);
    }

    /// Read-only view of the slots in frame order.
    #[inline]
    pub fn as_slice(&self) -> &[Option<PageId>] {
        &self.slots
    }
}
