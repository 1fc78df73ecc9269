//! FIFO (First-In-First-Out) replacement policy.

use std::collections::VecDeque;

use crate::common::PageId;
use crate::memory::replacer::{FrameArray, ReplaceOutcome, Replacer};

/// Evicts the page that has been resident the longest.
///
/// Classic FIFO: the victim is the head of the load-order queue, oblivious
/// to how recently (or how often) the page has been accessed since loading.
pub struct FifoReplacer {
    /// The frame slots this policy owns.
    frames: FrameArray,

    /// Resident pages in load order (front = oldest).
    load_order: VecDeque<PageId>,
}

impl FifoReplacer {
    /// Create a FIFO replacer with `frame_count` empty frames.
    ///
    /// # Panics
    /// Panics if `frame_count` is 0.
    pub fn new(frame_count: usize) -> Self {
        Self {
            frames: FrameArray::new(frame_count),
            load_order: VecDeque::with_capacity(frame_count),
        }
    }
}

impl Replacer for FifoReplacer {
    /// A hit never reorders the queue. This is what makes FIFO FIFO.
    fn access(&mut self, _page: PageId) {}

    fn replace(&mut self, page: PageId) -> ReplaceOutcome {
        if self.frames.contains(page) {
            return ReplaceOutcome::Hit;
        }

        if let Some(free) = self.frames.first_free() {
            self.frames.set(free, page);
            self.load_order.push_back(page);
            return ReplaceOutcome::FaultNoEviction;
        }

        let victim = self
            .load_order
            .pop_front()
            .expect("full frame array with empty load order");
        let slot = self
            .frames
            .slot_of(victim)
            .expect("eviction victim missing from frame array");

        self.frames.set(slot, page);
        self.load_order.push_back(page);

        ReplaceOutcome::FaultEvicted(victim)
    }

    fn frames(&self) -> &[Option<PageId>] {
        self.frames.as_slice()
    }

    fn frame_count(&self) -> usize {
        self.frames.len()
    }
}
