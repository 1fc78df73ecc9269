//! LIFO (Last-In-First-Out) replacement policy.

use crate::common::PageId;
use crate::memory::replacer::{FrameArray, ReplaceOutcome, Replacer};

/// Evicts the most recently loaded page once capacity is exhausted.
///
/// The defining, counter-intuitive LIFO behavior: pages loaded while frames
/// were still free stay resident indefinitely, and the top of the load stack
/// churns in place. Useful as a contrast policy in teaching demos.
pub struct LifoReplacer {
    /// The frame slots this policy owns.
    frames: FrameArray,

    /// Resident pages in load order (last = most recent).
    load_stack: Vec<PageId>,
}

impl LifoReplacer {
    /// Create a LIFO replacer with `frame_count` empty frames.
    ///
    /// # Panics
    /// Panics if `frame_count` is 0.
    pub fn new(frame_count: usize) -> Self {
        Self {
            frames: FrameArray::new(frame_count),
            load_stack: Vec::with_capacity(frame_count),
        }
    }
}

impl Replacer for LifoReplacer {
    /// A hit never reorders the stack, same as FIFO.
    fn access(&mut self, _page: PageId) {}

    fn replace(&mut self, page: PageId) -> ReplaceOutcome {
        if self.frames.contains(page) {
            return ReplaceOutcome::Hit;
        }

        if let Some(free) = self.frames.first_free() {
            self.frames.set(free, page);
            self.load_stack.push(page);
            return ReplaceOutcome::FaultNoEviction;
        }

        let victim = self
            .load_stack
            .pop()
            .expect("full frame array with empty load stack");
        let slot = self
            .frames
            .slot_of(victim)
            .expect("eviction victim missing from frame array");

        self.frames.set(slot, page);
        self.load_stack.push(page);

        ReplaceOutcome::FaultEvicted(victim)
    }

    fn frames(&self) -> &[Option<PageId>] {
        self.frames.as_slice()
    }

    fn frame_count(&self) -> usize {
        self.frames.len()
    }
}
