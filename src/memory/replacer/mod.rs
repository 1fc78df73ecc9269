//! Eviction policy implementations (replacers).
//!
//! A replacer owns the fixed frame array plus whatever order structure its
//! policy needs to pick a victim. The [`Replacer`] trait is the seam the
//! [`MemoryManager`](crate::memory::MemoryManager) talks through, so a new
//! policy (e.g. a recency-based one) can be added here without touching the
//! manager.
//!
//! Currently implements:
//! - [`FifoReplacer`] - evicts the longest-resident page
//! - [`LifoReplacer`] - evicts the most recently loaded page

mod fifo;
mod frames;
mod lifo;

use std::fmt;
use std::str::FromStr;

use crate::common::{Error, PageId, Result};

pub use fifo::FifoReplacer;
pub use frames::FrameArray;
pub use lifo::LifoReplacer;

/// The closed set of known replacement algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Evicts the page that has been resident the longest.
    Fifo,
    /// Evicts the most recently loaded page once capacity is exhausted.
    Lifo,
}

impl Algorithm {
    /// Parse an algorithm name, case-insensitively.
    ///
    /// # Errors
    /// `Error::UnknownAlgorithm` for any name outside the known set.
    pub fn parse(name: &str) -> Result<Self> {
        match name.to_ascii_uppercase().as_str() {
            "FIFO" => Ok(Algorithm::Fifo),
            "LIFO" => Ok(Algorithm::Lifo),
            _ => Err(Error::UnknownAlgorithm(name.to_string())),
        }
    }

    /// Canonical (upper-case) name of the algorithm.
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Fifo => "FIFO",
            Algorithm::Lifo => "LIFO",
        }
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Algorithm::parse(s)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a [`Replacer::replace`] call.
///
/// The three cases are tagged explicitly rather than collapsed into an
/// `Option<Option<PageId>>`, so call sites cannot confuse "no eviction
/// needed" with "already resident".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplaceOutcome {
    /// The page already occupied a frame. Defensive: in the intended flow
    /// hits are handled by [`Replacer::access`] and this is unreachable.
    Hit,
    /// A free frame existed; the page was placed without evicting anyone.
    FaultNoEviction,
    /// A resident page was evicted to make room.
    FaultEvicted(PageId),
}

/// Common contract for every eviction policy.
///
/// The policy exclusively owns the frame array; the manager observes it only
/// through [`frames`](Replacer::frames).
pub trait Replacer {
    /// Record a hit on an already-resident page.
    ///
    /// FIFO and LIFO ignore this entirely; neither reorders on access,
    /// which is exactly what separates them from the LRU family. The hook
    /// exists so a recency-based policy can slot in later.
    fn access(&mut self, page: PageId);

    /// Place a faulted (non-resident) page into a frame.
    ///
    /// Occupies the lowest-index free slot if one exists; otherwise evicts
    /// the policy's victim and reuses its slot.
    ///
    /// # Panics
    /// Panics if the internal order structure disagrees with the frame array
    /// (victim missing from the slots, or a full array with an empty order
    /// structure). That is a policy bug, not caller input.
    fn replace(&mut self, page: PageId) -> ReplaceOutcome;

    /// Read-only snapshot of the frame array, slot order preserved.
    fn frames(&self) -> &[Option<PageId>];

    /// Number of frame slots this policy was configured with.
    fn frame_count(&self) -> usize;
}

/// Construct a replacer for `algorithm` with `frame_count` frames.
///
/// Mirrors the single construction point the manager uses on every algorithm
/// switch. `reference_string` is accepted for policies that pre-seed from a
/// known access sequence; neither FIFO nor LIFO does, so both ignore it.
///
/// # Errors
/// `Error::InvalidFrameCount` if `frame_count` is 0.
pub fn build_replacer(
    algorithm: Algorithm,
    frame_count: usize,
    reference_string: Option<&[PageId]>,
) -> Result<Box<dyn Replacer + Send>> {
    if frame_count == 0 {
        return Err(Error::InvalidFrameCount(frame_count));
    }

    let _ = reference_string; // unused by both current policies

    Ok(match algorithm {
        Algorithm::Fifo => Box::new(FifoReplacer::new(frame_count)),
        Algorithm::Lifo => Box::new(LifoReplacer::new(frame_count)),
    })
}
