//! Frame identifier type.

use std::fmt;

/// Identifies a slot in a policy's frame array.
///
/// A frame id is nothing more than a position: the array is a
/// `Vec<Option<PageId>>` of fixed length `frame_count`, and a `FrameId`
/// indexes it directly as `slots[frame_id.0]`, hence `usize`. Unlike page
/// ids, frame ids never leave the engine except inside a snapshot's
/// slot-ordered `frames` sequence, so there is no range to validate here:
/// the policies only ever produce ids they got from their own array.
///
/// # Example
/// ```
/// use swapsim::FrameId;
///
/// let frame_id = FrameId::new(5);
/// // Indexes the frame array directly: slots[frame_id.0]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameId(pub usize);

impl FrameId {
    /// Create a new FrameId.
    #[inline]
    pub fn new(id: usize) -> Self {
        FrameId(id)
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame({})", self.0)
    }
}
