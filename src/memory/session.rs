//! Shared single-session handle.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::common::{PageId, Result};
use crate::memory::manager::MemoryManager;
use crate::memory::snapshot::StateSnapshot;

/// A cloneable, thread-safe handle to one simulation session.
///
/// There is exactly one shared mutable session per logical simulation
/// instance, guarded by a single lock: each operation takes the lock for its
/// whole duration, so concurrent callers are fully serialized. Every
/// operation is O(frame_count) and never blocks internally, so holding the
/// lock across the call is cheap.
///
/// This is the explicit replacement for a module-level singleton: whoever
/// embeds the engine (e.g. a request-handler layer) constructs one
/// `SharedSession` and clones the handle wherever it is needed.
///
/// # Example
/// ```
/// use swapsim::memory::{Algorithm, MemoryManager, SharedSession};
/// use swapsim::PageId;
///
/// let manager = MemoryManager::new(Algorithm::Fifo, 4, 16).unwrap();
/// let session = SharedSession::new(manager);
///
/// let snapshot = session.access_page(PageId::new(3)).unwrap();
/// assert!(snapshot.last_fault);
/// ```
#[derive(Clone)]
pub struct SharedSession {
    inner: Arc<Mutex<MemoryManager>>,
}

impl SharedSession {
    /// Wrap a manager in a shared handle.
    pub fn new(manager: MemoryManager) -> Self {
        Self {
            inner: Arc::new(Mutex::new(manager)),
        }
    }

    /// Process one page access. See [`MemoryManager::access_page`].
    ///
    /// # Errors
    /// `Error::PageOutOfRange` for an id outside the table.
    pub fn access_page(&self, page: PageId) -> Result<StateSnapshot> {
        self.inner.lock().access_page(page)
    }

    /// Switch algorithms, fully resetting the session.
    /// See [`MemoryManager::set_algorithm`].
    ///
    /// # Errors
    /// - `Error::UnknownAlgorithm` for a name outside the known set
    /// - `Error::InvalidFrameCount` for a zero frame count
    pub fn set_algorithm(
        &self,
        name: &str,
        frame_count: Option<usize>,
        reference_string: Option<&[PageId]>,
    ) -> Result<StateSnapshot> {
        self.inner
            .lock()
            .set_algorithm(name, frame_count, reference_string)
    }

    /// Snapshot the current state without mutating anything.
    pub fn state(&self) -> StateSnapshot {
        self.inner.lock().state()
    }
}
