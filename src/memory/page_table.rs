//! Page table - residency bookkeeping for the simulated address space.

use crate::common::{Error, FrameId, PageId, Result};

/// Records, per logical page id, whether it is resident and in which frame.
///
/// A pure lookup table: one slot per page id, `None` meaning non-resident.
/// A non-resident page having no frame is encoded by the `Option` rather
/// than tracked as a separate flag, so that property holds by construction.
///
/// All operations are O(1); the only failure mode is a page id outside
/// `[0, table_size)`.
#[derive(Debug, Clone)]
pub struct PageTable {
    /// `slots[page_id]` is the frame holding that page, if resident.
    slots: Vec<Option<FrameId>>,
}

impl PageTable {
    /// Create a table for `table_size` pages, all non-resident.
    pub fn new(table_size: usize) -> Self {
        Self {
            slots: vec![None; table_size],
        }
    }

    /// Number of addressable page ids.
    #[inline]
    pub fn table_size(&self) -> usize {
        self.slots.len()
    }

    /// Number of currently resident pages.
    pub fn resident_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Whether `page` is currently resident.
    ///
    /// # Errors
    /// `Error::PageOutOfRange` if `page` is outside the table.
    pub fn is_loaded(&self, page: PageId) -> Result<bool> {
        self.check_range(page)?;
        Ok(self.slots[page.index()].is_some())
    }

    /// The frame holding `page`, or `None` if non-resident.
    ///
    /// # Errors
    /// `Error::PageOutOfRange` if `page` is outside the table.
    pub fn frame_of(&self, page: PageId) -> Result<Option<FrameId>> {
        self.check_range(page)?;
        Ok(self.slots[page.index()])
    }

    /// Mark `page` resident in `frame`.
    ///
    /// Overwrites any stale mapping unconditionally; the caller guarantees
    /// the page was not already resident elsewhere.
    ///
    /// # Errors
    /// `Error::PageOutOfRange` if `page` is outside the table.
    pub fn load_page(&mut self, page: PageId, frame: FrameId) -> Result<()> {
        self.check_range(page)?;
        self.slots[page.index()] = Some(frame);
        Ok(())
    }

    /// Mark `page` non-resident, clearing its frame record.
    ///
    /// Unloading a page that is already non-resident is a no-op: the table
    /// ends in the requested state either way, and keeping the call total
    /// spares the eviction path a residency pre-check.
    ///
    /// # Errors
    /// `Error::PageOutOfRange` if `page` is outside the table.
    pub fn unload_page(&mut self, page: PageId) -> Result<()> {
        self.check_range(page)?;
        self.slots[page.index()] = None;
        Ok(())
    }

    /// Reset every page to non-resident. Used only on algorithm switch.
    pub fn clear(&mut self) {
        self.slots.fill(None);
    }

    fn check_range(&self, page: PageId) -> Result<()> {
        if page.index() >= self.slots.len() {
            return Err(Error::PageOutOfRange {
                page,
                table_size: self.slots.len(),
            });
        }
        Ok(())
    }
}
