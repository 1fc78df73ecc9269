//! Configuration defaults for swapsim.
//!
//! Both values here are defaults only. [`MemoryManager`](crate::memory::MemoryManager)
//! takes `table_size` and `frame_count` as constructor parameters; the layer
//! embedding the simulator decides the real values.

/// Default number of addressable page ids.
///
/// Page ids range over `[0, table_size)`. 16 is small enough that a UI can
/// render the whole table, large enough to demonstrate eviction churn.
pub const DEFAULT_PAGE_TABLE_SIZE: usize = 16;

/// Default number of physical frames.
///
/// With 16 pages and 4 frames, a quarter of the address space is resident
/// at any time, so reference strings a few pages long already force
/// evictions.
pub const DEFAULT_FRAME_COUNT: usize = 4;
