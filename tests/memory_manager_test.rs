//! End-to-end tests for the memory manager.
//!
//! Each test drives a full session (accesses, faults, switches) through the
//! public API and checks the snapshot the way an embedding layer would.

use swapsim::memory::{Algorithm, MemoryManager};
use swapsim::{Error, PageId, DEFAULT_PAGE_TABLE_SIZE};

fn create_manager(algorithm: Algorithm, frame_count: usize) -> MemoryManager {
    MemoryManager::new(algorithm, frame_count, DEFAULT_PAGE_TABLE_SIZE).unwrap()
}

fn run(manager: &mut MemoryManager, pages: &[u32]) {
    for &p in pages {
        manager.access_page(PageId::new(p)).unwrap();
    }
}

/// FIFO evicts the longest-resident page, oblivious to hits.
#[test]
fn test_fifo_eviction_order() {
    let mut manager = create_manager(Algorithm::Fifo, 2);

    run(&mut manager, &[1, 2]);
    let snapshot = manager.access_page(PageId::new(3)).unwrap();

    // Page 1 (oldest) is gone; 2 survives.
    assert_eq!(snapshot.page_table[1], 0);
    assert_eq!(snapshot.page_table[2], 1);
    assert_eq!(snapshot.page_table[3], 1);
    assert_eq!(snapshot.total_faults, 3);
}

/// LIFO evicts the most recently loaded page; the earliest loads persist.
#[test]
fn test_lifo_eviction_order() {
    let mut manager = create_manager(Algorithm::Lifo, 2);

    run(&mut manager, &[1, 2]);
    let snapshot = manager.access_page(PageId::new(3)).unwrap();

    // Page 2 (most recent load) is gone; 1 survives.
    assert_eq!(snapshot.page_table[1], 1);
    assert_eq!(snapshot.page_table[2], 0);
    assert_eq!(snapshot.page_table[3], 1);
    assert_eq!(snapshot.total_faults, 3);
}

/// Hits leave the order structure, frames, and fault counter untouched
/// under both policies.
#[test]
fn test_hit_does_not_reorder() {
    for algorithm in [Algorithm::Fifo, Algorithm::Lifo] {
        let mut manager = create_manager(algorithm, 2);
        run(&mut manager, &[1, 2]);

        let before = manager.state();
        let snapshot = manager.access_page(PageId::new(1)).unwrap();

        assert!(!snapshot.last_fault, "{algorithm}: hit must not fault");
        assert_eq!(snapshot.total_faults, before.total_faults);
        assert_eq!(snapshot.frames, before.frames);

        // The victim choice proves the internal order did not move.
        let evicted_free = manager.access_page(PageId::new(3)).unwrap();
        let expected_victim = match algorithm {
            Algorithm::Fifo => 1, // oldest, despite the recent hit
            Algorithm::Lifo => 2, // newest load
        };
        assert_eq!(evicted_free.page_table[expected_victim], 0);
    }
}

/// The same reference string produces different survivors per policy.
#[test]
fn test_policies_diverge_on_same_reference_string() {
    let sequence = [1, 2, 3, 4];

    let mut fifo = create_manager(Algorithm::Fifo, 2);
    run(&mut fifo, &sequence);
    assert_eq!(
        fifo.state().resident_pages(),
        vec![PageId::new(3), PageId::new(4)]
    );

    let mut lifo = create_manager(Algorithm::Lifo, 2);
    run(&mut lifo, &sequence);
    assert_eq!(
        lifo.state().resident_pages(),
        vec![PageId::new(1), PageId::new(4)]
    );
}

/// Switching algorithms resets counters and residency no matter the history.
#[test]
fn test_switch_resets_fully() {
    let mut manager = create_manager(Algorithm::Fifo, 2);
    run(&mut manager, &[1, 2, 3, 1, 4, 2, 2, 3]);

    let snapshot = manager.set_algorithm("LIFO", None, None).unwrap();

    assert_eq!(snapshot.algorithm, Algorithm::Lifo);
    assert_eq!(snapshot.total_accesses, 0);
    assert_eq!(snapshot.total_faults, 0);
    assert_eq!(snapshot.fault_rate, 0.0);
    assert!(snapshot.resident_pages().is_empty());
    assert!(snapshot.frames.iter().all(Option::is_none));

    // The fresh policy starts counting from scratch.
    let snapshot = manager.access_page(PageId::new(9)).unwrap();
    assert_eq!(snapshot.total_accesses, 1);
    assert_eq!(snapshot.total_faults, 1);
}

/// A failed switch leaves the session exactly as it was.
#[test]
fn test_invalid_switch_is_atomic() {
    let mut manager = create_manager(Algorithm::Fifo, 2);
    run(&mut manager, &[1, 2, 3]);

    let before = manager.state();

    assert_eq!(
        manager.set_algorithm("OPT", None, None).unwrap_err(),
        Error::UnknownAlgorithm("OPT".to_string())
    );
    assert_eq!(
        manager.set_algorithm("FIFO", Some(0), None).unwrap_err(),
        Error::InvalidFrameCount(0)
    );

    assert_eq!(manager.state(), before);
}

/// Snapshot shape matches the geometry the session was configured with.
#[test]
fn test_snapshot_shape() {
    let mut manager = MemoryManager::new(Algorithm::Fifo, 3, 8).unwrap();
    run(&mut manager, &[0, 5]);

    let snapshot = manager.state();

    assert_eq!(snapshot.page_table.len(), 8);
    assert_eq!(snapshot.frames.len(), 3);
    assert_eq!(snapshot.frame_occupancy.len(), 3);
    assert!(snapshot.page_table.iter().all(|&f| f == 0 || f == 1));
    assert_eq!(snapshot.frame_occupancy, vec![1, 1, 0]);
}

/// Two reads with no mutation in between are identical.
#[test]
fn test_snapshot_round_trip() {
    let mut manager = create_manager(Algorithm::Lifo, 2);
    run(&mut manager, &[1, 2, 3, 1]);

    assert_eq!(manager.state(), manager.state());
}

/// A reference string is accepted on switch and ignored by both policies.
#[test]
fn test_reference_string_passthrough() {
    let mut manager = create_manager(Algorithm::Fifo, 2);
    let seed = [PageId::new(3), PageId::new(4)];

    let snapshot = manager.set_algorithm("LIFO", None, Some(&seed)).unwrap();

    assert!(snapshot.frames.iter().all(Option::is_none));
    assert_eq!(snapshot.total_accesses, 0);
}
