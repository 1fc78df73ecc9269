//! Replacement engine throughput.
//!
//! Measures full access_page round trips (residency lookup, replace,
//! snapshot) under both policies, on a cyclic reference string that is all
//! faults and a repeated one that is mostly hits.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use swapsim::memory::{Algorithm, MemoryManager};
use swapsim::PageId;

const TABLE_SIZE: usize = 64;
const FRAME_COUNT: usize = 8;

fn bench_accesses(c: &mut Criterion) {
    let mut group = c.benchmark_group("access_page");

    for algorithm in [Algorithm::Fifo, Algorithm::Lifo] {
        // Cycling through 2x the frame count faults on every access.
        group.bench_function(format!("{algorithm}/all_faults"), |b| {
            b.iter(|| {
                let mut manager =
                    MemoryManager::new(algorithm, FRAME_COUNT, TABLE_SIZE).unwrap();
                for i in 0..1000u32 {
                    let page = PageId::new(i % (2 * FRAME_COUNT as u32));
                    black_box(manager.access_page(page).unwrap());
                }
            });
        });

        // A working set that fits in the frames is all hits after warmup.
        group.bench_function(format!("{algorithm}/mostly_hits"), |b| {
            b.iter(|| {
                let mut manager =
                    MemoryManager::new(algorithm, FRAME_COUNT, TABLE_SIZE).unwrap();
                for i in 0..1000u32 {
                    let page = PageId::new(i % FRAME_COUNT as u32);
                    black_box(manager.access_page(page).unwrap());
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_accesses);
criterion_main!(benches);
