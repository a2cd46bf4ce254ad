//! Criterion benchmarks for the knapsack planner.
//!
//! Measures planning time across item counts and carry capacities. The table
//! is `items × capacity`, so both axes are swept.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package dispatch-knapsack
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use dispatch_core::EquipmentItem;
use dispatch_knapsack::solve;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seed for deterministic item generation.
const BENCHMARK_SEED: u64 = 42;

/// Item counts to benchmark.
const ITEM_COUNTS: &[usize] = &[5, 20, 100];

/// Carry capacities to benchmark.
const CAPACITIES: &[u32] = &[15, 100, 1_000];

/// Generate `count` items with weights in `1..=25` and importances in `0..=10`.
fn generate_items(count: usize, seed: u64) -> Vec<EquipmentItem> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|position| {
            EquipmentItem::new(
                format!("item {position}"),
                rng.gen_range(1..=25),
                rng.gen_range(0..=10),
            )
        })
        .collect()
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("knapsack_solve");

    for &count in ITEM_COUNTS {
        let items = generate_items(count, BENCHMARK_SEED);
        let throughput_size = u64::try_from(count).unwrap_or(u64::MAX);
        group.throughput(Throughput::Elements(throughput_size));

        for &capacity in CAPACITIES {
            group.bench_with_input(
                BenchmarkId::new(format!("items_{count}"), capacity),
                &capacity,
                |b, &cap| b.iter(|| solve(black_box(&items), black_box(cap))),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
