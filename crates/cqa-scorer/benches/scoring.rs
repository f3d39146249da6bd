//! Continuity Scoring Benchmarks
//!
//! # Running Benchmarks
//! ```bash
//! cargo bench --package cqa-scorer --bench scoring
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use cqa_scorer::ContinuityScorer;

/// Synthetic frames of varying size and content.
fn create_test_frames(count: usize, frame_len: usize) -> Vec<Vec<u8>> {
    (0..count)
        .map(|i| {
            let len = frame_len + (i * 37) % 1024;
            (0..len).map(|j| ((i * 7 + j * 13) % 256) as u8).collect()
        })
        .collect()
}

fn bench_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("score");
    let scorer = ContinuityScorer::new();

    for count in [2usize, 24, 240] {
        let frames = create_test_frames(count, 64 * 1024);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &frames, |b, frames| {
            b.iter(|| scorer.score(black_box(frames)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_score);
criterion_main!(benches);
