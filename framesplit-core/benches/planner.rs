//! Planner throughput over a synthetic recording

use criterion::{criterion_group, criterion_main, Criterion};
use std::fs::File;

use framesplit_core::fixture;
use framesplit_core::plan::plan;
use framesplit_core::{CancelToken, ProgressCell, SplitConfig};

fn planner_benchmark(c: &mut Criterion) {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("frames.dat");
    fixture::generate_file(&path, 50_000).unwrap();
    let file_size = std::fs::metadata(&path).unwrap().len();

    let config = SplitConfig::builder(fixture::fixture_marker())
        .max_part_size(512 * 1024)
        .build()
        .unwrap();

    c.bench_function("plan_50k_frames", |b| {
        b.iter(|| {
            let mut file = File::open(&path).unwrap();
            plan(
                &mut file,
                file_size,
                &config,
                &ProgressCell::new(),
                &CancelToken::new(),
            )
            .unwrap()
        })
    });
}

criterion_group!(benches, planner_benchmark);
criterion_main!(benches);
