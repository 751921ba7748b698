//! Benchmarks for the per-frame CPU work.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use helix_field::connections;
use helix_field::prelude::*;

fn bench_render_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_frame");
    let config = FieldConfig::default().with_seed(1);

    for width in [800.0_f32, 1500.0, 2560.0] {
        let mut store = ParticleStore::new(config.seed);
        store.initialize(&config, width, 900.0);

        group.bench_with_input(BenchmarkId::new("recording", width as u32), &width, |b, &w| {
            let mut surface = RecordingSurface::new(w, 900.0);
            b.iter(|| black_box(render_frame(&mut store, &mut surface, &config)))
        });

        group.bench_with_input(BenchmarkId::new("canvas", width as u32), &width, |b, &w| {
            let mut canvas = Canvas::new(w, 900.0);
            b.iter(|| black_box(render_frame(&mut store, &mut canvas, &config)))
        });
    }

    group.finish();
}

fn bench_connection_scan(c: &mut Criterion) {
    let config = FieldConfig::default().with_seed(2);
    let mut store = ParticleStore::new(config.seed);
    store.initialize(&config, 1500.0, 900.0);

    c.bench_function("connection_scan_75", |b| {
        b.iter(|| {
            let mut n = 0usize;
            connections::scan(black_box(store.particles()), &config, |_| n += 1);
            black_box(n)
        })
    });
}

fn bench_initialize(c: &mut Criterion) {
    let config = FieldConfig::default();
    let mut store = ParticleStore::new(Some(3));

    c.bench_function("initialize_1920", |b| {
        b.iter(|| store.initialize(&config, black_box(1920.0), 1080.0))
    });
}

criterion_group!(benches, bench_render_frame, bench_connection_scan, bench_initialize);
criterion_main!(benches);
