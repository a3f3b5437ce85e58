use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use common::config::PaletteConfig;
use vakio::{
    alg::{find_peaks, max_chroma, PeakDetectionParams, LEFT_HUE},
    create_palette,
};

pub fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("Gamut Boundary");

    for lightness in [0.35, 0.5, 0.65] {
        group.bench_with_input(
            BenchmarkId::new("Max Chroma", lightness),
            &lightness,
            |b, &l| b.iter(|| max_chroma(l, 264.0)),
        );

        group.bench_with_input(
            BenchmarkId::new("Find Peaks", lightness),
            &lightness,
            |b, &l| b.iter(|| find_peaks(l, LEFT_HUE, &PeakDetectionParams::default())),
        );
    }
    group.finish();

    let config = PaletteConfig::default();
    c.bench_function("Create Palette", |b| b.iter(|| create_palette(&config)));
}

criterion_group!(benches, bench);
criterion_main!(benches);
