//! Criterion micro-benchmarks for text parsing.

use criterion::{criterion_group, criterion_main, Criterion};
use glyphgrid_bench::{ragged, rectangle, reference_text};
use glyphgrid_core::{CellId, GridBuilder};
use glyphgrid_parse::{AsciiGrid, Layout, ParseConfig};
use std::hint::black_box;

/// Benchmark: parse the 100x100 reference text into a lattice.
fn bench_parse_reference_10k(c: &mut Criterion) {
    let text = reference_text(42);
    let grid = AsciiGrid::new();

    c.bench_function("parse_reference_10k", |b| {
        b.iter(|| {
            let l = grid.parse(black_box(&text)).unwrap();
            black_box(l.len());
        });
    });
}

/// Benchmark: parse a 316x316 block (~100K cells).
fn bench_parse_stress_100k(c: &mut Criterion) {
    let text = rectangle(316, 316, 7);
    let grid = AsciiGrid::new();

    c.bench_function("parse_stress_100k", |b| {
        b.iter(|| {
            let l = grid.parse(black_box(&text)).unwrap();
            black_box(l.len());
        });
    });
}

/// Benchmark: parse ragged text, where many north lookups miss.
fn bench_parse_ragged(c: &mut Criterion) {
    let text = ragged(200, 200, 3);
    let grid = AsciiGrid::new();

    c.bench_function("parse_ragged_200", |b| {
        b.iter(|| {
            let l = grid.parse(black_box(&text)).unwrap();
            black_box(l.len());
        });
    });
}

/// Benchmark: row splitting and validation alone.
fn bench_layout_scan(c: &mut Criterion) {
    let text = reference_text(1);
    let config = ParseConfig::default();

    c.bench_function("layout_scan_10k", |b| {
        b.iter(|| {
            let layout = Layout::scan(black_box(&text), &config).unwrap();
            black_box(layout.cell_count());
        });
    });
}

/// Builder that allocates nothing, isolating parser overhead.
struct NullBuilder(u32);

impl GridBuilder for NullBuilder {
    type Handle = CellId;
    type Output = u32;

    fn cell(&mut self, _ch: char, _x: usize, _y: usize) -> CellId {
        self.0 += 1;
        CellId(self.0)
    }

    fn east_west(&mut self, east: Option<CellId>, west: Option<CellId>) {
        black_box((east, west));
    }

    fn north_south(&mut self, north: Option<CellId>, south: Option<CellId>) {
        black_box((north, south));
    }

    fn finish(self, _origin: CellId) -> u32 {
        self.0
    }
}

/// Benchmark: drive the parser with a no-op builder.
fn bench_parse_null_builder(c: &mut Criterion) {
    let text = reference_text(5);
    let grid = AsciiGrid::new();

    c.bench_function("parse_null_builder_10k", |b| {
        b.iter(|| {
            let n = grid.parse_with(black_box(&text), NullBuilder(0)).unwrap();
            black_box(n);
        });
    });
}

criterion_group!(
    benches,
    bench_parse_reference_10k,
    bench_parse_stress_100k,
    bench_parse_ragged,
    bench_layout_scan,
    bench_parse_null_builder,
);
criterion_main!(benches);
