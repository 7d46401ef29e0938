use criterion::{black_box, criterion_group, criterion_main, Criterion};
use heptile::{cell_to_boundary, cell_to_geo, degs_to_rads, geo_to_cell, k_ring, CellIndex, GeoCoord};

fn fixed_point() -> GeoCoord {
  GeoCoord {
    lat: degs_to_rads(37.7749),
    lon: degs_to_rads(-122.4194),
  }
}

fn bench_geo_to_cell(c: &mut Criterion) {
  let p = fixed_point();
  let mut group = c.benchmark_group("geo_to_cell");
  for res in [0, 5, 10, 15] {
    group.bench_with_input(format!("res_{res}"), &res, |b, &r| {
      b.iter(|| geo_to_cell(black_box(&p), black_box(r)));
    });
  }
  group.finish();
}

fn bench_cell_to_geo(c: &mut Criterion) {
  let res5 = CellIndex(0x85283473fffffff);
  let res10 = CellIndex(0x8a2830828767fff);

  c.benchmark_group("cell_to_geo")
    .bench_function("res_5", |b| b.iter(|| cell_to_geo(black_box(res5))))
    .bench_function("res_10", |b| b.iter(|| cell_to_geo(black_box(res10))));
}

fn bench_cell_to_boundary(c: &mut Criterion) {
  let hex = CellIndex(0x85283473fffffff);
  let pent = heptile::pentagons(5).unwrap()[0];

  c.benchmark_group("cell_to_boundary")
    .bench_function("hexagon", |b| b.iter(|| cell_to_boundary(black_box(hex))))
    .bench_function("pentagon", |b| b.iter(|| cell_to_boundary(black_box(pent))));
}

fn bench_k_ring(c: &mut Criterion) {
  let p = fixed_point();
  let origin = geo_to_cell(&p, 9).unwrap();

  let mut group = c.benchmark_group("k_ring");
  for k in [1, 3, 10] {
    group.bench_with_input(format!("k_{k}"), &k, |b, &k| {
      b.iter(|| k_ring(black_box(origin), black_box(k)));
    });
  }
  group.finish();
}

criterion_group!(
  benches,
  bench_geo_to_cell,
  bench_cell_to_geo,
  bench_cell_to_boundary,
  bench_k_ring
);
criterion_main!(benches);
