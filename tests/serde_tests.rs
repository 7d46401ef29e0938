//! Serde round trips for the public value types (feature-gated).
#![cfg(feature = "serde")]

use heptile::{cell_to_boundary, degs_to_rads, geo_to_cell, CellIndex, CoordIJK, Direction, GeoCoord};

#[test]
fn cell_index_round_trips_as_u64() {
  let cell = CellIndex(0x8928308280fffff);
  let json = serde_json::to_string(&cell).unwrap();
  assert_eq!(json, "617700169958293503");
  assert_eq!(serde_json::from_str::<CellIndex>(&json).unwrap(), cell);
}

#[test]
fn geo_coord_round_trips() {
  let p = GeoCoord {
    lat: degs_to_rads(35.68),
    lon: degs_to_rads(139.76),
  };
  let json = serde_json::to_string(&p).unwrap();
  let back: GeoCoord = serde_json::from_str(&json).unwrap();
  assert!((p.lat - back.lat).abs() < 1e-15);
  assert!((p.lon - back.lon).abs() < 1e-15);
}

#[test]
fn direction_serializes_as_integer() {
  let json = serde_json::to_string(&Direction::Ik).unwrap();
  assert_eq!(json, "5");
  assert_eq!(serde_json::from_str::<Direction>("5").unwrap(), Direction::Ik);
}

#[test]
fn boundary_round_trips() {
  let cell = geo_to_cell(
    &GeoCoord {
      lat: degs_to_rads(35.68),
      lon: degs_to_rads(139.76),
    },
    7,
  )
  .unwrap();
  let boundary = cell_to_boundary(cell).unwrap();
  let json = serde_json::to_string(&boundary).unwrap();
  let back: heptile::GeoBoundary = serde_json::from_str(&json).unwrap();
  assert_eq!(boundary, back);
}

#[test]
fn coord_ijk_round_trips() {
  let c = CoordIJK { i: 3, j: 0, k: 1 };
  let json = serde_json::to_string(&c).unwrap();
  assert_eq!(serde_json::from_str::<CoordIJK>(&json).unwrap(), c);
}
