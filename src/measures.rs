//! Cell and edge measurement: averaged per-resolution tables and exact
//! per-cell computation from boundaries.

use crate::cell::{cell_to_boundary, cell_to_geo};
use crate::constants::{EARTH_RADIUS_KM, MAX_EDGE_LENGTH_RADS, MAX_RES};
use crate::edge::{edge_boundary, edge_is_valid};
use crate::error::GridError;
use crate::geom::geodesy::great_circle_distance_rads;
use crate::types::CellIndex;

/// Average hexagon area in square kilometers, by resolution.
#[rustfmt::skip]
static HEX_AREA_KM2: [f64; (MAX_RES + 1) as usize] = [
  4_250_546.848, 607_220.9782, 86_745.854_03, 12_392.264_86,
  1_770.323_552, 252.903_364_5, 36.129_052_1, 5.161_293_2,
  0.737_327_6, 0.105_332_5, 0.015_047_5, 0.002_149_6,
  0.000_307_1, 0.000_043_9, 0.000_006_3, 0.000_000_9,
];

/// Average hexagon edge length in kilometers, by resolution.
#[rustfmt::skip]
static EDGE_LENGTH_KM: [f64; (MAX_RES + 1) as usize] = [
  1_107.712_591, 418.676_005_5, 158.244_655_8, 59.810_857_94,
  22.606_379_4, 8.544_408_276, 3.229_482_772, 1.220_629_759,
  0.461_354_684, 0.174_375_668, 0.065_907_807, 0.024_910_561,
  0.009_415_526, 0.003_559_893, 0.001_348_575, 0.000_509_713,
];

fn check_res(res: i32) -> Result<usize, GridError> {
  if (0..=MAX_RES).contains(&res) {
    Ok(res as usize)
  } else {
    Err(GridError::ResDomain)
  }
}

/// Average hexagon area at a resolution, in km².
pub fn hex_area_km2(res: i32) -> Result<f64, GridError> {
  Ok(HEX_AREA_KM2[check_res(res)?])
}

/// Average hexagon area at a resolution, in m².
pub fn hex_area_m2(res: i32) -> Result<f64, GridError> {
  Ok(hex_area_km2(res)? * 1_000_000.0)
}

/// Average hexagon edge length at a resolution, in kilometers.
pub fn edge_length_km(res: i32) -> Result<f64, GridError> {
  Ok(EDGE_LENGTH_KM[check_res(res)?])
}

/// Average hexagon edge length at a resolution, in meters.
pub fn edge_length_m(res: i32) -> Result<f64, GridError> {
  Ok(edge_length_km(res)? * 1000.0)
}

/// Upper bound on the edge length at a resolution, in radians.
pub fn max_edge_length_rads(res: i32) -> Result<f64, GridError> {
  Ok(MAX_EDGE_LENGTH_RADS[check_res(res)?])
}

/// Surface area in radians² of the spherical triangle with the given
/// side lengths, by L'Huilier's theorem.
fn triangle_edge_lengths_to_area(a: f64, b: f64, c: f64) -> f64 {
  let mut s = (a + b + c) / 2.0;

  let a = (s - a) / 2.0;
  let b = (s - b) / 2.0;
  let c = (s - c) / 2.0;
  s /= 2.0;

  4.0 * (s.tan() * a.tan() * b.tan() * c.tan()).sqrt().atan()
}

/// Exact area of a cell in radians², summing the spherical triangles
/// between the center and consecutive boundary vertices.
pub fn cell_area_rads2(cell: CellIndex) -> Result<f64, GridError> {
  let center = cell_to_geo(cell)?;
  let boundary = cell_to_boundary(cell)?;

  let mut area = 0.0;
  for i in 0..boundary.num_verts {
    let a = &boundary.verts[i];
    let b = &boundary.verts[(i + 1) % boundary.num_verts];
    area += triangle_edge_lengths_to_area(
      great_circle_distance_rads(a, b),
      great_circle_distance_rads(b, &center),
      great_circle_distance_rads(&center, a),
    );
  }

  Ok(area)
}

/// Exact area of a cell in km².
pub fn cell_area_km2(cell: CellIndex) -> Result<f64, GridError> {
  Ok(cell_area_rads2(cell)? * EARTH_RADIUS_KM * EARTH_RADIUS_KM)
}

/// Exact area of a cell in m².
pub fn cell_area_m2(cell: CellIndex) -> Result<f64, GridError> {
  Ok(cell_area_km2(cell)? * 1_000_000.0)
}

/// Exact length of a uni-directional edge in radians, summed over its
/// boundary segments.
pub fn exact_edge_length_rads(edge: CellIndex) -> Result<f64, GridError> {
  if !edge_is_valid(edge) {
    return Err(GridError::EdgeInvalid);
  }
  let boundary = edge_boundary(edge)?;

  let mut length = 0.0;
  for i in 0..boundary.num_verts.saturating_sub(1) {
    length += great_circle_distance_rads(&boundary.verts[i], &boundary.verts[i + 1]);
  }
  Ok(length)
}

/// Exact length of a uni-directional edge in kilometers.
pub fn exact_edge_length_km(edge: CellIndex) -> Result<f64, GridError> {
  Ok(exact_edge_length_rads(edge)? * EARTH_RADIUS_KM)
}

/// Exact length of a uni-directional edge in meters.
pub fn exact_edge_length_m(edge: CellIndex) -> Result<f64, GridError> {
  Ok(exact_edge_length_km(edge)? * 1000.0)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::cell::geo_to_cell;
  use crate::edge::edges_from_cell;
  use crate::geom::geodesy::degs_to_rads;
  use crate::types::GeoCoord;

  #[test]
  fn tables_decrease_with_resolution() {
    for res in 1..=MAX_RES {
      assert!(hex_area_km2(res).unwrap() < hex_area_km2(res - 1).unwrap());
      assert!(edge_length_km(res).unwrap() < edge_length_km(res - 1).unwrap());
      assert!(max_edge_length_rads(res).unwrap() < max_edge_length_rads(res - 1).unwrap());
    }
    assert!(hex_area_km2(16).is_err());
    assert!(edge_length_m(-1).is_err());
  }

  #[test]
  fn unit_scaling() {
    assert!((hex_area_m2(10).unwrap() - hex_area_km2(10).unwrap() * 1e6).abs() < 1e-9);
    assert!((edge_length_m(10).unwrap() - edge_length_km(10).unwrap() * 1e3).abs() < 1e-12);
  }

  #[test]
  fn exact_cell_area_tracks_average() {
    let cell = geo_to_cell(
      &GeoCoord {
        lat: degs_to_rads(10.0),
        lon: degs_to_rads(20.0),
      },
      5,
    )
    .unwrap();

    let area = cell_area_km2(cell).unwrap();
    let avg = hex_area_km2(5).unwrap();
    assert!(area > avg * 0.5 && area < avg * 2.0, "exact {area} vs avg {avg}");
    assert!(cell_area_rads2(cell).unwrap() > 0.0);
  }

  #[test]
  fn exact_edge_length_tracks_average() {
    let cell = geo_to_cell(
      &GeoCoord {
        lat: degs_to_rads(10.0),
        lon: degs_to_rads(20.0),
      },
      6,
    )
    .unwrap();

    for edge in edges_from_cell(cell).unwrap() {
      let len = exact_edge_length_km(edge).unwrap();
      let avg = edge_length_km(6).unwrap();
      assert!(len > avg * 0.4 && len < avg * 2.0, "exact {len} vs avg {avg}");
      assert!(exact_edge_length_rads(edge).unwrap() <= max_edge_length_rads(6).unwrap());
    }
  }
}
