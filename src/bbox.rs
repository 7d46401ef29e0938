//! Geographic bounding boxes and the cell-count estimators built on
//! them.

use crate::cell::{cell_to_boundary, cell_to_geo, pentagons};
use crate::constants::M_2PI;
use crate::error::GridError;
use crate::geom::geodesy::{constrain_lng, great_circle_distance_km};
use crate::types::{BBox, CellIndex, GeoCoord};

impl BBox {
  /// Whether the box crosses the antimeridian.
  #[inline]
  #[must_use]
  pub fn is_transmeridian(&self) -> bool {
    self.east < self.west
  }

  /// Center coordinate of the box.
  #[must_use]
  pub fn center(&self) -> GeoCoord {
    let east = if self.is_transmeridian() { self.east + M_2PI } else { self.east };
    GeoCoord {
      lat: (self.north + self.south) / 2.0,
      lon: constrain_lng((east + self.west) / 2.0),
    }
  }

  /// Whether the box contains the point.
  #[must_use]
  pub fn contains(&self, point: &GeoCoord) -> bool {
    if point.lat < self.south || point.lat > self.north {
      return false;
    }
    if self.is_transmeridian() {
      point.lon >= self.west || point.lon <= self.east
    } else {
      point.lon >= self.west && point.lon <= self.east
    }
  }
}

/// Radius of a cell in kilometers, measured from its center to its
/// first boundary vertex.
fn cell_radius_km(cell: CellIndex) -> Result<f64, GridError> {
  let center = cell_to_geo(cell)?;
  let boundary = cell_to_boundary(cell)?;
  Ok(great_circle_distance_km(&center, &boundary.verts[0]))
}

/// Estimated number of cells at `res` needed to fill the bounding box.
/// The pentagon radius is used as the most-distorted (smallest) cell
/// size, so the estimate errs high.
pub fn bbox_cell_estimate(bbox: &BBox, res: i32) -> Result<i64, GridError> {
  // pentagons have the most-shrunken edges at every resolution
  let pentagon = pentagons(res)?[0];
  let pentagon_radius_km = cell_radius_km(pentagon)?;
  // regular hexagon area is 3/2 * sqrt(3) * r^2; shrink by 20% for the
  // chance the box bounds a pentagon exactly
  let pentagon_area_km2 = 0.8 * (2.598_076_211_35 * pentagon_radius_km * pentagon_radius_km);

  let p1 = GeoCoord {
    lat: bbox.north,
    lon: bbox.east,
  };
  let p2 = GeoCoord {
    lat: bbox.south,
    lon: bbox.west,
  };
  let d = great_circle_distance_km(&p1, &p2);
  // diagonal-to-area ratio clamped at 3; beyond that the estimate
  // collapses toward zero
  let a = d * d / f64::min(3.0, ((p1.lon - p2.lon) / (p1.lat - p2.lat)).abs());

  let estimate = (a / pentagon_area_km2).ceil() as i64;
  Ok(estimate.max(1))
}

/// Estimated number of cells at `res` needed to trace the line between
/// the two points.
pub fn line_cell_estimate(origin: &GeoCoord, destination: &GeoCoord, res: i32) -> Result<i64, GridError> {
  let pentagon = pentagons(res)?[0];
  let pentagon_radius_km = cell_radius_km(pentagon)?;

  let dist_km = great_circle_distance_km(origin, destination);
  let estimate = (dist_km / (2.0 * pentagon_radius_km)).ceil() as i64;
  Ok(estimate.max(1))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::geom::geodesy::degs_to_rads;

  fn degs_box(north: f64, south: f64, east: f64, west: f64) -> BBox {
    BBox {
      north: degs_to_rads(north),
      south: degs_to_rads(south),
      east: degs_to_rads(east),
      west: degs_to_rads(west),
    }
  }

  #[test]
  fn center_and_containment() {
    let bbox = degs_box(40.0, 30.0, -100.0, -110.0);
    let center = bbox.center();
    assert!((center.lat - degs_to_rads(35.0)).abs() < 1e-12);
    assert!((center.lon - degs_to_rads(-105.0)).abs() < 1e-12);

    assert!(bbox.contains(&center));
    assert!(!bbox.contains(&GeoCoord {
      lat: degs_to_rads(50.0),
      lon: center.lon,
    }));
    assert!(!bbox.contains(&GeoCoord {
      lat: center.lat,
      lon: degs_to_rads(-95.0),
    }));
  }

  #[test]
  fn transmeridian_box() {
    let bbox = degs_box(10.0, -10.0, -175.0, 175.0);
    assert!(bbox.is_transmeridian());

    assert!(bbox.contains(&GeoCoord {
      lat: 0.0,
      lon: degs_to_rads(179.0),
    }));
    assert!(bbox.contains(&GeoCoord {
      lat: 0.0,
      lon: degs_to_rads(-179.0),
    }));
    assert!(!bbox.contains(&GeoCoord {
      lat: 0.0,
      lon: degs_to_rads(0.0),
    }));

    // the center lands on the antimeridian side
    let center = bbox.center();
    assert!(center.lon.abs() > degs_to_rads(179.0));
  }

  #[test]
  fn estimates_grow_with_resolution() {
    let bbox = degs_box(41.0, 40.0, -73.0, -74.5);
    let coarse = bbox_cell_estimate(&bbox, 3).unwrap();
    let fine = bbox_cell_estimate(&bbox, 6).unwrap();
    assert!(coarse >= 1);
    assert!(fine > coarse, "finer cells mean more of them");
  }

  #[test]
  fn line_estimate_scales_with_distance() {
    let a = GeoCoord {
      lat: degs_to_rads(37.0),
      lon: degs_to_rads(-122.0),
    };
    let b = GeoCoord {
      lat: degs_to_rads(37.1),
      lon: degs_to_rads(-122.1),
    };
    let c = GeoCoord {
      lat: degs_to_rads(38.5),
      lon: degs_to_rads(-120.0),
    };

    let short = line_cell_estimate(&a, &b, 6).unwrap();
    let long = line_cell_estimate(&a, &c, 6).unwrap();
    assert!(short >= 1);
    assert!(long > short);
    assert_eq!(line_cell_estimate(&a, &a, 6).unwrap(), 1);
  }
}
