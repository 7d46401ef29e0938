//! Conversions between cell indexes, face addresses and geographic
//! coordinates.

use crate::base_cells::{
  base_cell_is_cw_offset, base_cell_to_face_ijk, face_ijk_to_base_cell, face_ijk_to_base_cell_ccw_rot60,
  is_base_cell_pentagon, MAX_FACE_COORD,
};
use crate::cell::codec::make_cell;
use crate::cell::res_is_class_iii;
use crate::constants::{EPSILON_RAD, MAX_RES, M_PI_2, NUM_HEX_VERTS, NUM_PENT_VERTS};
use crate::coords::face::{
  adjust_overage_class_ii, face_ijk_pent_to_boundary, face_ijk_to_boundary, face_ijk_to_geo, geo_to_face_ijk, Overage,
};
use crate::error::GridError;
use crate::types::{CellIndex, CoordIJK, Direction, FaceIJK, GeoBoundary, GeoCoord, NULL_CELL};

/// Encodes a face address at the given resolution into a cell index,
/// or the null index when the address is out of range.
pub(crate) fn face_ijk_to_cell(fijk: &FaceIJK, res: i32) -> CellIndex {
  let mut h = make_cell(res, 0, Direction::Invalid);

  if res == 0 {
    if fijk.coord.i > MAX_FACE_COORD || fijk.coord.j > MAX_FACE_COORD || fijk.coord.k > MAX_FACE_COORD {
      return NULL_CELL;
    }
    h.set_base_cell(face_ijk_to_base_cell(fijk));
    return h;
  }

  // Walk from the finest resolution up, recovering one digit per step
  // as the difference between the cell and the center of its parent.
  let mut fijk_bc = *fijk;
  let ijk = &mut fijk_bc.coord;
  for r in (1..=res).rev() {
    let last_ijk = *ijk;
    let last_center = if res_is_class_iii(r) {
      ijk.up_ap7();
      let mut c = *ijk;
      c.down_ap7();
      c
    } else {
      ijk.up_ap7r();
      let mut c = *ijk;
      c.down_ap7r();
      c
    };

    let mut diff = last_ijk.sub(&last_center);
    diff.normalize();
    h.set_digit(r, diff.unit_to_digit());
  }

  // fijk_bc now addresses the base cell in this face's frame
  if fijk_bc.coord.i > MAX_FACE_COORD || fijk_bc.coord.j > MAX_FACE_COORD || fijk_bc.coord.k > MAX_FACE_COORD {
    return NULL_CELL;
  }

  let base_cell = face_ijk_to_base_cell(&fijk_bc);
  h.set_base_cell(base_cell);

  // rotate into the base cell's canonical orientation
  let num_rots = face_ijk_to_base_cell_ccw_rot60(&fijk_bc);
  if is_base_cell_pentagon(base_cell) {
    // force rotation out of the missing K subsequence; the direction
    // depends on whether this face is a cw offset face
    if h.leading_non_zero_digit() == Direction::K {
      if base_cell_is_cw_offset(base_cell, fijk_bc.face) {
        h = h.rotate60_cw();
      } else {
        h = h.rotate60_ccw();
      }
    }
    for _ in 0..num_rots {
      h = h.rotate_pent60_ccw();
    }
  } else {
    for _ in 0..num_rots {
      h = h.rotate60_ccw();
    }
  }

  h
}

/// Converts a cell index to a face address on the face carried in
/// `fijk`, without adjusting for overage. Returns whether overage onto
/// a neighboring face is possible at all.
pub(crate) fn cell_to_face_ijk_on_face(h: CellIndex, fijk: &mut FaceIJK) -> bool {
  let res = h.resolution();

  // the center hierarchy of a hexagon base cell stays on its home face
  let mut possible_overage = true;
  if !is_base_cell_pentagon(h.base_cell()) && (res == 0 || fijk.coord == CoordIJK::default()) {
    possible_overage = false;
  }

  for r in 1..=res {
    if res_is_class_iii(r) {
      fijk.coord.down_ap7();
    } else {
      fijk.coord.down_ap7r();
    }
    fijk.coord.neighbor(h.digit(r));
  }

  possible_overage
}

/// Converts a cell index to its face address, transporting across
/// icosahedron edges where the digit walk leaked off the home face.
pub(crate) fn cell_to_face_ijk(h: CellIndex) -> FaceIJK {
  let mut h = h;
  let base_cell = h.base_cell();

  // the whole leading-5 subsequence of a pentagon is rotated against
  // the deleted K axis
  if is_base_cell_pentagon(base_cell) && h.leading_non_zero_digit() == Direction::Ik {
    h = h.rotate60_cw();
  }

  let mut fijk = base_cell_to_face_ijk(base_cell);
  if !cell_to_face_ijk_on_face(h, &mut fijk) {
    return fijk;
  }

  let orig_ijk = fijk.coord;

  // overage is classified on a Class II grid; drop Class III cells one
  // finer, then lift the result back
  let mut res = h.resolution();
  if res_is_class_iii(res) {
    fijk.coord.down_ap7r();
    res += 1;
  }

  let pent_leading_4 = is_base_cell_pentagon(base_cell) && h.leading_non_zero_digit() == Direction::I;
  if adjust_overage_class_ii(&mut fijk, res, pent_leading_4, false) != Overage::None {
    // pentagon base cells can overage repeatedly
    if is_base_cell_pentagon(base_cell) {
      while adjust_overage_class_ii(&mut fijk, res, false, false) != Overage::None {}
    }

    if res != h.resolution() {
      fijk.coord.up_ap7r();
    }
  } else if res != h.resolution() {
    fijk.coord = orig_ijk;
  }

  fijk
}

/// Finds the cell containing the given point at the given resolution.
///
/// Fails with [`GridError::ResDomain`] for an out-of-range resolution
/// and [`GridError::CoordDomain`] for non-finite or out-of-range
/// coordinates.
pub fn geo_to_cell(geo: &GeoCoord, res: i32) -> Result<CellIndex, GridError> {
  if !(0..=MAX_RES).contains(&res) {
    return Err(GridError::ResDomain);
  }
  if !geo.lat.is_finite() || !geo.lon.is_finite() || geo.lat.abs() > M_PI_2 + EPSILON_RAD {
    return Err(GridError::CoordDomain);
  }

  let fijk = geo_to_face_ijk(geo, res);
  let h = face_ijk_to_cell(&fijk, res);
  if h == NULL_CELL {
    Err(GridError::Failed)
  } else {
    Ok(h)
  }
}

/// Center point of the given cell.
pub fn cell_to_geo(cell: CellIndex) -> Result<GeoCoord, GridError> {
  if !cell.is_valid() {
    return Err(GridError::CellInvalid);
  }

  let fijk = cell_to_face_ijk(cell);
  Ok(face_ijk_to_geo(&fijk, cell.resolution()))
}

/// Boundary polyline of the given cell: five or six topological
/// vertices plus any icosahedron-edge distortion vertices, CCW and
/// topologically closed.
pub fn cell_to_boundary(cell: CellIndex) -> Result<GeoBoundary, GridError> {
  if !cell.is_valid() {
    return Err(GridError::CellInvalid);
  }

  let fijk = cell_to_face_ijk(cell);
  let res = cell.resolution();

  let boundary = if cell.is_pentagon() {
    face_ijk_pent_to_boundary(&fijk, res, 0, NUM_PENT_VERTS)
  } else {
    face_ijk_to_boundary(&fijk, res, 0, NUM_HEX_VERTS)
  };
  Ok(boundary)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::geom::geodesy::{degs_to_rads, geo_almost_equal_threshold};

  fn geo(lat_degs: f64, lon_degs: f64) -> GeoCoord {
    GeoCoord {
      lat: degs_to_rads(lat_degs),
      lon: degs_to_rads(lon_degs),
    }
  }

  #[test]
  fn rejects_bad_inputs() {
    let p = geo(37.77, -122.41);
    assert_eq!(geo_to_cell(&p, -1), Err(GridError::ResDomain));
    assert_eq!(geo_to_cell(&p, 16), Err(GridError::ResDomain));

    let bad_lat = GeoCoord {
      lat: f64::NAN,
      lon: 0.0,
    };
    assert_eq!(geo_to_cell(&bad_lat, 5), Err(GridError::CoordDomain));
    let far_lat = geo(100.0, 0.0);
    assert_eq!(geo_to_cell(&far_lat, 5), Err(GridError::CoordDomain));

    assert_eq!(cell_to_geo(NULL_CELL), Err(GridError::CellInvalid));
    assert!(cell_to_boundary(NULL_CELL).is_err());
  }

  #[test]
  fn known_encodings() {
    let sf = geo(37.779_265, -122.419_277);
    assert_eq!(geo_to_cell(&sf, 5).unwrap(), CellIndex(0x85283083fffffff));
    assert_eq!(geo_to_cell(&sf, 10).unwrap(), CellIndex(0x8a2830828767fff));

    let north_pole = geo(90.0, 0.0);
    assert_eq!(geo_to_cell(&north_pole, 3).unwrap(), CellIndex(0x830326fffffffff));
    let south_pole = geo(-90.0, 0.0);
    assert_eq!(geo_to_cell(&south_pole, 4).unwrap(), CellIndex(0x84f2939ffffffff));
  }

  #[test]
  fn center_round_trips_at_all_resolutions() {
    let p = GeoCoord {
      lat: 0.6593,
      lon: -2.1371,
    };
    for res in 0..=MAX_RES {
      let cell = geo_to_cell(&p, res).unwrap();
      assert!(cell.is_valid(), "res {res}");
      assert_eq!(cell.resolution(), res);

      let center = cell_to_geo(cell).unwrap();
      assert_eq!(geo_to_cell(&center, res).unwrap(), cell, "res {res} center re-encodes");
    }
  }

  #[test]
  fn res5_center_is_stable_to_nanoradians() {
    let p = GeoCoord {
      lat: 0.6593,
      lon: -2.1371,
    };
    let cell = geo_to_cell(&p, 5).unwrap();
    let center = cell_to_geo(cell).unwrap();
    let again = cell_to_geo(geo_to_cell(&center, 5).unwrap()).unwrap();
    assert!(geo_almost_equal_threshold(&center, &again, 1e-9));
  }

  #[test]
  fn boundary_shapes() {
    let hex = geo_to_cell(&geo(37.78, -122.42), 9).unwrap();
    let b = cell_to_boundary(hex).unwrap();
    assert_eq!(b.num_verts, NUM_HEX_VERTS, "mid-face hexagon has no distortion");

    // pentagon at res 2: five topological vertices, possibly none extra
    // at Class II
    let pent = make_cell(2, 14, Direction::Center);
    assert!(pent.is_pentagon());
    let b = cell_to_boundary(pent).unwrap();
    assert!(b.num_verts >= NUM_PENT_VERTS && b.num_verts <= crate::constants::MAX_BNDRY_VERTS);

    // Class III pentagons cross an icosa edge on every edge
    let pent3 = make_cell(3, 14, Direction::Center);
    let b = cell_to_boundary(pent3).unwrap();
    assert_eq!(b.num_verts, NUM_PENT_VERTS * 2);
  }

  #[test]
  fn boundary_is_ccw() {
    // signed area in a local tangent frame must be positive for CCW
    let cell = geo_to_cell(&geo(40.0, -100.0), 7).unwrap();
    let b = cell_to_boundary(cell).unwrap();
    let center = cell_to_geo(cell).unwrap();

    let mut area = 0.0;
    for i in 0..b.num_verts {
      let a = &b.verts[i];
      let c = &b.verts[(i + 1) % b.num_verts];
      let ax = (a.lon - center.lon) * center.lat.cos();
      let ay = a.lat - center.lat;
      let cx = (c.lon - center.lon) * center.lat.cos();
      let cy = c.lat - center.lat;
      area += ax * cy - cx * ay;
    }
    assert!(area > 0.0, "boundary winds CCW");
  }

  #[test]
  fn base_cell_walk_round_trip() {
    // every base cell home address encodes back to that base cell
    for bc in 0..crate::constants::NUM_BASE_CELLS {
      let cell = make_cell(0, bc, Direction::Center);
      let fijk = cell_to_face_ijk(cell);
      assert_eq!(face_ijk_to_cell(&fijk, 0), cell, "base cell {bc}");
    }
  }
}
