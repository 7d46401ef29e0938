//! Read-only queries on cell indexes: validity, classification and
//! grid census helpers.

use crate::base_cells::is_base_cell_pentagon;
use crate::cell::codec::make_cell;
use crate::cell::convert::cell_to_face_ijk;
use crate::cell::res_is_class_iii;
use crate::constants::{MAX_RES, NUM_BASE_CELLS, NUM_PENTAGONS};
use crate::coords::face::{adjust_overage_class_ii, adjust_pent_vert_overage, face_ijk_pent_to_verts, face_ijk_to_verts, INVALID_FACE};
use crate::error::GridError;
use crate::types::{CellIndex, Direction};

/// Whether the index is a valid cell.
#[inline]
#[must_use]
pub fn cell_is_valid(cell: CellIndex) -> bool {
  cell.is_valid()
}

/// Whether the cell is one of the twelve pentagons of its resolution.
#[inline]
#[must_use]
pub fn cell_is_pentagon(cell: CellIndex) -> bool {
  cell.is_pentagon()
}

/// Whether the cell sits on a Class III (rotated, odd) resolution.
#[inline]
#[must_use]
pub fn cell_is_res_class_iii(cell: CellIndex) -> bool {
  res_is_class_iii(cell.resolution())
}

/// The cell's resolution.
#[inline]
#[must_use]
pub fn cell_resolution(cell: CellIndex) -> i32 {
  cell.resolution()
}

/// The cell's base cell number.
#[inline]
#[must_use]
pub fn cell_base_cell(cell: CellIndex) -> i32 {
  cell.base_cell()
}

/// Upper bound on the number of icosahedron faces the cell may touch:
/// five for pentagons, two for hexagons.
#[must_use]
pub fn max_face_count(cell: CellIndex) -> usize {
  if cell.is_pentagon() {
    5
  } else {
    2
  }
}

/// All icosahedron faces intersected by the cell, ascending. The result
/// has at most [`max_face_count`] entries.
pub fn cell_get_faces(cell: CellIndex) -> Result<Vec<i32>, GridError> {
  if !cell.is_valid() {
    return Err(GridError::CellInvalid);
  }

  let mut res = cell.resolution();
  let is_pentagon = cell.is_pentagon();

  // Class II pentagons have all vertices exactly on icosahedron edges,
  // so the vertex probe below cannot classify them; their center child
  // crosses the same faces.
  if is_pentagon && !res_is_class_iii(res) {
    let mut child = cell;
    child.set_resolution(res + 1);
    child.set_digit(res + 1, Direction::Center);
    return cell_get_faces(child);
  }

  let mut fijk = cell_to_face_ijk(cell);

  // collect the face of every vertex, deduplicating into a small set
  let mut faces = [INVALID_FACE; 5];
  if is_pentagon {
    let verts = face_ijk_pent_to_verts(&mut fijk, &mut res);
    for mut vert in verts {
      adjust_pent_vert_overage(&mut vert, res);
      record_face(&mut faces, vert.face);
    }
  } else {
    let verts = face_ijk_to_verts(&mut fijk, &mut res);
    for mut vert in verts {
      adjust_overage_class_ii(&mut vert, res, false, true);
      record_face(&mut faces, vert.face);
    }
  }

  let mut out: Vec<i32> = faces.iter().copied().filter(|&f| f != INVALID_FACE).collect();
  out.sort_unstable();
  Ok(out)
}

fn record_face(faces: &mut [i32], face: i32) {
  for slot in faces.iter_mut() {
    if *slot == face {
      return;
    }
    if *slot == INVALID_FACE {
      *slot = face;
      return;
    }
  }
}

/// Number of pentagons per resolution; always twelve.
#[inline]
#[must_use]
pub fn pentagon_count() -> i32 {
  NUM_PENTAGONS
}

/// The twelve pentagon cells at the given resolution.
pub fn pentagons(res: i32) -> Result<[CellIndex; NUM_PENTAGONS as usize], GridError> {
  if !(0..=MAX_RES).contains(&res) {
    return Err(GridError::ResDomain);
  }

  let mut out = [CellIndex::default(); NUM_PENTAGONS as usize];
  let mut i = 0;
  for bc in 0..NUM_BASE_CELLS {
    if is_base_cell_pentagon(bc) {
      out[i] = make_cell(res, bc, Direction::Center);
      i += 1;
    }
  }
  Ok(out)
}

/// All 122 resolution 0 cells, in base cell order.
#[must_use]
pub fn res0_cells() -> Vec<CellIndex> {
  (0..NUM_BASE_CELLS).map(|bc| make_cell(0, bc, Direction::Center)).collect()
}

/// Number of unique cells at the given resolution. Starting from the
/// 122 base cells, each step replaces the twelve pentagons with six
/// children and every hexagon with seven.
pub fn num_cells(res: i32) -> Result<i64, GridError> {
  if !(0..=MAX_RES).contains(&res) {
    return Err(GridError::ResDomain);
  }

  let mut count: i64 = i64::from(NUM_BASE_CELLS);
  for _ in 0..res {
    count = (count - i64::from(NUM_PENTAGONS)) * 7 + i64::from(NUM_PENTAGONS) * 6;
  }
  Ok(count)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::constants::NUM_CELLS_MAX_RES;

  #[test]
  fn census_sequence() {
    assert_eq!(num_cells(0), Ok(122));
    assert_eq!(num_cells(1), Ok(842));
    assert_eq!(num_cells(2), Ok(5882));
    assert_eq!(num_cells(3), Ok(41_162));
    assert_eq!(num_cells(MAX_RES), Ok(NUM_CELLS_MAX_RES));
    assert_eq!(num_cells(16), Err(GridError::ResDomain));
  }

  #[test]
  fn pentagon_listing() {
    for res in [0, 1, 8, 15] {
      let pents = pentagons(res).unwrap();
      assert_eq!(pents.len(), 12);
      for p in pents {
        assert!(p.is_valid());
        assert!(p.is_pentagon());
        assert_eq!(p.resolution(), res);
      }
    }
    assert!(pentagons(16).is_err());
  }

  #[test]
  fn res0_listing() {
    let cells = res0_cells();
    assert_eq!(cells.len(), 122);
    assert!(cells.iter().all(|c| c.is_valid() && c.resolution() == 0));
    assert_eq!(cells.iter().filter(|c| c.is_pentagon()).count(), 12);
  }

  #[test]
  fn faces_of_hexagons_and_pentagons() {
    // a cell at a face center touches one face
    let mid = crate::cell::convert::geo_to_cell(
      &crate::types::GeoCoord {
        lat: crate::coords::face::FACE_CENTER_GEO[3].lat,
        lon: crate::coords::face::FACE_CENTER_GEO[3].lon,
      },
      2,
    )
    .unwrap();
    let faces = cell_get_faces(mid).unwrap();
    assert_eq!(faces, vec![3]);

    // pentagons touch five faces at every resolution
    for res in 0..=4 {
      let pent = make_cell(res, 38, Direction::Center);
      let faces = cell_get_faces(pent).unwrap();
      assert_eq!(faces.len(), 5, "res {res} pentagon");
      assert!(faces.windows(2).all(|w| w[0] < w[1]), "sorted and distinct");
    }
  }

  #[test]
  fn face_count_bounds() {
    assert_eq!(max_face_count(make_cell(3, 38, Direction::Center)), 5);
    assert_eq!(max_face_count(make_cell(3, 0, Direction::Center)), 2);

    // every reported face set fits the bound
    for bc in [0, 14, 20, 63, 121] {
      let cell = make_cell(1, bc, Direction::Center);
      let faces = cell_get_faces(cell).unwrap();
      assert!(faces.len() <= max_face_count(cell));
    }
  }

  #[test]
  fn class_iii_is_odd() {
    assert!(!cell_is_res_class_iii(make_cell(0, 0, Direction::Center)));
    assert!(cell_is_res_class_iii(make_cell(5, 0, Direction::Center)));
    assert!(!cell_is_res_class_iii(make_cell(8, 0, Direction::Center)));
  }
}
