//! Mapping between neighbor directions and boundary vertex numbers,
//! used to pick the start vertex of an edge boundary.

use crate::base_cells::{base_cell_to_ccw_rot60, base_cell_to_face_ijk, is_base_cell_pentagon, is_base_cell_polar_pentagon};
use crate::cell::convert::cell_to_face_ijk;
use crate::constants::{NUM_HEX_VERTS, NUM_PENTAGONS, NUM_PENT_VERTS};
use crate::types::{CellIndex, Direction};

/// Marker for "no vertex".
pub(crate) const INVALID_VERTEX_NUM: i32 = -1;

/// Faces in directional order around each pentagon base cell, starting
/// at the J axis.
struct PentagonDirectionFaces {
  base_cell: i32,
  faces: [i32; NUM_PENT_VERTS],
}

const fn pdf(base_cell: i32, faces: [i32; NUM_PENT_VERTS]) -> PentagonDirectionFaces {
  PentagonDirectionFaces { base_cell, faces }
}

/// Direction-ordered faces of the twelve pentagons.
#[rustfmt::skip]
static PENTAGON_DIRECTION_FACES: [PentagonDirectionFaces; NUM_PENTAGONS as usize] = [
  pdf(4, [4, 0, 2, 1, 3]),
  pdf(14, [6, 11, 2, 7, 1]),
  pdf(24, [5, 10, 1, 6, 0]),
  pdf(38, [7, 12, 3, 8, 2]),
  pdf(49, [9, 14, 0, 5, 4]),
  pdf(58, [8, 13, 4, 9, 3]),
  pdf(63, [11, 6, 15, 10, 16]),
  pdf(72, [12, 7, 16, 11, 17]),
  pdf(83, [10, 5, 19, 14, 15]),
  pdf(97, [13, 8, 17, 12, 18]),
  pdf(107, [14, 9, 18, 13, 19]),
  pdf(117, [15, 19, 17, 18, 16]),
];

/// First direction with an entry in the face tables (the J axis).
const DIRECTION_INDEX_OFFSET: usize = 2;

/// Hexagon direction to vertex number, in the unrotated frame. The
/// center digit has no vertex.
const DIRECTION_TO_VERTEX_NUM_HEX: [i32; 7] = [INVALID_VERTEX_NUM, 3, 1, 2, 5, 4, 0];

/// Pentagon direction to vertex number, in the unrotated frame; the K
/// digit is deleted.
const DIRECTION_TO_VERTEX_NUM_PENT: [i32; 7] = [INVALID_VERTEX_NUM, INVALID_VERTEX_NUM, 1, 2, 4, 3, 0];

/// Number of CCW rotations of the cell's vertex numbering compared to
/// the directional layout of its base cell.
fn vertex_rotations(cell: CellIndex) -> i32 {
  let fijk = cell_to_face_ijk(cell);
  let base_cell = cell.base_cell();
  let leading_digit = cell.leading_non_zero_digit();

  let base_fijk = base_cell_to_face_ijk(base_cell);

  let mut ccw_rot60 = base_cell_to_ccw_rot60(base_cell, fijk.face);

  if is_base_cell_pentagon(base_cell) {
    let Some(dir_faces) = PENTAGON_DIRECTION_FACES.iter().find(|p| p.base_cell == base_cell) else {
      return ccw_rot60;
    };

    let ik_face = dir_faces.faces[Direction::Ik as usize - DIRECTION_INDEX_OFFSET];
    let jk_face = dir_faces.faces[Direction::Jk as usize - DIRECTION_INDEX_OFFSET];

    // additional CCW rotation for polar neighbors or IK neighbors
    if fijk.face != base_fijk.face && (is_base_cell_polar_pentagon(base_cell) || fijk.face == ik_face) {
      ccw_rot60 = (ccw_rot60 + 1) % 6;
    }

    // crossing the deleted pentagon subsequence rotates the numbering
    if leading_digit == Direction::Jk && fijk.face == ik_face {
      ccw_rot60 = (ccw_rot60 + 5) % 6;
    } else if leading_digit == Direction::Ik && fijk.face == jk_face {
      ccw_rot60 = (ccw_rot60 + 1) % 6;
    }
  }

  ccw_rot60
}

/// The first vertex number of the edge toward the given direction; the
/// neighbor in that direction lies between this vertex and the next in
/// CCW sequence. Returns `INVALID_VERTEX_NUM` for the center, invalid
/// or deleted-pentagon directions.
pub(crate) fn vertex_num_for_direction(origin: CellIndex, direction: Direction) -> i32 {
  let is_pentagon = origin.is_pentagon();

  if direction == Direction::Center
    || direction == Direction::Invalid
    || (is_pentagon && direction == Direction::K)
  {
    return INVALID_VERTEX_NUM;
  }

  let rotations = vertex_rotations(origin);

  if is_pentagon {
    (DIRECTION_TO_VERTEX_NUM_PENT[direction as usize] + NUM_PENT_VERTS as i32 - rotations) % NUM_PENT_VERTS as i32
  } else {
    (DIRECTION_TO_VERTEX_NUM_HEX[direction as usize] + NUM_HEX_VERTS as i32 - rotations) % NUM_HEX_VERTS as i32
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::cell::codec::make_cell;
  use crate::cell::geo_to_cell;
  use crate::geom::geodesy::degs_to_rads;
  use crate::types::GeoCoord;

  #[test]
  fn pentagon_face_table_matches_base_cell_data() {
    for entry in &PENTAGON_DIRECTION_FACES {
      assert!(is_base_cell_pentagon(entry.base_cell));
      // the home face is one of the five
      let home = base_cell_to_face_ijk(entry.base_cell).face;
      assert!(entry.faces.contains(&home), "base cell {}", entry.base_cell);
      // five distinct faces
      let mut faces = entry.faces;
      faces.sort_unstable();
      faces.windows(2).for_each(|w| assert_ne!(w[0], w[1]));
    }
  }

  #[test]
  fn hexagon_vertex_numbers_are_distinct() {
    let cell = geo_to_cell(
      &GeoCoord {
        lat: degs_to_rads(37.779),
        lon: degs_to_rads(-122.419),
      },
      9,
    )
    .unwrap();

    let mut seen = Vec::new();
    for dir in Direction::AXES {
      let v = vertex_num_for_direction(cell, dir);
      assert!((0..NUM_HEX_VERTS as i32).contains(&v));
      assert!(!seen.contains(&v), "vertex for {dir:?} repeats");
      seen.push(v);
    }
  }

  #[test]
  fn pentagon_vertex_numbers_are_distinct() {
    let pent = make_cell(2, 24, Direction::Center);
    assert_eq!(vertex_num_for_direction(pent, Direction::K), INVALID_VERTEX_NUM);

    let mut seen = Vec::new();
    for dir in [Direction::J, Direction::Jk, Direction::I, Direction::Ik, Direction::Ij] {
      let v = vertex_num_for_direction(pent, dir);
      assert!((0..NUM_PENT_VERTS as i32).contains(&v));
      assert!(!seen.contains(&v), "vertex for {dir:?} repeats");
      seen.push(v);
    }
  }

  #[test]
  fn center_direction_has_no_vertex() {
    let cell = make_cell(1, 0, Direction::Center);
    assert_eq!(vertex_num_for_direction(cell, Direction::Center), INVALID_VERTEX_NUM);
    assert_eq!(vertex_num_for_direction(cell, Direction::Invalid), INVALID_VERTEX_NUM);
  }
}
