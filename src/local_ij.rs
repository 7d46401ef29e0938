//! Unfolding a neighborhood around an origin cell into one shared IJK
//! frame, and the distance and line operations built on it.
//!
//! The unfolded space has deleted regions and warping near pentagons.
//! Coordinates are only comparable when produced from the same origin,
//! and some origin/target combinations across pentagons are refused
//! outright rather than answered incorrectly.

use crate::base_cells::{
  base_cell_direction, base_cell_neighbor, is_base_cell_pentagon, is_base_cell_polar_pentagon, INVALID_BASE_CELL,
  BASE_CELL_NEIGHBOR_60CCW_ROTS,
};
use crate::cell::codec::make_cell;
use crate::cell::convert::cell_to_face_ijk_on_face;
use crate::cell::res_is_class_iii;
use crate::error::GridError;
use crate::types::{CellIndex, CoordIJ, CoordIJK, Direction, FaceIJK};

/// Origin leading digit -> index leading digit -> CW rotations.
/// A row or column of 1 (the K axis) is unreachable.
#[rustfmt::skip]
static PENTAGON_ROTATIONS: [[i32; 7]; 7] = [
  [0, -1, 0, 0, 0, 0, 0],       // 0
  [-1, -1, -1, -1, -1, -1, -1], // 1
  [0, -1, 0, 0, 0, 1, 0],       // 2
  [0, -1, 0, 0, 1, 1, 0],       // 3
  [0, -1, 0, 5, 0, 0, 0],       // 4
  [0, -1, 5, 5, 0, 0, 0],       // 5
  [0, -1, 0, 0, 0, 0, 0],       // 6
];

/// Reverse direction -> leading digit -> CCW rotations, undoing
/// `PENTAGON_ROTATIONS` when the origin is on a pentagon.
#[rustfmt::skip]
static PENTAGON_ROTATIONS_REVERSE: [[i32; 7]; 7] = [
  [0, 0, 0, 0, 0, 0, 0],        // 0
  [-1, -1, -1, -1, -1, -1, -1], // 1
  [0, 1, 0, 0, 0, 0, 0],        // 2
  [0, 1, 0, 0, 0, 1, 0],        // 3
  [0, 5, 0, 0, 0, 0, 0],        // 4
  [0, 5, 0, 5, 0, 0, 0],        // 5
  [0, 0, 0, 0, 0, 0, 0],        // 6
];

/// Reverse direction -> leading digit -> CCW rotations, when the index
/// is on a non-polar pentagon and the origin is not.
#[rustfmt::skip]
static PENTAGON_ROTATIONS_REVERSE_NONPOLAR: [[i32; 7]; 7] = [
  [0, 0, 0, 0, 0, 0, 0],        // 0
  [-1, -1, -1, -1, -1, -1, -1], // 1
  [0, 1, 0, 0, 0, 0, 0],        // 2
  [0, 1, 0, 0, 0, 1, 0],        // 3
  [0, 5, 0, 0, 0, 0, 0],        // 4
  [0, 1, 0, 5, 1, 1, 0],        // 5
  [0, 0, 0, 0, 0, 0, 0],        // 6
];

/// Reverse direction -> leading digit -> CCW rotations, when the index
/// is on a polar pentagon and the origin is not.
#[rustfmt::skip]
static PENTAGON_ROTATIONS_REVERSE_POLAR: [[i32; 7]; 7] = [
  [0, 0, 0, 0, 0, 0, 0],        // 0
  [-1, -1, -1, -1, -1, -1, -1], // 1
  [0, 1, 1, 1, 1, 1, 1],        // 2
  [0, 1, 0, 0, 0, 1, 0],        // 3
  [0, 1, 0, 0, 1, 1, 1],        // 4
  [0, 1, 0, 5, 1, 1, 0],        // 5
  [0, 1, 1, 0, 1, 1, 1],        // 6
];

/// Origin-direction -> index-direction pairs that cannot be unfolded
/// across a pentagon. Any unfolding across more than one icosahedron
/// face is refused.
#[rustfmt::skip]
static FAILED_DIRECTIONS: [[bool; 7]; 7] = [
  [false, false, false, false, false, false, false], // 0
  [false, false, false, false, false, false, false], // 1
  [false, false, false, false, true, true, false],   // 2
  [false, false, false, false, true, false, true],   // 3
  [false, false, true, true, false, false, false],   // 4
  [false, false, true, false, false, false, true],   // 5
  [false, false, false, true, false, true, false],   // 6
];

/// Produces IJK+ coordinates for `index` in the frame anchored at
/// `origin`.
///
/// Each failure class maps to its own error: [`GridError::ResMismatch`]
/// for differing resolutions, [`GridError::NotNeighbors`] for base
/// cells that are not adjacent, [`GridError::Pentagon`] for unfoldings
/// the failed-direction table refuses, and [`GridError::Failed`] for
/// internal table violations.
pub(crate) fn cell_to_local_ijk(origin: CellIndex, index: CellIndex) -> Result<CoordIJK, GridError> {
  let res = origin.resolution();
  if res != index.resolution() {
    return Err(GridError::ResMismatch);
  }

  let origin_base_cell = origin.base_cell();
  let base_cell = index.base_cell();

  let mut dir = Direction::Center;
  let mut rev_dir = Direction::Center;
  if origin_base_cell != base_cell {
    dir = base_cell_direction(origin_base_cell, base_cell);
    if dir == Direction::Invalid {
      return Err(GridError::NotNeighbors);
    }
    rev_dir = base_cell_direction(base_cell, origin_base_cell);
    if rev_dir == Direction::Invalid {
      return Err(GridError::Failed);
    }
  }

  let origin_on_pent = is_base_cell_pentagon(origin_base_cell);
  let index_on_pent = is_base_cell_pentagon(base_cell);

  let mut index = index;
  if dir != Direction::Center {
    // rotate the index into the origin base cell's orientation; cw
    // because this undoes the rotation into its own base cell
    let base_cell_rotations = BASE_CELL_NEIGHBOR_60CCW_ROTS[origin_base_cell as usize][dir as usize];
    if index_on_pent {
      for _ in 0..base_cell_rotations {
        index = index.rotate_pent60_cw();

        rev_dir = rev_dir.rotate60_cw();
        if rev_dir == Direction::K {
          rev_dir = rev_dir.rotate60_cw();
        }
      }
    } else {
      for _ in 0..base_cell_rotations {
        index = index.rotate60_cw();
        rev_dir = rev_dir.rotate60_cw();
      }
    }
  }

  // digit walk in base cell coordinate space; the face is unused
  let mut index_fijk = FaceIJK::default();
  cell_to_face_ijk_on_face(index, &mut index_fijk);

  if dir != Direction::Center {
    if base_cell == origin_base_cell || (origin_on_pent && index_on_pent) {
      return Err(GridError::Failed);
    }

    let mut pentagon_rotations = 0;
    let mut direction_rotations = 0;

    if origin_on_pent {
      let origin_leading = origin.leading_non_zero_digit() as usize;
      if FAILED_DIRECTIONS[origin_leading][dir as usize] {
        // this unfolding is not known to be correct; refuse it
        return Err(GridError::Pentagon);
      }

      direction_rotations = PENTAGON_ROTATIONS[origin_leading][dir as usize];
      pentagon_rotations = direction_rotations;
    } else if index_on_pent {
      let index_leading = index.leading_non_zero_digit() as usize;
      if FAILED_DIRECTIONS[index_leading][rev_dir as usize] {
        return Err(GridError::Pentagon);
      }

      pentagon_rotations = PENTAGON_ROTATIONS[rev_dir as usize][index_leading];
    }

    if pentagon_rotations < 0 || direction_rotations < 0 {
      return Err(GridError::Failed);
    }

    for _ in 0..pentagon_rotations {
      index_fijk.coord.rotate60_cw();
    }

    // the offset from origin to the neighboring base cell, scaled down
    // to the target resolution
    let mut offset = CoordIJK::default();
    offset.neighbor(dir);
    for r in (1..=res).rev() {
      if res_is_class_iii(r) {
        offset.down_ap7();
      } else {
        offset.down_ap7r();
      }
    }

    for _ in 0..direction_rotations {
      offset.rotate60_cw();
    }

    index_fijk.coord = index_fijk.coord.add(&offset);
    index_fijk.coord.normalize();
  } else if origin_on_pent && index_on_pent {
    // same pentagon base cell; unfold within it
    let origin_leading = origin.leading_non_zero_digit() as usize;
    let index_leading = index.leading_non_zero_digit() as usize;

    if FAILED_DIRECTIONS[origin_leading][index_leading] {
      return Err(GridError::Pentagon);
    }

    let within_pentagon_rotations = PENTAGON_ROTATIONS[origin_leading][index_leading];
    if within_pentagon_rotations < 0 {
      return Err(GridError::Failed);
    }
    for _ in 0..within_pentagon_rotations {
      index_fijk.coord.rotate60_cw();
    }
  }

  Ok(index_fijk.coord)
}

/// Produces the cell at the given IJK+ coordinates in the frame
/// anchored at `origin`.
///
/// Fails with [`GridError::Domain`] for coordinates out of range,
/// [`GridError::DeletedKSubsequence`] when the coordinates land in the
/// deleted region of a pentagon, and [`GridError::Failed`] for
/// internal table violations.
pub(crate) fn local_ijk_to_cell(origin: CellIndex, ijk: &CoordIJK) -> Result<CellIndex, GridError> {
  let res = origin.resolution();
  let origin_base_cell = origin.base_cell();
  let origin_on_pent = is_base_cell_pentagon(origin_base_cell);

  let mut out = make_cell(res, 0, Direction::Invalid);

  if res == 0 {
    if ijk.i > 1 || ijk.j > 1 || ijk.k > 1 {
      return Err(GridError::Domain);
    }

    let dir = ijk.unit_to_digit();
    let new_base_cell = base_cell_neighbor(origin_base_cell, dir);
    if new_base_cell == INVALID_BASE_CELL {
      // moving in the deleted direction off a pentagon
      return Err(GridError::DeletedKSubsequence);
    }
    out.set_base_cell(new_base_cell);
    return Ok(out);
  }

  // walk from the finest resolution up, exactly as in encoding from a
  // face address
  let mut ijk_copy = *ijk;
  for r in (1..=res).rev() {
    let last_ijk = ijk_copy;
    let last_center = if res_is_class_iii(r) {
      ijk_copy.up_ap7();
      let mut c = ijk_copy;
      c.down_ap7();
      c
    } else {
      ijk_copy.up_ap7r();
      let mut c = ijk_copy;
      c.down_ap7r();
      c
    };

    let mut diff = last_ijk.sub(&last_center);
    diff.normalize();
    out.set_digit(r, diff.unit_to_digit());
  }

  // ijk_copy now holds the base cell offset in the origin's frame
  if ijk_copy.i > 1 || ijk_copy.j > 1 || ijk_copy.k > 1 {
    return Err(GridError::Domain);
  }

  let mut dir = ijk_copy.unit_to_digit();
  let mut base_cell = base_cell_neighbor(origin_base_cell, dir);
  // pentagon base cells never border each other, so a neighbor of a
  // pentagon origin is a hexagon (or invalid)
  let mut index_on_pent = base_cell != INVALID_BASE_CELL && is_base_cell_pentagon(base_cell);

  if dir != Direction::Center {
    // unwarp the base cell direction, then rotate the digits back
    let mut pentagon_rotations = 0;
    if origin_on_pent {
      let origin_leading = origin.leading_non_zero_digit() as usize;
      pentagon_rotations = PENTAGON_ROTATIONS_REVERSE[origin_leading][dir as usize];
      if pentagon_rotations < 0 {
        return Err(GridError::Failed);
      }
      for _ in 0..pentagon_rotations {
        dir = dir.rotate60_ccw();
      }

      // rotations were chosen to avoid the deleted direction; landing
      // on it anyway means these coordinates address the deleted region
      if dir == Direction::K {
        return Err(GridError::DeletedKSubsequence);
      }
      base_cell = base_cell_neighbor(origin_base_cell, dir);
      if base_cell == INVALID_BASE_CELL || is_base_cell_pentagon(base_cell) {
        return Err(GridError::Failed);
      }
      index_on_pent = false;
    }

    let base_cell_rotations = BASE_CELL_NEIGHBOR_60CCW_ROTS[origin_base_cell as usize][dir as usize];
    if base_cell_rotations < 0 {
      return Err(GridError::Failed);
    }

    if index_on_pent {
      let rev_dir = base_cell_direction(base_cell, origin_base_cell);
      if rev_dir == Direction::Invalid {
        return Err(GridError::Failed);
      }

      // rotate into the target base cell's frame first; the pentagon
      // correction keys on the leading digit in that frame
      for _ in 0..base_cell_rotations {
        out = out.rotate60_ccw();
      }

      let index_leading = out.leading_non_zero_digit() as usize;
      let pentagon_rotations = if is_base_cell_polar_pentagon(base_cell) {
        PENTAGON_ROTATIONS_REVERSE_POLAR[rev_dir as usize][index_leading]
      } else {
        PENTAGON_ROTATIONS_REVERSE_NONPOLAR[rev_dir as usize][index_leading]
      };
      if pentagon_rotations < 0 {
        return Err(GridError::Failed);
      }

      for _ in 0..pentagon_rotations {
        out = out.rotate_pent60_ccw();
      }
    } else {
      for _ in 0..pentagon_rotations {
        out = out.rotate60_ccw();
      }
      for _ in 0..base_cell_rotations {
        out = out.rotate60_ccw();
      }
    }
  } else if origin_on_pent && index_on_pent {
    let origin_leading = origin.leading_non_zero_digit() as usize;
    let index_leading = out.leading_non_zero_digit() as usize;

    let within_pentagon_rotations = PENTAGON_ROTATIONS_REVERSE[origin_leading][index_leading];
    if within_pentagon_rotations < 0 {
      return Err(GridError::Failed);
    }
    for _ in 0..within_pentagon_rotations {
      out = out.rotate60_ccw();
    }
  }

  if index_on_pent && out.leading_non_zero_digit() == Direction::K {
    // unfolding cases not handled by the forward direction are caught
    // here as an invalid recovered index
    return Err(GridError::DeletedKSubsequence);
  }

  out.set_base_cell(base_cell);
  Ok(out)
}

/// Produces two-axis IJ coordinates for `index` anchored at `origin`.
/// Coordinates are only comparable when produced from the same origin.
pub fn cell_to_local_ij(origin: CellIndex, index: CellIndex) -> Result<CoordIJ, GridError> {
  Ok(cell_to_local_ijk(origin, index)?.to_ij())
}

/// Produces the cell at two-axis IJ coordinates anchored at `origin`.
pub fn local_ij_to_cell(origin: CellIndex, ij: &CoordIJ) -> Result<CellIndex, GridError> {
  local_ijk_to_cell(origin, &ij.to_ijk())
}

/// Grid distance between two cells: the number of single-cell steps of
/// a shortest path. Fails when the cells cannot be unfolded into one
/// frame.
pub fn grid_distance(origin: CellIndex, index: CellIndex) -> Result<i32, GridError> {
  let origin_ijk = cell_to_local_ijk(origin, origin)?;
  let index_ijk = cell_to_local_ijk(origin, index)?;
  Ok(crate::coords::ijk::ijk_distance(&origin_ijk, &index_ijk))
}

/// Number of cells in the line from `start` to `end`, inclusive.
pub fn grid_line_size(start: CellIndex, end: CellIndex) -> Result<i64, GridError> {
  Ok(i64::from(grid_distance(start, end)?) + 1)
}

/// Rounds fractional cube coordinates to the nearest cell, recomputing
/// the axis with the largest rounding error from the other two.
fn cube_round(i: f64, j: f64, k: f64) -> CoordIJK {
  let mut ri = i.round();
  let mut rj = j.round();
  let mut rk = k.round();

  let i_diff = (ri - i).abs();
  let j_diff = (rj - j).abs();
  let k_diff = (rk - k).abs();

  if i_diff > j_diff && i_diff > k_diff {
    ri = -rj - rk;
  } else if j_diff > k_diff {
    rj = -ri - rk;
  } else {
    rk = -ri - rj;
  }

  CoordIJK {
    i: ri as i32,
    j: rj as i32,
    k: rk as i32,
  }
}

/// The line of cells from `start` to `end`, inclusive: linear
/// interpolation in cube coordinates, one cell per unit distance.
/// Length is `grid_distance(start, end) + 1` and consecutive cells are
/// neighbors; the exact cells chosen between the endpoints are
/// otherwise unspecified.
pub fn grid_line(start: CellIndex, end: CellIndex) -> Result<Vec<CellIndex>, GridError> {
  let distance = grid_distance(start, end)?;

  let mut start_ijk = cell_to_local_ijk(start, start)?;
  let mut end_ijk = cell_to_local_ijk(start, end)?;

  start_ijk.to_cube();
  end_ijk.to_cube();

  let (i_step, j_step, k_step) = if distance > 0 {
    let d = f64::from(distance);
    (
      f64::from(end_ijk.i - start_ijk.i) / d,
      f64::from(end_ijk.j - start_ijk.j) / d,
      f64::from(end_ijk.k - start_ijk.k) / d,
    )
  } else {
    (0.0, 0.0, 0.0)
  };

  let mut out = Vec::with_capacity(distance as usize + 1);
  for n in 0..=distance {
    let n = f64::from(n);
    let mut current = cube_round(
      f64::from(start_ijk.i) + i_step * n,
      f64::from(start_ijk.j) + j_step * n,
      f64::from(start_ijk.k) + k_step * n,
    );
    current.from_cube();
    out.push(local_ijk_to_cell(start, &current)?);
  }

  Ok(out)
}
