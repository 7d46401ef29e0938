//! Single-step movement to an adjacent cell, propagating the direction
//! through the path digits and across base cell boundaries.

use crate::base_cells::{
  base_cell_is_cw_offset, is_base_cell_pentagon, is_base_cell_polar_pentagon, BASE_CELL_DATA, BASE_CELL_NEIGHBORS,
  BASE_CELL_NEIGHBOR_60CCW_ROTS, INVALID_BASE_CELL,
};
use crate::cell::res_is_class_iii;
use crate::constants::CELL_MODE;
use crate::error::GridError;
use crate::types::{CellIndex, Direction};

use Direction::{Center, Ij, Ik, Jk, I, J, K};

/// New digit when moving in a direction from a digit, Class II parent
/// step. (The naming is historical: the Class III resolution applies
/// the `II` table and vice versa.)
#[rustfmt::skip]
const NEW_DIGIT_II: [[Direction; 7]; 7] = [
  [Center, K, J, Jk, I, Ik, Ij],
  [K, I, Jk, Ij, Ik, J, Center],
  [J, Jk, K, I, Ij, Center, Ik],
  [Jk, Ij, I, Ik, Center, K, J],
  [I, Ik, Ij, Center, J, Jk, K],
  [Ik, J, Center, K, Jk, Ij, I],
  [Ij, Center, Ik, J, K, I, Jk],
];

/// Direction to propagate into the coarser digit, Class II parent step;
/// the center means the move is absorbed at this level.
#[rustfmt::skip]
const NEW_ADJUSTMENT_II: [[Direction; 7]; 7] = [
  [Center, Center, Center, Center, Center, Center, Center],
  [Center, K, Center, K, Center, Ik, Center],
  [Center, Center, J, Jk, Center, Center, J],
  [Center, K, Jk, Jk, Center, Center, Center],
  [Center, Center, Center, Center, I, I, Ij],
  [Center, Ik, Center, Center, I, Ik, Center],
  [Center, Center, J, Center, Ij, Center, Ij],
];

/// New digit when moving in a direction from a digit, Class III parent
/// step.
#[rustfmt::skip]
const NEW_DIGIT_III: [[Direction; 7]; 7] = [
  [Center, K, J, Jk, I, Ik, Ij],
  [K, J, Jk, I, Ik, Ij, Center],
  [J, Jk, I, Ik, Ij, Center, K],
  [Jk, I, Ik, Ij, Center, K, J],
  [I, Ik, Ij, Center, K, J, Jk],
  [Ik, Ij, Center, K, J, Jk, I],
  [Ij, Center, K, J, Jk, I, Ik],
];

/// Direction to propagate into the coarser digit, Class III parent
/// step.
#[rustfmt::skip]
const NEW_ADJUSTMENT_III: [[Direction; 7]; 7] = [
  [Center, Center, Center, Center, Center, Center, Center],
  [Center, K, Center, Jk, Center, K, Center],
  [Center, Center, J, J, Center, Center, Ij],
  [Center, Jk, J, Jk, Center, Center, Center],
  [Center, Center, Center, Center, I, Ik, I],
  [Center, K, Center, Center, Ik, Ik, Center],
  [Center, Center, Ij, Center, I, Center, Ij],
];

/// Returns the cell adjacent to `origin` in the given direction.
///
/// `rotations` carries the number of 60 degree CCW rotations of the
/// caller's frame relative to the origin's: the direction is rotated by
/// it on entry, and it is updated with the rotations the move itself
/// introduced, for the caller to compose across a walk.
///
/// Fails with [`GridError::Pentagon`] when the move lands in the
/// deleted K subsequence of a pentagon.
pub(crate) fn neighbor_rotations(
  origin: CellIndex,
  dir: Direction,
  rotations: &mut i32,
) -> Result<CellIndex, GridError> {
  let mut out = origin;
  let mut dir = dir;

  if dir == Direction::Center || dir == Direction::Invalid {
    return Err(GridError::Domain);
  }

  *rotations %= 6;
  for _ in 0..*rotations {
    dir = dir.rotate60_ccw();
  }

  let mut new_rotations = 0;
  let old_base_cell = out.base_cell();
  if old_base_cell >= crate::constants::NUM_BASE_CELLS {
    return Err(GridError::CellInvalid);
  }
  let old_leading_digit = out.leading_non_zero_digit();

  // back-propagate the move through the digits, coarsest-affected last
  let mut r = out.resolution() - 1;
  loop {
    if r == -1 {
      out.set_base_cell(BASE_CELL_NEIGHBORS[old_base_cell as usize][dir as usize]);
      new_rotations = BASE_CELL_NEIGHBOR_60CCW_ROTS[old_base_cell as usize][dir as usize];

      if out.base_cell() == INVALID_BASE_CELL {
        // the deleted K vertex at the base cell level; this edge
        // actually borders the IK neighbor
        out.set_base_cell(BASE_CELL_NEIGHBORS[old_base_cell as usize][Direction::Ik as usize]);
        new_rotations = BASE_CELL_NEIGHBOR_60CCW_ROTS[old_base_cell as usize][Direction::Ik as usize];

        out = out.rotate60_ccw();
        *rotations += 1;
      }

      break;
    }

    let old_digit = out.digit(r + 1);
    if old_digit == Direction::Invalid {
      return Err(GridError::CellInvalid);
    }

    let next_dir = if res_is_class_iii(r + 1) {
      out.set_digit(r + 1, NEW_DIGIT_II[old_digit as usize][dir as usize]);
      NEW_ADJUSTMENT_II[old_digit as usize][dir as usize]
    } else {
      out.set_digit(r + 1, NEW_DIGIT_III[old_digit as usize][dir as usize]);
      NEW_ADJUSTMENT_III[old_digit as usize][dir as usize]
    };

    if next_dir == Direction::Center {
      // the move was absorbed at this level
      break;
    }
    dir = next_dir;
    r -= 1;
  }

  let new_base_cell = out.base_cell();
  if is_base_cell_pentagon(new_base_cell) {
    let mut already_adjusted_k_subsequence = false;

    if out.leading_non_zero_digit() == Direction::K {
      if old_base_cell != new_base_cell {
        // traversed into the deleted K subsequence from a different
        // base cell; how to rotate out depends on which face the walk
        // arrived over
        if base_cell_is_cw_offset(new_base_cell, BASE_CELL_DATA[old_base_cell as usize].home.face) {
          out = out.rotate60_cw();
        } else {
          out = out.rotate60_ccw();
        }
        already_adjusted_k_subsequence = true;
      } else {
        match old_leading_digit {
          // the K direction itself is deleted from the pentagon center
          Direction::Center => return Err(GridError::Pentagon),
          Direction::Jk => {
            out = out.rotate60_ccw();
            *rotations += 1;
          }
          Direction::Ik => {
            out = out.rotate60_cw();
            *rotations += 5;
          }
          _ => return Err(GridError::Failed),
        }
      }
    }

    for _ in 0..new_rotations {
      out = out.rotate_pent60_ccw();
    }

    if old_base_cell != new_base_cell {
      if is_base_cell_polar_pentagon(new_base_cell) {
        // polar pentagons have all-I neighbors
        if old_base_cell != 118 && old_base_cell != 8 && out.leading_non_zero_digit() != Direction::Jk {
          *rotations += 1;
        }
      } else if out.leading_non_zero_digit() == Direction::Ik && !already_adjusted_k_subsequence {
        // distortion introduced to the 5-neighbor by the deleted K
        // subsequence
        *rotations += 1;
      }
    }
  } else {
    for _ in 0..new_rotations {
      out = out.rotate60_ccw();
    }
  }

  *rotations = (*rotations + new_rotations) % 6;
  Ok(out)
}

/// Whether the two cells share an edge. False for identical cells and
/// for any non-cell input.
#[must_use]
pub fn are_neighbors(origin: CellIndex, destination: CellIndex) -> bool {
  if origin.mode() != CELL_MODE || destination.mode() != CELL_MODE {
    return false;
  }
  if !origin.is_valid() || !destination.is_valid() {
    return false;
  }

  if origin == destination {
    return false;
  }

  if origin.resolution() != destination.resolution() {
    return false;
  }

  // Cells under a common parent neighbor each other in a fixed pattern:
  // the center child borders all siblings, each other child borders
  // exactly the two digits beside it on the CW and CCW rings.
  let parent_res = origin.resolution() - 1;
  if parent_res > 0 {
    let origin_parent = origin.parent_bits(parent_res);
    let destination_parent = destination.parent_bits(parent_res);
    if origin_parent == destination_parent {
      let origin_digit = origin.digit(parent_res + 1);
      let destination_digit = destination.digit(parent_res + 1);
      if origin_digit == Direction::Center || destination_digit == Direction::Center {
        return true;
      }

      const NEIGHBOR_SET_CW: [Direction; 7] = [Center, Jk, Ij, J, Ik, K, I];
      const NEIGHBOR_SET_CCW: [Direction; 7] = [Center, Ik, Jk, K, Ij, I, J];
      if NEIGHBOR_SET_CW[origin_digit as usize] == destination_digit
        || NEIGHBOR_SET_CCW[origin_digit as usize] == destination_digit
      {
        return true;
      }
    }
  }

  // the hard way: membership in the distance-1 neighborhood
  match crate::traverse::disk::k_ring(origin, 1) {
    Ok(ring) => ring.contains(&destination),
    Err(_) => false,
  }
}

impl CellIndex {
  /// The index truncated to `parent_res` without resolution-field
  /// validation; cheap parent comparison for the fast path above.
  fn parent_bits(self, parent_res: i32) -> CellIndex {
    let mut p = self;
    p.set_resolution(parent_res);
    for r in parent_res + 1..=self.resolution() {
      p.set_digit(r, Direction::Invalid);
    }
    p
  }
}
