//! Moving between resolutions along the containment hierarchy.

use crate::constants::MAX_RES;
use crate::error::GridError;
use crate::types::{CellIndex, Direction};

/// Whether `child_res` is a valid child resolution of `parent_res`.
/// Every resolution is a child resolution of itself.
#[inline]
#[must_use]
pub(crate) fn is_valid_child_res(parent_res: i32, child_res: i32) -> bool {
  child_res >= parent_res && child_res <= MAX_RES
}

/// The containing cell at `parent_res`: coarsen the resolution and
/// fill the freed digits with the unused sentinel.
pub fn cell_to_parent(cell: CellIndex, parent_res: i32) -> Result<CellIndex, GridError> {
  let child_res = cell.resolution();
  if parent_res > child_res {
    return Err(GridError::ResMismatch);
  }
  if !(0..=MAX_RES).contains(&parent_res) {
    return Err(GridError::ResDomain);
  }
  if parent_res == child_res {
    return Ok(cell);
  }

  let mut parent = cell;
  parent.set_resolution(parent_res);
  for r in parent_res + 1..=child_res {
    parent.set_digit(r, Direction::Invalid);
  }
  Ok(parent)
}

/// The centermost descendant at `child_res`: refine the resolution and
/// fill the new digits with the center.
pub fn cell_to_center_child(cell: CellIndex, child_res: i32) -> Result<CellIndex, GridError> {
  let parent_res = cell.resolution();
  if !is_valid_child_res(parent_res, child_res) {
    return Err(GridError::ResDomain);
  }
  if child_res == parent_res {
    return Ok(cell);
  }

  let mut child = cell;
  child.set_resolution(child_res);
  for r in parent_res + 1..=child_res {
    child.set_digit(r, Direction::Center);
  }
  Ok(child)
}

/// Upper bound on the number of descendants at `child_res`:
/// 7^(child_res - parent_res). Exact for hexagons, an overcount for
/// pentagons.
pub fn cell_to_children_size(cell: CellIndex, child_res: i32) -> Result<i64, GridError> {
  let parent_res = cell.resolution();
  if !is_valid_child_res(parent_res, child_res) {
    return Err(GridError::ResDomain);
  }
  Ok(7i64.pow((child_res - parent_res) as u32))
}

/// The direct child in the given digit slot. Bit surgery only; the
/// caller is responsible for skipping the deleted pentagon digit.
pub(crate) fn direct_child(cell: CellIndex, digit: Direction) -> CellIndex {
  let child_res = cell.resolution() + 1;
  let mut child = cell;
  child.set_resolution(child_res);
  child.set_digit(child_res, digit);
  child
}

/// All descendants of the cell at `child_res`, in path-digit order.
/// Pentagons produce six children per step instead of seven.
pub fn cell_to_children(cell: CellIndex, child_res: i32) -> Result<Vec<CellIndex>, GridError> {
  let parent_res = cell.resolution();
  if !is_valid_child_res(parent_res, child_res) {
    return Err(GridError::ResDomain);
  }

  let mut out = Vec::with_capacity(cell_to_children_size(cell, child_res)? as usize);
  collect_children(cell, child_res, &mut out);
  Ok(out)
}

fn collect_children(cell: CellIndex, child_res: i32, out: &mut Vec<CellIndex>) {
  if cell.resolution() == child_res {
    out.push(cell);
    return;
  }

  let is_pentagon = cell.is_pentagon();
  for digit in 0..7u8 {
    let digit = Direction::try_from(digit).unwrap_or(Direction::Invalid);
    if is_pentagon && digit == Direction::K {
      continue;
    }
    collect_children(direct_child(cell, digit), child_res, out);
  }
}
