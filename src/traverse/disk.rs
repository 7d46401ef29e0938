//! Filled and hollow k-ring neighborhoods.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::error::GridError;
use crate::traverse::neighbor::neighbor_rotations;
use crate::types::{CellIndex, Direction};

/// Traversal order CCW around `{1, 0, 0}`; one side of the ring per
/// direction.
const DIRECTIONS: [Direction; 6] = [
  Direction::J,
  Direction::Jk,
  Direction::K,
  Direction::Ik,
  Direction::I,
  Direction::Ij,
];

/// Direction used to move one ring outward.
const NEXT_RING_DIRECTION: Direction = Direction::I;

/// Maximum number of cells within grid distance `k` of any cell:
/// 1 + 3k(k+1).
pub fn max_k_ring_size(k: i32) -> Result<i64, GridError> {
  if k < 0 {
    return Err(GridError::Domain);
  }
  let k = i64::from(k);
  Ok(3 * k * (k + 1) + 1)
}

/// All cells within grid distance `k` of the origin, the origin
/// included. Pentagon distortion is handled; ordering is unspecified.
pub fn k_ring(origin: CellIndex, k: i32) -> Result<Vec<CellIndex>, GridError> {
  Ok(k_ring_distances(origin, k)?.into_iter().map(|(cell, _)| cell).collect())
}

/// All cells within grid distance `k` of the origin, each with its
/// grid distance from the origin.
pub fn k_ring_distances(origin: CellIndex, k: i32) -> Result<Vec<(CellIndex, i32)>, GridError> {
  max_k_ring_size(k)?;
  if !origin.is_valid() {
    return Err(GridError::CellInvalid);
  }

  // the spiral fast path fails on pentagon distortion; fall back to
  // the BFS that walks around it
  if let Ok(spiral) = hex_range_distances(origin, k) {
    return Ok(spiral);
  }

  let mut found: HashMap<CellIndex, i32> = HashMap::with_capacity(max_k_ring_size(k)? as usize);
  k_ring_internal(origin, k, 0, &mut found);

  let mut out: Vec<(CellIndex, i32)> = found.into_iter().collect();
  out.sort_unstable_by_key(|&(cell, dist)| (dist, cell));
  Ok(out)
}

/// Depth-first accumulation of the neighborhood; a cell is revisited
/// only when a shorter path to it appears.
fn k_ring_internal(origin: CellIndex, k: i32, current_k: i32, found: &mut HashMap<CellIndex, i32>) {
  match found.entry(origin) {
    Entry::Occupied(mut e) => {
      if *e.get() <= current_k {
        return;
      }
      e.insert(current_k);
    }
    Entry::Vacant(e) => {
      e.insert(current_k);
    }
  }

  if current_k >= k {
    return;
  }

  for dir in DIRECTIONS {
    let mut rotations = 0;
    match neighbor_rotations(origin, dir, &mut rotations) {
      Ok(neighbor) => k_ring_internal(neighbor, k, current_k + 1, found),
      // walking into a deleted pentagon direction: nothing there
      Err(GridError::Pentagon) => {}
      Err(_) => {}
    }
  }
}

/// Cells within grid distance `k` in outward spiral order, failing
/// with [`GridError::Pentagon`] when a pentagon (whose distortion the
/// spiral cannot cross) is encountered.
pub fn hex_range(origin: CellIndex, k: i32) -> Result<Vec<CellIndex>, GridError> {
  Ok(hex_range_distances(origin, k)?.into_iter().map(|(cell, _)| cell).collect())
}

/// [`hex_range`] with each cell's ring number.
pub fn hex_range_distances(origin: CellIndex, k: i32) -> Result<Vec<(CellIndex, i32)>, GridError> {
  let size = max_k_ring_size(k)? as usize;
  let mut out = Vec::with_capacity(size);

  let mut current = origin;
  out.push((current, 0));

  if current.is_pentagon() {
    return Err(GridError::Pentagon);
  }

  let mut ring = 1;
  let mut direction = 0;
  let mut pos = 0;
  // accumulated frame rotations from crossed faces
  let mut rotations = 0;

  while ring <= k {
    if direction == 0 && pos == 0 {
      // move out to the start of the next ring
      current = neighbor_rotations(current, NEXT_RING_DIRECTION, &mut rotations)?;
      if current.is_pentagon() {
        return Err(GridError::Pentagon);
      }
    }

    current = neighbor_rotations(current, DIRECTIONS[direction], &mut rotations)?;
    out.push((current, ring));

    pos += 1;
    if pos == ring {
      pos = 0;
      direction += 1;
      if direction == 6 {
        direction = 0;
        ring += 1;
      }
    }

    if current.is_pentagon() {
      return Err(GridError::Pentagon);
    }
  }

  Ok(out)
}

/// The hollow ring of cells at exactly grid distance `k`, failing with
/// [`GridError::Pentagon`] when a pentagon is encountered.
pub fn hex_ring(origin: CellIndex, k: i32) -> Result<Vec<CellIndex>, GridError> {
  if k < 0 {
    return Err(GridError::Domain);
  }
  if k == 0 {
    return Ok(vec![origin]);
  }

  let mut out = Vec::with_capacity(6 * k as usize);
  let mut rotations = 0;
  let mut current = origin;

  if current.is_pentagon() {
    return Err(GridError::Pentagon);
  }

  for _ in 0..k {
    current = neighbor_rotations(current, NEXT_RING_DIRECTION, &mut rotations)?;
    if current.is_pentagon() {
      return Err(GridError::Pentagon);
    }
  }

  out.push(current);

  for direction in 0..6 {
    for pos in 0..k {
      current = neighbor_rotations(current, DIRECTIONS[direction], &mut rotations)?;

      // the last step returns to the start, which is already recorded,
      // but still has to be walked for the pentagon check
      if pos != k - 1 || direction != 5 {
        out.push(current);
        if current.is_pentagon() {
          return Err(GridError::Pentagon);
        }
      }
    }
  }

  Ok(out)
}
