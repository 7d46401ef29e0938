//! Lossless compaction of uniform-resolution cell sets.

use std::collections::HashMap;

use crate::constants::MAX_RES;
use crate::error::GridError;
use crate::hierarchy::parent_child::{cell_to_children, cell_to_children_size, cell_to_parent, is_valid_child_res};
use crate::types::{CellIndex, NULL_CELL};

/// Compacts a set of cells of one common resolution: any parent whose
/// full complement of children is present (seven, six for pentagons) is
/// promoted, repeatedly, until no promotion applies. The output covers
/// exactly the same area with the minimum number of cells.
///
/// Fails with [`GridError::ResMismatch`] on mixed input resolutions,
/// [`GridError::DuplicateInput`] on repeated cells, and
/// [`GridError::CellInvalid`] on invalid ones.
pub fn compact(cells: &[CellIndex]) -> Result<Vec<CellIndex>, GridError> {
  let input: Vec<CellIndex> = cells.iter().copied().filter(|&c| c != NULL_CELL).collect();
  if input.is_empty() {
    return Ok(Vec::new());
  }

  let res = input[0].resolution();
  for &cell in &input {
    if !cell.is_valid() {
      return Err(GridError::CellInvalid);
    }
    if cell.resolution() != res {
      return Err(GridError::ResMismatch);
    }
  }

  let mut sorted = input.clone();
  if has_duplicates(&mut sorted) {
    return Err(GridError::DuplicateInput);
  }

  if res == 0 {
    // base cells have no parent to promote into
    return Ok(input);
  }

  let mut result: Vec<CellIndex> = Vec::with_capacity(input.len());
  let mut remaining = input;

  // each pass promotes one resolution step, so the ladder bounds the
  // loop; running past it means the tables are corrupt
  let mut passes = 0;
  while !remaining.is_empty() {
    passes += 1;
    if passes > MAX_RES + 1 {
      return Err(GridError::CompactLoopExceeded);
    }

    // fewer than six cells cannot complete any parent
    if remaining.len() < 6 {
      result.append(&mut remaining);
      break;
    }

    let level_res = remaining[0].resolution();
    if level_res == 0 {
      result.append(&mut remaining);
      break;
    }
    let parent_res = level_res - 1;

    // count children per parent; a pentagon parent needs only six, so
    // its count starts one ahead
    let mut child_counts: HashMap<CellIndex, u32> = HashMap::with_capacity(remaining.len());
    for &cell in &remaining {
      let parent = cell_to_parent(cell, parent_res)?;
      let count = child_counts.entry(parent).or_insert_with(|| u32::from(parent.is_pentagon()));
      *count += 1;
      if *count > 7 {
        return Err(GridError::DuplicateInput);
      }
    }

    // cells whose parent is incomplete are final
    for &cell in &remaining {
      let parent = cell_to_parent(cell, parent_res)?;
      if child_counts[&parent] < 7 {
        result.push(cell);
      }
    }

    remaining = child_counts
      .into_iter()
      .filter_map(|(parent, count)| (count == 7).then_some(parent))
      .collect();
  }

  Ok(result)
}

fn has_duplicates(cells: &mut [CellIndex]) -> bool {
  cells.sort_unstable();
  cells.windows(2).any(|w| w[0] == w[1])
}

/// Exact number of cells produced by uncompacting to `res`.
pub fn uncompact_size(cells: &[CellIndex], res: i32) -> Result<i64, GridError> {
  if !(0..=MAX_RES).contains(&res) {
    return Err(GridError::ResDomain);
  }

  let mut count: i64 = 0;
  for &cell in cells {
    if cell == NULL_CELL {
      continue;
    }
    if !is_valid_child_res(cell.resolution(), res) {
      return Err(GridError::ResMismatch);
    }
    count += cell_to_children_size(cell, res)?;
  }
  Ok(count)
}

/// Expands each cell of a compacted set to all of its descendants at
/// `res`. Fails with [`GridError::ResMismatch`] when the input holds a
/// cell finer than the target resolution.
pub fn uncompact(cells: &[CellIndex], res: i32) -> Result<Vec<CellIndex>, GridError> {
  let size = uncompact_size(cells, res)?;
  let mut out = Vec::with_capacity(size as usize);

  for &cell in cells {
    if cell == NULL_CELL {
      continue;
    }
    if cell.resolution() == res {
      out.push(cell);
    } else {
      out.extend(cell_to_children(cell, res)?);
    }
  }
  Ok(out)
}
