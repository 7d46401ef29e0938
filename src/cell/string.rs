//! Lowercase-hex wire form of the 64-bit index word.

use crate::error::GridError;
use crate::types::CellIndex;

/// Formats an index as lowercase hex, without a leading `0x`.
#[must_use]
pub fn cell_to_string(cell: CellIndex) -> String {
  format!("{:x}", cell.0)
}

/// Parses the lowercase-hex wire form of an index. Accepts any 64-bit
/// hex string; validity of the parsed index is a separate question.
pub fn cell_from_string(s: &str) -> Result<CellIndex, GridError> {
  if s.is_empty() {
    return Err(GridError::Failed);
  }
  u64::from_str_radix(s, 16).map(CellIndex).map_err(|_| GridError::Failed)
}
