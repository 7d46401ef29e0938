//! Failure categories reported by the public API.

use thiserror::Error;

/// Every failure the grid system can report. Operations return these on
/// `Result` rather than panicking; internal table or math invariant
/// violations surface as [`GridError::Failed`] so they can never
/// corrupt output silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[non_exhaustive]
pub enum GridError {
  /// The operation failed for a reason with no more specific category.
  #[error("operation failed")]
  Failed,
  /// An argument was outside its acceptable range.
  #[error("argument out of range")]
  Domain,
  /// A latitude or longitude argument was not a usable coordinate.
  #[error("latitude or longitude out of range")]
  CoordDomain,
  /// A resolution argument was outside 0..=15.
  #[error("resolution out of range")]
  ResDomain,
  /// A cell index argument was not a valid cell.
  #[error("invalid cell index")]
  CellInvalid,
  /// An edge index argument was not a valid uni-directional edge.
  #[error("invalid edge index")]
  EdgeInvalid,
  /// Pentagon distortion that the algorithm does not handle was
  /// encountered, including unfoldings refused by the failed-direction
  /// table.
  #[error("pentagon distortion encountered")]
  Pentagon,
  /// A traversal landed in the deleted K subsequence of a pentagon.
  #[error("deleted pentagon subsequence")]
  DeletedKSubsequence,
  /// Two cells required to be neighbors were not.
  #[error("cells are not neighbors")]
  NotNeighbors,
  /// Cell arguments had incompatible resolutions.
  #[error("mismatched resolutions")]
  ResMismatch,
  /// A duplicate cell appeared in an input set that requires distinct
  /// cells.
  #[error("duplicate input cell")]
  DuplicateInput,
  /// Compaction failed to converge within the resolution ladder.
  #[error("compaction did not converge")]
  CompactLoopExceeded,
  /// A caller-provided buffer was too small for the result.
  #[error("output buffer too small")]
  MemoryBounds,
}
