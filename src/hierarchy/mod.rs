//! Parent/child relationships and set compaction across resolutions.

pub(crate) mod compact;
pub(crate) mod parent_child;

pub use compact::{compact, uncompact, uncompact_size};
pub use parent_child::{cell_to_center_child, cell_to_children, cell_to_children_size, cell_to_parent};
