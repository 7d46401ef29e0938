//! The 64-bit cell index: bit codec, canonical-orientation rotations,
//! conversions to and from face addresses, inspection and the string
//! wire form.

pub(crate) mod codec;
pub(crate) mod convert;
pub(crate) mod inspect;
pub(crate) mod string;

pub use convert::{cell_to_boundary, cell_to_geo, geo_to_cell};
pub use inspect::{
  cell_base_cell, cell_get_faces, cell_is_pentagon, cell_is_res_class_iii, cell_is_valid, cell_resolution,
  max_face_count, num_cells, pentagon_count, pentagons, res0_cells,
};
pub use string::{cell_from_string, cell_to_string};

/// Whether a resolution is Class III (odd). Class III grids are rotated
/// against the icosahedron and their cell edges cross icosahedron
/// edges.
#[inline]
#[must_use]
pub(crate) const fn res_is_class_iii(res: i32) -> bool {
  res % 2 == 1
}
