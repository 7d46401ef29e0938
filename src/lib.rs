#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::similar_names)]

//! `heptile` is a hierarchical hexagonal discrete global grid system.
//!
//! The sphere is tessellated onto an icosahedron with hexagonal cells
//! (and twelve pentagons) at sixteen nested aperture 7 resolutions.
//! Each cell is addressed by a single 64-bit [`CellIndex`] encoding its
//! resolution, base cell and path through the hierarchy, so that
//! point lookup, containment, neighbor walks and set algebra are all
//! integer operations on one word.
//!
//! ```
//! use heptile::{degs_to_rads, geo_to_cell, cell_to_geo, GeoCoord};
//!
//! let paris = GeoCoord {
//!   lat: degs_to_rads(48.8566),
//!   lon: degs_to_rads(2.3522),
//! };
//! let cell = geo_to_cell(&paris, 9).unwrap();
//! assert!(cell.is_valid());
//! let center = cell_to_geo(cell).unwrap();
//! assert_eq!(geo_to_cell(&center, 9).unwrap(), cell);
//! ```

pub mod base_cells;
pub mod bbox;
pub mod cell;
pub mod constants;
pub mod coords;
pub mod edge;
pub mod error;
pub mod geom;
pub mod hierarchy;
pub mod local_ij;
pub mod measures;
pub mod traverse;
pub mod types;
pub mod vertex;

pub use constants::{MAX_BNDRY_VERTS, MAX_RES, NUM_BASE_CELLS, NUM_PENTAGONS};
pub use error::GridError;
pub use types::{BBox, CellIndex, CoordIJ, CoordIJK, Direction, FaceIJK, GeoBoundary, GeoCoord, NULL_CELL};

pub use cell::{
  cell_base_cell, cell_from_string, cell_get_faces, cell_is_pentagon, cell_is_res_class_iii, cell_is_valid,
  cell_resolution, cell_to_boundary, cell_to_geo, cell_to_string, geo_to_cell, max_face_count, num_cells,
  pentagon_count, pentagons, res0_cells,
};
pub use edge::{edge_boundary, edge_cells, edge_destination, edge_is_valid, edge_origin, edges_from_cell, get_edge};
pub use geom::{degs_to_rads, great_circle_distance_km, great_circle_distance_m, great_circle_distance_rads, rads_to_degs};
pub use hierarchy::{
  cell_to_center_child, cell_to_children, cell_to_children_size, cell_to_parent, compact, uncompact, uncompact_size,
};
pub use local_ij::{cell_to_local_ij, grid_distance, grid_line, grid_line_size, local_ij_to_cell};
pub use measures::{
  cell_area_km2, cell_area_m2, cell_area_rads2, edge_length_km, edge_length_m, exact_edge_length_km,
  exact_edge_length_m, exact_edge_length_rads, hex_area_km2, hex_area_m2, max_edge_length_rads,
};
pub use traverse::{are_neighbors, hex_range, hex_range_distances, hex_ring, k_ring, k_ring_distances, max_k_ring_size};
pub use bbox::{bbox_cell_estimate, line_cell_estimate};
