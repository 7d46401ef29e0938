//! Planar and spherical geometry helpers.

pub(crate) mod geodesy;
pub(crate) mod vec2d;
pub(crate) mod vec3d;

pub use geodesy::{
  degs_to_rads, geo_almost_equal, geo_almost_equal_threshold, great_circle_distance_km, great_circle_distance_m,
  great_circle_distance_rads, rads_to_degs,
};
