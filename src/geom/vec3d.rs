//! 3D vectors on the unit sphere.

use crate::types::{GeoCoord, Vec3d};

#[inline]
fn square(x: f64) -> f64 {
  x * x
}

/// Squared Euclidean distance between two 3D points.
#[inline]
#[must_use]
pub(crate) fn point_square_dist(a: &Vec3d, b: &Vec3d) -> f64 {
  square(a.x - b.x) + square(a.y - b.y) + square(a.z - b.z)
}

/// Projects a latitude/longitude onto the unit sphere.
#[inline]
pub(crate) fn geo_to_vec3d(geo: &GeoCoord) -> Vec3d {
  let r = geo.lat.cos();
  Vec3d {
    x: geo.lon.cos() * r,
    y: geo.lon.sin() * r,
    z: geo.lat.sin(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::constants::M_PI_2;

  #[test]
  fn squared_distances() {
    let origin = Vec3d::default();
    let x1 = Vec3d { x: 1.0, y: 0.0, z: 0.0 };
    let yz = Vec3d { x: 0.0, y: 1.0, z: 1.0 };

    assert!(point_square_dist(&origin, &origin).abs() < f64::EPSILON);
    assert!((point_square_dist(&origin, &x1) - 1.0).abs() < f64::EPSILON);
    assert!((point_square_dist(&origin, &yz) - 2.0).abs() < f64::EPSILON);
  }

  #[test]
  fn sphere_projection() {
    let equator = geo_to_vec3d(&GeoCoord { lat: 0.0, lon: 0.0 });
    assert!((equator.x - 1.0).abs() < f64::EPSILON);
    assert!(equator.y.abs() < f64::EPSILON);
    assert!(equator.z.abs() < f64::EPSILON);

    let north_pole = geo_to_vec3d(&GeoCoord { lat: M_PI_2, lon: 0.0 });
    assert!(north_pole.x.abs() < f64::EPSILON);
    assert!((north_pole.z - 1.0).abs() < f64::EPSILON);

    // any projection lands on the unit sphere
    let p = geo_to_vec3d(&GeoCoord { lat: 0.7, lon: -2.1 });
    assert!((point_square_dist(&Vec3d::default(), &p) - 1.0).abs() < 1e-15);
  }
}
