//! Spherical coordinate helpers: angle normalization, azimuths and
//! great-circle arithmetic.

use crate::constants::{EARTH_RADIUS_KM, EPSILON, EPSILON_RAD, M_180_PI, M_2PI, M_PI, M_PI_180, M_PI_2};
use crate::types::GeoCoord;

/// Converts decimal degrees to radians.
#[inline]
#[must_use]
pub fn degs_to_rads(degrees: f64) -> f64 {
  degrees * M_PI_180
}

/// Converts radians to decimal degrees.
#[inline]
#[must_use]
pub fn rads_to_degs(radians: f64) -> f64 {
  radians * M_180_PI
}

/// Normalizes an angle in radians into [0, 2pi).
#[inline]
#[must_use]
pub(crate) fn pos_angle_rads(rads: f64) -> f64 {
  let mut tmp = if rads < 0.0 { rads + M_2PI } else { rads };
  if rads >= M_2PI {
    tmp -= M_2PI;
  }
  tmp
}

/// Constrains a longitude to [-pi, pi].
#[inline]
#[must_use]
pub(crate) fn constrain_lng(mut lng: f64) -> f64 {
  while lng > M_PI {
    lng -= M_2PI;
  }
  while lng < -M_PI {
    lng += M_2PI;
  }
  lng
}

/// Whether two coordinates are within `threshold` of each other on both
/// components.
#[inline]
#[must_use]
pub fn geo_almost_equal_threshold(a: &GeoCoord, b: &GeoCoord, threshold: f64) -> bool {
  (a.lat - b.lat).abs() < threshold && (a.lon - b.lon).abs() < threshold
}

/// Whether two coordinates are within the standard ~0.1mm epsilon.
#[inline]
#[must_use]
pub fn geo_almost_equal(a: &GeoCoord, b: &GeoCoord) -> bool {
  geo_almost_equal_threshold(a, b, EPSILON_RAD)
}

/// Great-circle distance between two points in radians, by the
/// haversine formula.
#[must_use]
pub fn great_circle_distance_rads(a: &GeoCoord, b: &GeoCoord) -> f64 {
  let sin_lat = ((b.lat - a.lat) / 2.0).sin();
  let sin_lng = ((b.lon - a.lon) / 2.0).sin();

  let h = sin_lat * sin_lat + a.lat.cos() * b.lat.cos() * sin_lng * sin_lng;

  2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Great-circle distance between two points in kilometers.
#[must_use]
pub fn great_circle_distance_km(a: &GeoCoord, b: &GeoCoord) -> f64 {
  great_circle_distance_rads(a, b) * EARTH_RADIUS_KM
}

/// Great-circle distance between two points in meters.
#[must_use]
pub fn great_circle_distance_m(a: &GeoCoord, b: &GeoCoord) -> f64 {
  great_circle_distance_km(a, b) * 1000.0
}

/// Azimuth from `p1` to `p2` in radians.
#[must_use]
pub(crate) fn geo_azimuth_rads(p1: &GeoCoord, p2: &GeoCoord) -> f64 {
  (p2.lat.cos() * (p2.lon - p1.lon).sin())
    .atan2(p1.lat.cos() * p2.lat.sin() - p1.lat.sin() * p2.lat.cos() * (p2.lon - p1.lon).cos())
}

/// Computes the point at the given azimuth and great-circle distance
/// from `p1`.
pub(crate) fn geo_az_distance_rads(p1: &GeoCoord, az: f64, distance: f64) -> GeoCoord {
  if distance < EPSILON {
    return *p1;
  }

  let az = pos_angle_rads(az);
  let mut p2 = GeoCoord::default();

  if az < EPSILON || (az - M_PI).abs() < EPSILON {
    // due north or south
    p2.lat = if az < EPSILON {
      p1.lat + distance
    } else {
      p1.lat - distance
    };

    if (p2.lat - M_PI_2).abs() < EPSILON {
      p2.lat = M_PI_2;
      p2.lon = 0.0;
    } else if (p2.lat + M_PI_2).abs() < EPSILON {
      p2.lat = -M_PI_2;
      p2.lon = 0.0;
    } else {
      p2.lon = constrain_lng(p1.lon);
    }
  } else {
    let sinlat = (p1.lat.sin() * distance.cos() + p1.lat.cos() * distance.sin() * az.cos()).clamp(-1.0, 1.0);
    p2.lat = sinlat.asin();

    if (p2.lat - M_PI_2).abs() < EPSILON {
      p2.lat = M_PI_2;
      p2.lon = 0.0;
    } else if (p2.lat + M_PI_2).abs() < EPSILON {
      p2.lat = -M_PI_2;
      p2.lon = 0.0;
    } else {
      let sinlon = (az.sin() * distance.sin() / p2.lat.cos()).clamp(-1.0, 1.0);
      let coslon = ((distance.cos() - p1.lat.sin() * p2.lat.sin()) / p1.lat.cos() / p2.lat.cos()).clamp(-1.0, 1.0);
      p2.lon = constrain_lng(p1.lon + sinlon.atan2(coslon));
    }
  }

  p2
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn angle_normalization() {
    assert!((pos_angle_rads(-M_PI) - M_PI).abs() < f64::EPSILON);
    assert!(pos_angle_rads(M_2PI).abs() < f64::EPSILON);
    assert!((pos_angle_rads(1.0) - 1.0).abs() < f64::EPSILON);
  }

  #[test]
  fn degree_radian_round_trip() {
    for degs in [-180.0, -90.0, 0.0, 45.0, 179.9] {
      assert!((rads_to_degs(degs_to_rads(degs)) - degs).abs() < 1e-12);
    }
  }

  #[test]
  fn haversine_distance() {
    let a = GeoCoord { lat: 0.0, lon: 0.0 };
    let b = GeoCoord { lat: 0.0, lon: M_PI_2 };
    // a quarter of the equator
    assert!((great_circle_distance_rads(&a, &b) - M_PI_2).abs() < 1e-12);
    assert!(great_circle_distance_rads(&a, &a).abs() < 1e-12);
  }

  #[test]
  fn azimuth_distance_round_trip() {
    let start = GeoCoord {
      lat: degs_to_rads(37.0),
      lon: degs_to_rads(-122.0),
    };
    let az = 1.1;
    let dist = 0.02;

    let end = geo_az_distance_rads(&start, az, dist);
    assert!((great_circle_distance_rads(&start, &end) - dist).abs() < 1e-9);
    assert!((geo_azimuth_rads(&start, &end) - az).abs() < 1e-6);
  }

  #[test]
  fn due_north_hits_pole() {
    let start = GeoCoord {
      lat: M_PI_2 - 0.01,
      lon: 1.0,
    };
    let end = geo_az_distance_rads(&start, 0.0, 0.01);
    assert!((end.lat - M_PI_2).abs() < 1e-12);
    assert!(end.lon.abs() < f64::EPSILON);
  }
}
