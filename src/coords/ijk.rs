//! Balanced three-axis integer coordinates and their planar hex
//! projection.
//!
//! Normalized IJK+ coordinates keep every component non-negative with
//! the minimum component at zero. The aperture transforms move a
//! coordinate between the nested resolutions of the grid; the `r`
//! variants are the clockwise (Class II) versions of the
//! counter-clockwise maps.

use crate::constants::{M_ONESEVENTH, M_RSIN60, M_SQRT3_2};
use crate::types::{CoordIJ, CoordIJK, Direction, Vec2d};

/// Unit vectors for the seven path digits, indexed by digit value.
#[rustfmt::skip]
pub(crate) static UNIT_VECS: [CoordIJK; 7] = [
  CoordIJK { i: 0, j: 0, k: 0 }, // Center
  CoordIJK { i: 0, j: 0, k: 1 }, // K
  CoordIJK { i: 0, j: 1, k: 0 }, // J
  CoordIJK { i: 0, j: 1, k: 1 }, // Jk
  CoordIJK { i: 1, j: 0, k: 0 }, // I
  CoordIJK { i: 1, j: 0, k: 1 }, // Ik
  CoordIJK { i: 1, j: 1, k: 0 }, // Ij
];

impl CoordIJK {
  /// Builds a coordinate from components.
  #[inline]
  #[must_use]
  pub(crate) const fn new(i: i32, j: i32, k: i32) -> Self {
    Self { i, j, k }
  }

  /// Component-wise sum.
  #[inline]
  #[must_use]
  pub(crate) fn add(&self, other: &CoordIJK) -> CoordIJK {
    CoordIJK::new(self.i + other.i, self.j + other.j, self.k + other.k)
  }

  /// Component-wise difference.
  #[inline]
  #[must_use]
  pub(crate) fn sub(&self, other: &CoordIJK) -> CoordIJK {
    CoordIJK::new(self.i - other.i, self.j - other.j, self.k - other.k)
  }

  /// Uniformly scales the coordinate in place.
  #[inline]
  pub(crate) fn scale(&mut self, factor: i32) {
    self.i *= factor;
    self.j *= factor;
    self.k *= factor;
  }

  /// Normalizes in place: removes negative components by shifting them
  /// onto the other two axes, then subtracts the minimum component.
  /// Idempotent.
  pub(crate) fn normalize(&mut self) {
    if self.i < 0 {
      self.j -= self.i;
      self.k -= self.i;
      self.i = 0;
    }
    if self.j < 0 {
      self.i -= self.j;
      self.k -= self.j;
      self.j = 0;
    }
    if self.k < 0 {
      self.i -= self.k;
      self.j -= self.k;
      self.k = 0;
    }

    let min = self.i.min(self.j).min(self.k);
    if min > 0 {
      self.i -= min;
      self.j -= min;
      self.k -= min;
    }
  }

  /// The digit whose unit vector equals this coordinate after
  /// normalization, or [`Direction::Invalid`] for non-unit input.
  #[must_use]
  pub(crate) fn unit_to_digit(&self) -> Direction {
    let mut c = *self;
    c.normalize();

    for (digit, unit) in UNIT_VECS.iter().enumerate() {
      if c == *unit {
        // the table index is a valid digit by construction
        return Direction::try_from(digit as u8).unwrap_or(Direction::Invalid);
      }
    }
    Direction::Invalid
  }

  /// Steps to the neighboring hex in the given digit direction,
  /// normalizing afterward. Center and invalid digits are no-ops.
  pub(crate) fn neighbor(&mut self, digit: Direction) {
    if digit != Direction::Center && digit != Direction::Invalid {
      *self = self.add(&UNIT_VECS[digit as usize]);
      self.normalize();
    }
  }

  /// Rotates 60 degrees counter-clockwise in place.
  pub(crate) fn rotate60_ccw(&mut self) {
    self.axis_substitution(
      &CoordIJK::new(1, 1, 0), // i-axis image
      &CoordIJK::new(0, 1, 1), // j-axis image
      &CoordIJK::new(1, 0, 1), // k-axis image
    );
  }

  /// Rotates 60 degrees clockwise in place.
  pub(crate) fn rotate60_cw(&mut self) {
    self.axis_substitution(&CoordIJK::new(1, 0, 1), &CoordIJK::new(1, 1, 0), &CoordIJK::new(0, 1, 1));
  }

  /// Moves to the centered hex one aperture 7 counter-clockwise
  /// resolution finer. (Class III step.)
  pub(crate) fn down_ap7(&mut self) {
    self.axis_substitution(&CoordIJK::new(3, 0, 1), &CoordIJK::new(1, 3, 0), &CoordIJK::new(0, 1, 3));
  }

  /// Moves to the centered hex one aperture 7 clockwise resolution
  /// finer. (Class II step.)
  pub(crate) fn down_ap7r(&mut self) {
    self.axis_substitution(&CoordIJK::new(3, 1, 0), &CoordIJK::new(0, 3, 1), &CoordIJK::new(1, 0, 3));
  }

  /// Moves to the centered hex one aperture 3 counter-clockwise
  /// resolution finer; used only to build substrate vertex grids.
  pub(crate) fn down_ap3(&mut self) {
    self.axis_substitution(&CoordIJK::new(2, 0, 1), &CoordIJK::new(1, 2, 0), &CoordIJK::new(0, 1, 2));
  }

  /// Moves to the centered hex one aperture 3 clockwise resolution
  /// finer; used only to build substrate vertex grids.
  pub(crate) fn down_ap3r(&mut self) {
    self.axis_substitution(&CoordIJK::new(2, 1, 0), &CoordIJK::new(0, 2, 1), &CoordIJK::new(1, 0, 2));
  }

  /// Moves to the indexing parent in a counter-clockwise aperture 7
  /// grid, rounding to the nearest lattice cell. (Class III step.)
  pub(crate) fn up_ap7(&mut self) {
    let i = self.i - self.k;
    let j = self.j - self.k;

    self.i = (f64::from(3 * i - j) * M_ONESEVENTH).round() as i32;
    self.j = (f64::from(i + 2 * j) * M_ONESEVENTH).round() as i32;
    self.k = 0;
    self.normalize();
  }

  /// Moves to the indexing parent in a clockwise aperture 7 grid,
  /// rounding to the nearest lattice cell. (Class II step.)
  pub(crate) fn up_ap7r(&mut self) {
    let i = self.i - self.k;
    let j = self.j - self.k;

    self.i = (f64::from(2 * i + j) * M_ONESEVENTH).round() as i32;
    self.j = (f64::from(3 * j - i) * M_ONESEVENTH).round() as i32;
    self.k = 0;
    self.normalize();
  }

  /// Rewrites the coordinate as `i*iv + j*jv + k*kv`, normalized.
  fn axis_substitution(&mut self, iv: &CoordIJK, jv: &CoordIJK, kv: &CoordIJK) {
    let mut iv = *iv;
    let mut jv = *jv;
    let mut kv = *kv;
    iv.scale(self.i);
    jv.scale(self.j);
    kv.scale(self.k);

    *self = iv.add(&jv).add(&kv);
    self.normalize();
  }

  /// Center point of the hex in 2D Cartesian coordinates.
  #[inline]
  #[must_use]
  pub(crate) fn to_hex2d(&self) -> Vec2d {
    let i = self.i - self.k;
    let j = self.j - self.k;

    Vec2d {
      x: f64::from(i) - 0.5 * f64::from(j),
      y: f64::from(j) * M_SQRT3_2,
    }
  }

  /// Drops the redundant axis, producing IJ coordinates.
  #[inline]
  #[must_use]
  pub(crate) fn to_ij(&self) -> CoordIJ {
    CoordIJ {
      i: self.i - self.k,
      j: self.j - self.k,
    }
  }

  /// Converts to cube coordinates (i + j + k = 0) in place.
  #[inline]
  pub(crate) fn to_cube(&mut self) {
    self.i = -self.i + self.k;
    self.j -= self.k;
    self.k = -self.i - self.j;
  }

  /// Converts cube coordinates back to normalized IJK+ in place.
  #[inline]
  pub(crate) fn from_cube(&mut self) {
    self.i = -self.i;
    self.k = 0;
    self.normalize();
  }
}

impl CoordIJ {
  /// Lifts IJ coordinates into normalized IJK+.
  #[inline]
  #[must_use]
  pub(crate) fn to_ijk(&self) -> CoordIJK {
    let mut ijk = CoordIJK::new(self.i, self.j, 0);
    ijk.normalize();
    ijk
  }
}

/// Grid distance between two coordinates: the largest absolute
/// component of the normalized difference.
#[must_use]
pub(crate) fn ijk_distance(a: &CoordIJK, b: &CoordIJK) -> i32 {
  let mut diff = a.sub(b);
  diff.normalize();
  diff.i.abs().max(diff.j.abs()).max(diff.k.abs())
}

/// Finds the containing hex of a 2D Cartesian point in IJK+
/// coordinates, by quantizing into the ij lattice and case-splitting on
/// the fractional triangle (after DGGRID).
pub(crate) fn hex2d_to_ijk(v: &Vec2d) -> CoordIJK {
  let mut h = CoordIJK::default();

  let a1 = v.x.abs();
  let a2 = v.y.abs();

  // reverse conversion into lattice units
  let x2 = a2 * M_RSIN60;
  let x1 = a1 + x2 / 2.0;

  let m1 = x1 as i32;
  let m2 = x2 as i32;

  let r1 = x1 - f64::from(m1);
  let r2 = x2 - f64::from(m2);

  if r1 < 0.5 {
    if r1 < 1.0 / 3.0 {
      h.i = m1;
      h.j = if r2 < (1.0 + r1) / 2.0 { m2 } else { m2 + 1 };
    } else {
      h.j = if r2 < (1.0 - r1) { m2 } else { m2 + 1 };
      h.i = if (1.0 - r1) <= r2 && r2 < (2.0 * r1) { m1 + 1 } else { m1 };
    }
  } else if r1 < 2.0 / 3.0 {
    h.j = if r2 < (1.0 - r1) { m2 } else { m2 + 1 };
    h.i = if (2.0 * r1 - 1.0) < r2 && r2 < (1.0 - r1) { m1 } else { m1 + 1 };
  } else {
    h.i = m1 + 1;
    h.j = if r2 < (r1 / 2.0) { m2 } else { m2 + 1 };
  }

  // fold across the axes if the input was in a mirrored quadrant
  if v.x < 0.0 {
    if (h.j % 2) == 0 {
      let axisi = i64::from(h.j) / 2;
      let diff = i64::from(h.i) - axisi;
      h.i = (i64::from(h.i) - 2 * diff) as i32;
    } else {
      let axisi = (i64::from(h.j) + 1) / 2;
      let diff = i64::from(h.i) - axisi;
      h.i = (i64::from(h.i) - (2 * diff + 1)) as i32;
    }
  }

  if v.y < 0.0 {
    h.i -= (2 * h.j + 1) / 2;
    h.j = -h.j;
  }

  h.normalize();
  h
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn normalize_examples() {
    let mut c = CoordIJK::new(2, 3, 4);
    c.normalize();
    assert_eq!(c, CoordIJK::new(0, 1, 2));

    let mut c = CoordIJK::new(-2, -3, -4);
    c.normalize();
    assert_eq!(c, CoordIJK::new(2, 1, 0));

    let mut c = CoordIJK::new(2, -1, 0);
    c.normalize();
    assert_eq!(c, CoordIJK::new(3, 0, 1));

    // idempotent
    let mut again = c;
    again.normalize();
    assert_eq!(again, c);
  }

  #[test]
  fn unit_vectors_map_to_digits() {
    for (value, unit) in UNIT_VECS.iter().enumerate() {
      assert_eq!(unit.unit_to_digit() as usize, value);
    }
    // scaled copies of the center normalize back to the center digit
    assert_eq!(CoordIJK::new(2, 2, 2).unit_to_digit(), Direction::Center);
    // unnormalized K
    assert_eq!(CoordIJK::new(1, 1, 2).unit_to_digit(), Direction::K);
    // not a unit vector
    assert_eq!(CoordIJK::new(2, 0, 0).unit_to_digit(), Direction::Invalid);
  }

  #[test]
  fn neighbor_steps() {
    let mut c = CoordIJK::default();
    c.neighbor(Direction::I);
    assert_eq!(c, UNIT_VECS[Direction::I as usize]);

    let mut c = CoordIJK::default();
    c.neighbor(Direction::Center);
    assert_eq!(c, CoordIJK::default());
    c.neighbor(Direction::Invalid);
    assert_eq!(c, CoordIJK::default());
  }

  #[test]
  fn rotations_are_inverse() {
    let mut c = CoordIJK::new(4, 1, 0);
    let orig = c;
    c.rotate60_ccw();
    assert_ne!(c, orig);
    c.rotate60_cw();
    assert_eq!(c, orig);

    // six CCW rotations are the identity
    let mut c = CoordIJK::new(2, 0, 1);
    for _ in 0..6 {
      c.rotate60_ccw();
    }
    assert_eq!(c, CoordIJK::new(2, 0, 1));
  }

  #[test]
  fn aperture7_round_trips() {
    // the center-of-cell round trip is exact in both classes
    for start in [CoordIJK::new(0, 0, 0), CoordIJK::new(3, 1, 0), CoordIJK::new(5, 0, 2)] {
      let mut c = start;
      c.down_ap7();
      c.up_ap7();
      assert_eq!(c, start, "ccw round trip from {start:?}");

      let mut c = start;
      c.down_ap7r();
      c.up_ap7r();
      assert_eq!(c, start, "cw round trip from {start:?}");
    }
  }

  #[test]
  fn hex2d_round_trips() {
    for ijk in [
      CoordIJK::new(0, 0, 0),
      CoordIJK::new(1, 0, 0),
      CoordIJK::new(0, 3, 1),
      CoordIJK::new(7, 2, 0),
    ] {
      let v = ijk.to_hex2d();
      let mut back = hex2d_to_ijk(&v);
      back.normalize();
      let mut want = ijk;
      want.normalize();
      assert_eq!(back, want, "round trip through hex2d for {ijk:?}");
    }
  }

  #[test]
  fn distances() {
    let origin = CoordIJK::default();
    assert_eq!(ijk_distance(&origin, &origin), 0);
    assert_eq!(ijk_distance(&origin, &UNIT_VECS[Direction::Ij as usize]), 1);

    let mut far = CoordIJK::new(4, 0, 0);
    far.normalize();
    assert_eq!(ijk_distance(&origin, &far), 4);
    assert_eq!(ijk_distance(&far, &origin), 4);
  }

  #[test]
  fn ij_and_cube_round_trips() {
    for ijk in [CoordIJK::new(0, 0, 0), CoordIJK::new(1, 2, 0), CoordIJK::new(0, 0, 5)] {
      let ij = ijk.to_ij();
      let mut want = ijk;
      want.normalize();
      assert_eq!(ij.to_ijk(), want);

      let mut cube = ijk;
      cube.to_cube();
      assert_eq!(cube.i + cube.j + cube.k, 0, "cube coords sum to zero");
      cube.from_cube();
      assert_eq!(cube, want);
    }
  }
}
