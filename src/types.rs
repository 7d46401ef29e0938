//! Core value types of the grid system.

use std::fmt;

use crate::constants::MAX_BNDRY_VERTS;
use crate::error::GridError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};

/// A 64-bit cell or edge index. The word packs the mode, the reserved
/// bits, the resolution, the base cell and fifteen 3-bit path digits;
/// see the field accessors on this type for the layout.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CellIndex(pub u64);

/// The null index, used as the error/missing sentinel in index arrays.
pub const NULL_CELL: CellIndex = CellIndex(0);

impl fmt::Display for CellIndex {
  /// Formats the index as its canonical lowercase-hex wire form.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:x}", self.0)
  }
}

/// Latitude/longitude pair in radians.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoCoord {
  /// Latitude in radians.
  pub lat: f64,
  /// Longitude in radians.
  pub lon: f64,
}

/// Cell boundary on the sphere: up to [`MAX_BNDRY_VERTS`] vertices in
/// counter-clockwise order. The polygon is topologically closed; the
/// last vertex connects back to the first.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoBoundary {
  /// Number of significant vertices.
  pub num_verts: usize,
  /// Vertices in CCW order; entries past `num_verts` are meaningless.
  pub verts: [GeoCoord; MAX_BNDRY_VERTS],
}

impl Default for GeoBoundary {
  fn default() -> Self {
    Self {
      num_verts: 0,
      verts: [GeoCoord::default(); MAX_BNDRY_VERTS],
    }
  }
}

/// IJ hexagon coordinates; each axis is spaced 120 degrees apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoordIJ {
  /// I component.
  pub i: i32,
  /// J component.
  pub j: i32,
}

/// IJK+ hexagon coordinates; each axis is spaced 120 degrees apart.
/// Normalized coordinates have all components non-negative with the
/// minimum component zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoordIJK {
  /// I component.
  pub i: i32,
  /// J component.
  pub j: i32,
  /// K component.
  pub k: i32,
}

/// Icosahedron face number plus IJK coordinates in that face's
/// face-centered coordinate system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FaceIJK {
  /// Face number, 0..=19.
  pub face: i32,
  /// IJK coordinates on that face.
  pub coord: CoordIJK,
}

/// 2D floating-point vector.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec2d {
  /// X component.
  pub x: f64,
  /// Y component.
  pub y: f64,
}

/// 3D floating-point vector.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec3d {
  /// X component.
  pub x: f64,
  /// Y component.
  pub y: f64,
  /// Z component.
  pub z: f64,
}

/// Path digit addressing the center and the six IJK axes of a cell's
/// children; 7 doubles as the unused-digit and invalid-direction
/// sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Hash, Default)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum Direction {
  /// Center digit.
  #[default]
  Center = 0,
  /// K-axes direction.
  K = 1,
  /// J-axes direction.
  J = 2,
  /// J == K direction.
  Jk = 3,
  /// I-axes direction.
  I = 4,
  /// I == K direction.
  Ik = 5,
  /// I == J direction.
  Ij = 6,
  /// Unused-digit / invalid-direction sentinel.
  Invalid = 7,
}

impl Direction {
  /// All six traversable directions, CCW around the origin starting at
  /// the K axis.
  pub const AXES: [Direction; 6] = [
    Direction::K,
    Direction::J,
    Direction::Jk,
    Direction::I,
    Direction::Ik,
    Direction::Ij,
  ];

  /// Rotates the digit 60 degrees counter-clockwise. Center and the
  /// invalid sentinel are unchanged.
  #[must_use]
  pub const fn rotate60_ccw(self) -> Direction {
    match self {
      Direction::K => Direction::Ik,
      Direction::Ik => Direction::I,
      Direction::I => Direction::Ij,
      Direction::Ij => Direction::J,
      Direction::J => Direction::Jk,
      Direction::Jk => Direction::K,
      other => other,
    }
  }

  /// Rotates the digit 60 degrees clockwise. Center and the invalid
  /// sentinel are unchanged.
  #[must_use]
  pub const fn rotate60_cw(self) -> Direction {
    match self {
      Direction::K => Direction::Jk,
      Direction::Jk => Direction::J,
      Direction::J => Direction::Ij,
      Direction::Ij => Direction::I,
      Direction::I => Direction::Ik,
      Direction::Ik => Direction::K,
      other => other,
    }
  }
}

impl TryFrom<u8> for Direction {
  type Error = GridError;

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    match value {
      0 => Ok(Direction::Center),
      1 => Ok(Direction::K),
      2 => Ok(Direction::J),
      3 => Ok(Direction::Jk),
      4 => Ok(Direction::I),
      5 => Ok(Direction::Ik),
      6 => Ok(Direction::Ij),
      7 => Ok(Direction::Invalid),
      _ => Err(GridError::Domain),
    }
  }
}

/// Geographic bounding box with coordinates in radians.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BBox {
  /// North latitude.
  pub north: f64,
  /// South latitude.
  pub south: f64,
  /// East longitude.
  pub east: f64,
  /// West longitude.
  pub west: f64,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn direction_rotation_cycles() {
    let mut d = Direction::K;
    for _ in 0..6 {
      d = d.rotate60_ccw();
    }
    assert_eq!(d, Direction::K);

    for axis in Direction::AXES {
      assert_eq!(axis.rotate60_ccw().rotate60_cw(), axis);
    }
    assert_eq!(Direction::Center.rotate60_ccw(), Direction::Center);
    assert_eq!(Direction::Invalid.rotate60_cw(), Direction::Invalid);
  }

  #[test]
  fn direction_try_from() {
    assert_eq!(Direction::try_from(4), Ok(Direction::I));
    assert_eq!(Direction::try_from(7), Ok(Direction::Invalid));
    assert_eq!(Direction::try_from(8), Err(GridError::Domain));
  }

  #[test]
  fn cell_index_display_is_lowercase_hex() {
    assert_eq!(CellIndex(0x8528347ffffffff).to_string(), "8528347ffffffff");
    assert_eq!(NULL_CELL.to_string(), "0");
  }
}
