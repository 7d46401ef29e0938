//! Grid system constants.

use std::f64::consts;

/// pi
pub const M_PI: f64 = consts::PI;
/// pi / 2.0
pub const M_PI_2: f64 = consts::FRAC_PI_2;
/// 2.0 * pi
pub const M_2PI: f64 = 2.0 * consts::PI;
/// pi / 180
pub const M_PI_180: f64 = consts::PI / 180.0;
/// 180 / pi
pub const M_180_PI: f64 = 180.0 / consts::PI;

/// General-purpose threshold epsilon.
pub const EPSILON: f64 = 0.000_000_000_000_000_1;
/// Epsilon of ~0.1mm in degrees.
pub const EPSILON_DEG: f64 = 0.000_000_001;
/// Epsilon of ~0.1mm in radians.
pub const EPSILON_RAD: f64 = EPSILON_DEG * M_PI_180;

/// sqrt(3) / 2.0, i.e. sin(60 degrees)
pub const M_SQRT3_2: f64 = 0.866_025_403_784_438_6;
/// 1 / sin(60 degrees)
pub const M_RSIN60: f64 = 1.0 / M_SQRT3_2;
/// Square root of 7.
pub const M_SQRT7: f64 = 2.645_751_311_064_590_6;
/// One seventh, as a double.
pub const M_ONESEVENTH: f64 = 1.0 / 7.0;

/// Rotation angle between Class II and Class III resolution axes,
/// asin(sqrt(3.0 / 28.0)).
pub const M_AP7_ROT_RADS: f64 = 0.333_473_172_251_832_1;

/// Earth radius in kilometers (WGS84 authalic radius).
pub const EARTH_RADIUS_KM: f64 = 6371.007_180_918_475;

/// Scaling factor from hex2d resolution 0 unit length (the distance
/// between adjacent cell centers on the plane) to gnomonic unit length.
pub const RES0_U_GNOMONIC: f64 = 0.381_966_011_250_105;

/// Finest supported resolution; the grid has 16 resolutions, 0 through 15.
pub const MAX_RES: i32 = 15;
/// Number of faces on the icosahedron.
pub const NUM_ICOSA_FACES: i32 = 20;
/// Number of resolution 0 cells.
pub const NUM_BASE_CELLS: i32 = 122;
/// Number of vertices in a hexagon.
pub const NUM_HEX_VERTS: usize = 6;
/// Number of topological vertices in a pentagon.
pub const NUM_PENT_VERTS: usize = 5;
/// Number of pentagons at every resolution.
pub const NUM_PENTAGONS: i32 = 12;
/// Maximum number of boundary vertices; worst case is a pentagon with
/// five original vertices and five edge crossings.
pub const MAX_BNDRY_VERTS: usize = 10;

/// Total number of cells at the finest resolution: 2 + 120 * 7^15.
pub const NUM_CELLS_MAX_RES: i64 = 569_707_381_193_162;

// Bit layout of a cell index, from the high bit down: 1 reserved bit,
// 4 mode bits, 3 reserved/edge-direction bits, 4 resolution bits,
// 7 base cell bits, then fifteen 3-bit path digits, finest in the
// low-order bits.

/// Bit offset of the mode field.
pub const MODE_OFFSET: u64 = 59;
/// Bit offset of the reserved field.
pub const RESERVED_OFFSET: u64 = 56;
/// Bit offset of the resolution field.
pub const RES_OFFSET: u64 = 52;
/// Bit offset of the base cell field.
pub const BASE_CELL_OFFSET: u64 = 45;
/// Number of bits in one path digit.
pub const PER_DIGIT_OFFSET: u64 = 3;

/// 1 in the highest bit, 0 elsewhere.
pub const HIGH_BIT_MASK: u64 = 1 << 63;
/// 1's in the 4 mode bits, 0 elsewhere.
pub const MODE_MASK: u64 = 0b1111 << MODE_OFFSET;
/// 1's in the 3 reserved bits, 0 elsewhere.
pub const RESERVED_MASK: u64 = 0b111 << RESERVED_OFFSET;
/// 1's in the 4 resolution bits, 0 elsewhere.
pub const RES_MASK: u64 = 0b1111 << RES_OFFSET;
/// 1's in the 7 base cell bits, 0 elsewhere.
pub const BASE_CELL_MASK: u64 = 0b111_1111 << BASE_CELL_OFFSET;
/// 1's in the 3 bits of a single digit.
pub const DIGIT_MASK: u64 = 0b111;

/// Mode of a cell index.
pub const CELL_MODE: u8 = 1;
/// Mode of a uni-directional edge index.
pub const EDGE_MODE: u8 = 2;

/// Index with mode 0, resolution 0, base cell 0, and every path digit
/// set to the unused sentinel 7. The starting point for building a
/// fresh cell index.
pub const CELL_INIT: u64 = 0x0000_1fff_ffff_ffff;

/// Maximum cell edge length in radians by resolution, taken from the
/// max exact edge length of cells at the center of each base cell.
#[rustfmt::skip]
pub const MAX_EDGE_LENGTH_RADS: [f64; (MAX_RES + 1) as usize] = [
  0.215_772_062_651_30, // res 0
  0.083_087_670_684_95, // res 1
  0.031_489_704_364_39, // res 2
  0.011_906_628_714_39, // res 3
  0.004_500_533_309_08, // res 4
  0.001_701_055_236_19, // res 5
  0.000_642_939_176_78, // res 6
  0.000_243_008_206_59, // res 7
  0.000_091_848_470_87, // res 8
  0.000_034_715_459_01, // res 9
  0.000_013_121_210_17, // res 10
  0.000_004_959_351_29, // res 11
  0.000_001_874_458_60, // res 12
  0.000_000_708_478_76, // res 13
  0.000_000_267_779_80, // res 14
  0.000_000_101_211_25, // res 15
];
