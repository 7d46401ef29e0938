//! Face-anchored coordinates on the icosahedron: gnomonic projection
//! between the sphere and per-face hex planes, substrate vertex grids,
//! overage transport onto neighboring faces, and boundary generation.

use crate::cell::res_is_class_iii;
use crate::constants::{
  EPSILON, M_AP7_ROT_RADS, M_SQRT3_2, M_SQRT7, NUM_HEX_VERTS, NUM_ICOSA_FACES, NUM_PENT_VERTS, RES0_U_GNOMONIC,
};
use crate::coords::ijk::hex2d_to_ijk;
use crate::geom::geodesy::{geo_az_distance_rads, geo_azimuth_rads, pos_angle_rads};
use crate::geom::vec2d;
use crate::geom::vec3d::{geo_to_vec3d, point_square_dist};
use crate::types::{CoordIJK, FaceIJK, GeoBoundary, GeoCoord, Vec2d, Vec3d};

/// IJ quadrant index into the face neighbor table.
pub(crate) const IJ: i32 = 1;
/// KI quadrant index into the face neighbor table.
pub(crate) const KI: i32 = 2;
/// JK quadrant index into the face neighbor table.
pub(crate) const JK: i32 = 3;
/// Marker for faces that are not adjacent.
pub(crate) const INVALID_FACE: i32 = -1;

/// How a face-anchored coordinate relates to its face's triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Overage {
  /// Inside the original face.
  None,
  /// Exactly on a face edge (substrate grids only).
  FaceEdge,
  /// Leaked into the interior of a new face.
  NewFace,
}

/// Transform into an adjacent face's IJK system: target face, the
/// resolution 0 translation relative to the primary face, and the
/// number of 60 degree CCW rotations.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FaceOrientIJK {
  pub face: i32,
  pub translate: CoordIJK,
  pub ccw_rot60: i32,
}

const fn orient(face: i32, i: i32, j: i32, k: i32, ccw_rot60: i32) -> FaceOrientIJK {
  FaceOrientIJK {
    face,
    translate: CoordIJK { i, j, k },
    ccw_rot60,
  }
}

/// Icosahedron face centers in latitude/longitude radians.
#[rustfmt::skip]
pub(crate) static FACE_CENTER_GEO: [GeoCoord; NUM_ICOSA_FACES as usize] = [
  GeoCoord { lat: 0.803_582_649_718_989_942, lon: 1.248_397_419_617_396_099 },   // face 0
  GeoCoord { lat: 1.307_747_883_455_638_156, lon: 2.536_945_009_877_921_159 },   // face 1
  GeoCoord { lat: 1.054_751_253_523_952_054, lon: -1.347_517_358_900_396_623 },  // face 2
  GeoCoord { lat: 0.600_191_595_538_186_799, lon: -0.450_603_909_469_755_746 },  // face 3
  GeoCoord { lat: 0.491_715_428_198_773_866, lon: 0.401_988_202_911_306_943 },   // face 4
  GeoCoord { lat: 0.172_745_327_415_618_701, lon: 1.678_146_885_280_433_686 },   // face 5
  GeoCoord { lat: 0.605_929_321_571_350_690, lon: 2.953_923_329_812_411_617 },   // face 6
  GeoCoord { lat: 0.427_370_518_328_979_641, lon: -1.888_876_200_336_285_401 },  // face 7
  GeoCoord { lat: -0.079_066_118_549_212_831, lon: -0.733_429_513_380_867_741 }, // face 8
  GeoCoord { lat: -0.230_961_644_455_383_637, lon: 0.506_495_587_332_349_035 },  // face 9
  GeoCoord { lat: 0.079_066_118_549_212_831, lon: 2.408_163_140_208_925_497 },   // face 10
  GeoCoord { lat: 0.230_961_644_455_383_637, lon: -2.635_097_066_257_444_203 },  // face 11
  GeoCoord { lat: -0.172_745_327_415_618_701, lon: -1.463_445_768_309_359_553 }, // face 12
  GeoCoord { lat: -0.605_929_321_571_350_690, lon: -0.187_669_323_777_381_622 }, // face 13
  GeoCoord { lat: -0.427_370_518_328_979_641, lon: 1.252_716_453_253_507_838 },  // face 14
  GeoCoord { lat: -0.600_191_595_538_186_799, lon: 2.690_988_744_120_037_492 },  // face 15
  GeoCoord { lat: -0.491_715_428_198_773_866, lon: -2.739_604_450_678_486_295 }, // face 16
  GeoCoord { lat: -0.803_582_649_718_989_942, lon: -1.893_195_233_972_397_139 }, // face 17
  GeoCoord { lat: -1.307_747_883_455_638_156, lon: -0.604_647_643_711_872_080 }, // face 18
  GeoCoord { lat: -1.054_751_253_523_952_054, lon: 1.794_075_294_689_396_615 },  // face 19
];

/// Icosahedron face centers in Cartesian coordinates on the unit sphere.
#[rustfmt::skip]
pub(crate) static FACE_CENTER_POINT: [Vec3d; NUM_ICOSA_FACES as usize] = [
  Vec3d { x: 0.219_930_779_140_460_6, y: 0.658_369_178_027_499_6, z: 0.719_847_537_892_618_2 },    // face 0
  Vec3d { x: -0.213_923_483_450_142_1, y: 0.147_817_182_955_070_3, z: 0.965_601_793_521_420_5 },   // face 1
  Vec3d { x: 0.109_262_527_878_479_7, y: -0.481_195_157_287_321_0, z: 0.869_777_512_128_725_3 },   // face 2
  Vec3d { x: 0.742_856_730_158_679_1, y: -0.359_394_167_827_802_8, z: 0.564_800_593_651_703_3 },   // face 3
  Vec3d { x: 0.811_253_470_914_096_9, y: 0.344_895_323_763_938_4, z: 0.472_138_773_641_393_0 },    // face 4
  Vec3d { x: -0.105_549_814_961_392_1, y: 0.979_445_729_641_141_3, z: 0.171_887_461_000_936_5 },   // face 5
  Vec3d { x: -0.807_540_757_997_009_2, y: 0.153_355_248_589_881_8, z: 0.569_526_199_488_268_8 },   // face 6
  Vec3d { x: -0.284_614_806_978_790_7, y: -0.864_408_097_265_420_6, z: 0.414_479_255_247_353_9 },  // face 7
  Vec3d { x: 0.740_562_147_385_448_2, y: -0.667_329_956_456_552_4, z: -0.078_983_764_632_673_7 },  // face 8
  Vec3d { x: 0.851_230_398_647_429_3, y: 0.472_234_378_858_268_1, z: -0.228_913_738_868_780_8 },   // face 9
  Vec3d { x: -0.740_562_147_385_448_1, y: 0.667_329_956_456_552_4, z: 0.078_983_764_632_673_7 },   // face 10
  Vec3d { x: -0.851_230_398_647_429_2, y: -0.472_234_378_858_268_2, z: 0.228_913_738_868_780_8 },  // face 11
  Vec3d { x: 0.105_549_814_961_391_9, y: -0.979_445_729_641_141_3, z: -0.171_887_461_000_936_5 },  // face 12
  Vec3d { x: 0.807_540_757_997_009_2, y: -0.153_355_248_589_881_9, z: -0.569_526_199_488_268_8 },  // face 13
  Vec3d { x: 0.284_614_806_978_790_8, y: 0.864_408_097_265_420_4, z: -0.414_479_255_247_353_9 },   // face 14
  Vec3d { x: -0.742_856_730_158_679_1, y: 0.359_394_167_827_802_7, z: -0.564_800_593_651_703_3 },  // face 15
  Vec3d { x: -0.811_253_470_914_097_1, y: -0.344_895_323_763_938_2, z: -0.472_138_773_641_393_0 }, // face 16
  Vec3d { x: -0.219_930_779_140_460_7, y: -0.658_369_178_027_499_6, z: -0.719_847_537_892_618_2 }, // face 17
  Vec3d { x: 0.213_923_483_450_142_0, y: -0.147_817_182_955_070_4, z: -0.965_601_793_521_420_5 },  // face 18
  Vec3d { x: -0.109_262_527_878_479_6, y: 0.481_195_157_287_321_0, z: -0.869_777_512_128_725_3 },  // face 19
];

/// Azimuth in radians from each face center to its vertices 0, 1 and 2
/// in the Class II orientation; vertex 0 lies on the +i axis.
#[rustfmt::skip]
pub(crate) static FACE_AXES_AZ_RADS_CII: [[f64; 3]; NUM_ICOSA_FACES as usize] = [
  [5.619_958_268_523_939_882, 3.525_563_166_130_744_542, 1.431_168_063_737_548_730], // face 0
  [5.760_339_081_714_187_279, 3.665_943_979_320_991_689, 1.571_548_876_927_796_127], // face 1
  [0.780_213_654_393_430_055, 4.969_003_859_179_821_079, 2.874_608_756_786_625_655], // face 2
  [0.430_469_363_979_999_913, 4.619_259_568_766_391_033, 2.524_864_466_373_195_467], // face 3
  [6.130_269_123_335_111_400, 4.035_874_020_941_915_804, 1.941_478_918_548_720_291], // face 4
  [2.692_877_706_530_642_877, 0.598_482_604_137_447_119, 4.787_272_808_923_838_195], // face 5
  [2.982_963_003_477_243_874, 0.888_567_901_084_048_369, 5.077_358_105_870_439_581], // face 6
  [3.532_912_002_790_141_181, 1.438_516_900_396_945_656, 5.627_307_105_183_336_758], // face 7
  [3.494_305_004_259_568_154, 1.399_909_901_866_372_864, 5.588_700_106_652_763_840], // face 8
  [3.003_214_169_499_538_391, 0.908_819_067_106_342_928, 5.097_609_271_892_733_906], // face 9
  [5.930_472_956_509_811_562, 3.836_077_854_116_615_875, 1.741_682_751_723_420_374], // face 10
  [0.138_378_484_090_254_847, 4.327_168_688_876_645_809, 2.232_773_586_483_450_311], // face 11
  [0.448_714_947_059_150_361, 4.637_505_151_845_541_521, 2.543_110_049_452_346_120], // face 12
  [0.158_629_650_112_549_365, 4.347_419_854_898_940_135, 2.253_024_752_505_744_869], // face 13
  [5.891_865_957_979_238_535, 3.797_470_855_586_042_958, 1.703_075_753_192_847_583], // face 14
  [2.711_123_289_609_793_325, 0.616_728_187_216_597_771, 4.805_518_392_002_988_683], // face 15
  [3.294_508_837_434_268_316, 1.200_113_735_041_072_948, 5.388_903_939_827_463_911], // face 16
  [3.804_819_692_245_439_833, 1.710_424_589_852_244_509, 5.899_214_794_638_635_174], // face 17
  [3.664_438_879_055_192_436, 1.570_043_776_661_997_111, 5.758_833_981_448_388_027], // face 18
  [2.361_378_999_196_363_184, 0.266_983_896_803_167_583, 4.455_774_101_589_558_636], // face 19
];

/// Which faces neighbor each other, indexed by [face][quadrant] with
/// quadrants {central, IJ, KI, JK}.
#[rustfmt::skip]
pub(crate) static FACE_NEIGHBORS: [[FaceOrientIJK; 4]; NUM_ICOSA_FACES as usize] = [
  [orient(0, 0, 0, 0, 0), orient(4, 2, 0, 2, 1), orient(1, 2, 2, 0, 5), orient(5, 0, 2, 2, 3)],    // face 0
  [orient(1, 0, 0, 0, 0), orient(0, 2, 0, 2, 1), orient(2, 2, 2, 0, 5), orient(6, 0, 2, 2, 3)],    // face 1
  [orient(2, 0, 0, 0, 0), orient(1, 2, 0, 2, 1), orient(3, 2, 2, 0, 5), orient(7, 0, 2, 2, 3)],    // face 2
  [orient(3, 0, 0, 0, 0), orient(2, 2, 0, 2, 1), orient(4, 2, 2, 0, 5), orient(8, 0, 2, 2, 3)],    // face 3
  [orient(4, 0, 0, 0, 0), orient(3, 2, 0, 2, 1), orient(0, 2, 2, 0, 5), orient(9, 0, 2, 2, 3)],    // face 4
  [orient(5, 0, 0, 0, 0), orient(10, 2, 2, 0, 3), orient(14, 2, 0, 2, 3), orient(0, 0, 2, 2, 3)],  // face 5
  [orient(6, 0, 0, 0, 0), orient(11, 2, 2, 0, 3), orient(10, 2, 0, 2, 3), orient(1, 0, 2, 2, 3)],  // face 6
  [orient(7, 0, 0, 0, 0), orient(12, 2, 2, 0, 3), orient(11, 2, 0, 2, 3), orient(2, 0, 2, 2, 3)],  // face 7
  [orient(8, 0, 0, 0, 0), orient(13, 2, 2, 0, 3), orient(12, 2, 0, 2, 3), orient(3, 0, 2, 2, 3)],  // face 8
  [orient(9, 0, 0, 0, 0), orient(14, 2, 2, 0, 3), orient(13, 2, 0, 2, 3), orient(4, 0, 2, 2, 3)],  // face 9
  [orient(10, 0, 0, 0, 0), orient(5, 2, 2, 0, 3), orient(6, 2, 0, 2, 3), orient(15, 0, 2, 2, 3)],  // face 10
  [orient(11, 0, 0, 0, 0), orient(6, 2, 2, 0, 3), orient(7, 2, 0, 2, 3), orient(16, 0, 2, 2, 3)],  // face 11
  [orient(12, 0, 0, 0, 0), orient(7, 2, 2, 0, 3), orient(8, 2, 0, 2, 3), orient(17, 0, 2, 2, 3)],  // face 12
  [orient(13, 0, 0, 0, 0), orient(8, 2, 2, 0, 3), orient(9, 2, 0, 2, 3), orient(18, 0, 2, 2, 3)],  // face 13
  [orient(14, 0, 0, 0, 0), orient(9, 2, 2, 0, 3), orient(5, 2, 0, 2, 3), orient(19, 0, 2, 2, 3)],  // face 14
  [orient(15, 0, 0, 0, 0), orient(16, 2, 0, 2, 1), orient(19, 2, 2, 0, 5), orient(10, 0, 2, 2, 3)], // face 15
  [orient(16, 0, 0, 0, 0), orient(17, 2, 0, 2, 1), orient(15, 2, 2, 0, 5), orient(11, 0, 2, 2, 3)], // face 16
  [orient(17, 0, 0, 0, 0), orient(18, 2, 0, 2, 1), orient(16, 2, 2, 0, 5), orient(12, 0, 2, 2, 3)], // face 17
  [orient(18, 0, 0, 0, 0), orient(19, 2, 0, 2, 1), orient(17, 2, 2, 0, 5), orient(13, 0, 2, 2, 3)], // face 18
  [orient(19, 0, 0, 0, 0), orient(15, 2, 0, 2, 1), orient(18, 2, 2, 0, 5), orient(14, 0, 2, 2, 3)], // face 19
];

/// Direction from each face to each other face, in the origin face's
/// coordinate system; `INVALID_FACE` where the faces are not adjacent.
#[rustfmt::skip]
pub(crate) static ADJACENT_FACE_DIR: [[i32; NUM_ICOSA_FACES as usize]; NUM_ICOSA_FACES as usize] = [
  [0, KI, -1, -1, IJ, JK, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // face 0
  [IJ, 0, KI, -1, -1, -1, JK, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // face 1
  [-1, IJ, 0, KI, -1, -1, -1, JK, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // face 2
  [-1, -1, IJ, 0, KI, -1, -1, -1, JK, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // face 3
  [KI, -1, -1, IJ, 0, -1, -1, -1, -1, JK, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // face 4
  [JK, -1, -1, -1, -1, 0, -1, -1, -1, -1, IJ, -1, -1, -1, KI, -1, -1, -1, -1, -1], // face 5
  [-1, JK, -1, -1, -1, -1, 0, -1, -1, -1, KI, IJ, -1, -1, -1, -1, -1, -1, -1, -1], // face 6
  [-1, -1, JK, -1, -1, -1, -1, 0, -1, -1, -1, KI, IJ, -1, -1, -1, -1, -1, -1, -1], // face 7
  [-1, -1, -1, JK, -1, -1, -1, -1, 0, -1, -1, -1, KI, IJ, -1, -1, -1, -1, -1, -1], // face 8
  [-1, -1, -1, -1, JK, -1, -1, -1, -1, 0, -1, -1, -1, KI, IJ, -1, -1, -1, -1, -1], // face 9
  [-1, -1, -1, -1, -1, IJ, KI, -1, -1, -1, 0, -1, -1, -1, -1, JK, -1, -1, -1, -1], // face 10
  [-1, -1, -1, -1, -1, -1, IJ, KI, -1, -1, -1, 0, -1, -1, -1, -1, JK, -1, -1, -1], // face 11
  [-1, -1, -1, -1, -1, -1, -1, IJ, KI, -1, -1, -1, 0, -1, -1, -1, -1, JK, -1, -1], // face 12
  [-1, -1, -1, -1, -1, -1, -1, -1, IJ, KI, -1, -1, -1, 0, -1, -1, -1, -1, JK, -1], // face 13
  [-1, -1, -1, -1, -1, KI, -1, -1, -1, IJ, -1, -1, -1, -1, 0, -1, -1, -1, -1, JK], // face 14
  [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, JK, -1, -1, -1, -1, 0, IJ, -1, -1, KI], // face 15
  [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, JK, -1, -1, -1, KI, 0, IJ, -1, -1], // face 16
  [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, JK, -1, -1, -1, KI, 0, IJ, -1], // face 17
  [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, JK, -1, -1, -1, KI, 0, IJ], // face 18
  [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, JK, IJ, -1, -1, KI, 0], // face 19
];

/// Largest on-face dimension at each Class II resolution (2 * 7^(r/2));
/// odd entries unused.
#[rustfmt::skip]
pub(crate) static MAX_DIM_BY_CII_RES: [i32; 17] = [
  2, -1, 14, -1, 98, -1, 686, -1, 4802, -1, 33_614, -1, 235_298, -1, 1_647_086, -1, 11_529_602,
];

/// Unit scale at each Class II resolution (7^(r/2)); odd entries unused.
#[rustfmt::skip]
pub(crate) static UNIT_SCALE_BY_CII_RES: [i32; 17] = [
  1, -1, 7, -1, 49, -1, 343, -1, 2401, -1, 16_807, -1, 117_649, -1, 823_543, -1, 5_764_801,
];

/// Encodes a point on the sphere as the icosahedral face containing it
/// and the 2D hex-plane coordinates of the point relative to that
/// face's center, scaled for the given resolution.
pub(crate) fn geo_to_hex2d(g: &GeoCoord, res: i32) -> (i32, Vec2d) {
  let v3d = geo_to_vec3d(g);

  // the containing face is the one whose center is closest
  let mut face = 0usize;
  let mut sqd = point_square_dist(&FACE_CENTER_POINT[0], &v3d);
  for (f, center) in FACE_CENTER_POINT.iter().enumerate().skip(1) {
    let sqd_f = point_square_dist(center, &v3d);
    if sqd_f < sqd {
      face = f;
      sqd = sqd_f;
    }
  }

  // cos(r) = 1 - 2*sin^2(r/2) = 1 - sqd/2
  let mut r = (1.0 - sqd / 2.0).acos();

  if r < EPSILON {
    return (face as i32, Vec2d::default());
  }

  // CCW angle from the face's +i axis to the point
  let mut theta = pos_angle_rads(
    FACE_AXES_AZ_RADS_CII[face][0] - pos_angle_rads(geo_azimuth_rads(&FACE_CENTER_GEO[face], g)),
  );

  if res_is_class_iii(res) {
    theta = pos_angle_rads(theta - M_AP7_ROT_RADS);
  }

  // gnomonic scaling, then scale out to the target resolution
  r = r.tan();
  r /= RES0_U_GNOMONIC;
  for _ in 0..res {
    r *= M_SQRT7;
  }

  (
    face as i32,
    Vec2d {
      x: r * theta.cos(),
      y: r * theta.sin(),
    },
  )
}

/// Encodes a point on the sphere as the FaceIJK address of the
/// containing cell at the given resolution.
pub(crate) fn geo_to_face_ijk(g: &GeoCoord, res: i32) -> FaceIJK {
  let (face, v) = geo_to_hex2d(g, res);
  FaceIJK {
    face,
    coord: hex2d_to_ijk(&v),
  }
}

/// Center point on the sphere of the position `v` on the given face at
/// the given resolution. `substrate` marks coordinates on a substrate
/// vertex grid, which carries an extra aperture 3 (and, for Class III,
/// aperture 7) scale.
pub(crate) fn hex2d_to_geo(v: &Vec2d, face: i32, res: i32, substrate: bool) -> GeoCoord {
  let mut r = v.mag();

  if r < EPSILON {
    return FACE_CENTER_GEO[face as usize];
  }

  let mut theta = v.y.atan2(v.x);

  for _ in 0..res {
    r /= M_SQRT7;
  }

  if substrate {
    r /= 3.0;
    if res_is_class_iii(res) {
      r /= M_SQRT7;
    }
  }

  r *= RES0_U_GNOMONIC;
  // inverse gnomonic
  r = r.atan();

  // a substrate grid is already rotated into the Class II orientation
  if !substrate && res_is_class_iii(res) {
    theta = pos_angle_rads(theta + M_AP7_ROT_RADS);
  }

  let az = pos_angle_rads(FACE_AXES_AZ_RADS_CII[face as usize][0] - theta);
  geo_az_distance_rads(&FACE_CENTER_GEO[face as usize], az, r)
}

/// Center point on the sphere of the cell with the given FaceIJK
/// address at the given resolution.
pub(crate) fn face_ijk_to_geo(h: &FaceIJK, res: i32) -> GeoCoord {
  hex2d_to_geo(&h.coord.to_hex2d(), h.face, res, false)
}

/// Substrate vertex offsets of an origin-centered hexagon in a Class II
/// grid reached by the aperture sequence 33r; CCW from the +i axis.
#[rustfmt::skip]
static HEX_VERTS_CII: [CoordIJK; NUM_HEX_VERTS] = [
  CoordIJK { i: 2, j: 1, k: 0 },
  CoordIJK { i: 1, j: 2, k: 0 },
  CoordIJK { i: 0, j: 2, k: 1 },
  CoordIJK { i: 0, j: 1, k: 2 },
  CoordIJK { i: 1, j: 0, k: 2 },
  CoordIJK { i: 2, j: 0, k: 1 },
];

/// Substrate vertex offsets of an origin-centered hexagon in a Class
/// III grid reached by the aperture sequence 33r7r; CCW from the +i
/// axis.
#[rustfmt::skip]
static HEX_VERTS_CIII: [CoordIJK; NUM_HEX_VERTS] = [
  CoordIJK { i: 5, j: 4, k: 0 },
  CoordIJK { i: 1, j: 5, k: 0 },
  CoordIJK { i: 0, j: 5, k: 4 },
  CoordIJK { i: 0, j: 1, k: 5 },
  CoordIJK { i: 4, j: 0, k: 5 },
  CoordIJK { i: 5, j: 0, k: 1 },
];

/// Pentagon variants of the substrate vertex offsets.
#[rustfmt::skip]
static PENT_VERTS_CII: [CoordIJK; NUM_PENT_VERTS] = [
  CoordIJK { i: 2, j: 1, k: 0 },
  CoordIJK { i: 1, j: 2, k: 0 },
  CoordIJK { i: 0, j: 2, k: 1 },
  CoordIJK { i: 0, j: 1, k: 2 },
  CoordIJK { i: 1, j: 0, k: 2 },
];

#[rustfmt::skip]
static PENT_VERTS_CIII: [CoordIJK; NUM_PENT_VERTS] = [
  CoordIJK { i: 5, j: 4, k: 0 },
  CoordIJK { i: 1, j: 5, k: 0 },
  CoordIJK { i: 0, j: 5, k: 4 },
  CoordIJK { i: 0, j: 1, k: 5 },
  CoordIJK { i: 4, j: 0, k: 5 },
];

/// Moves `fijk` onto the substrate grid shared by cell vertices and
/// returns the substrate offsets to add for each vertex. Bumps `res` by
/// one when a Class III adjustment drops into the next finer Class II
/// grid.
fn to_substrate<'a>(fijk: &mut FaceIJK, res: &mut i32, cii: &'a [CoordIJK], ciii: &'a [CoordIJK]) -> &'a [CoordIJK] {
  let verts: &[CoordIJK] = if res_is_class_iii(*res) { ciii } else { cii };

  // center point into an aperture 33r substrate grid
  fijk.coord.down_ap3();
  fijk.coord.down_ap3r();

  // Class III needs one more cw aperture 7 to land on a Class II grid
  if res_is_class_iii(*res) {
    fijk.coord.down_ap7r();
    *res += 1;
  }

  verts
}

/// Vertices of a hexagon cell as substrate FaceIJK addresses. `res` is
/// adjusted to the substrate resolution.
pub(crate) fn face_ijk_to_verts(fijk: &mut FaceIJK, res: &mut i32) -> [FaceIJK; NUM_HEX_VERTS] {
  let verts = to_substrate(fijk, res, &HEX_VERTS_CII, &HEX_VERTS_CIII);

  let mut out = [FaceIJK::default(); NUM_HEX_VERTS];
  for (v, offset) in verts.iter().enumerate() {
    out[v].face = fijk.face;
    out[v].coord = fijk.coord.add(offset);
    out[v].coord.normalize();
  }
  out
}

/// Vertices of a pentagon cell as substrate FaceIJK addresses. `res` is
/// adjusted to the substrate resolution.
pub(crate) fn face_ijk_pent_to_verts(fijk: &mut FaceIJK, res: &mut i32) -> [FaceIJK; NUM_PENT_VERTS] {
  let verts = to_substrate(fijk, res, &PENT_VERTS_CII, &PENT_VERTS_CIII);

  let mut out = [FaceIJK::default(); NUM_PENT_VERTS];
  for (v, offset) in verts.iter().enumerate() {
    out[v].face = fijk.face;
    out[v].coord = fijk.coord.add(offset);
    out[v].coord.normalize();
  }
  out
}

/// The three icosahedron face-edge segments of the face triangle at the
/// substrate dimension, as (v0, v1, v2) corners.
fn face_edge_corners(max_dim: i32) -> (Vec2d, Vec2d, Vec2d) {
  let d = f64::from(max_dim);
  (
    Vec2d { x: 3.0 * d, y: 0.0 },
    Vec2d {
      x: -1.5 * d,
      y: 3.0 * M_SQRT3_2 * d,
    },
    Vec2d {
      x: -1.5 * d,
      y: -3.0 * M_SQRT3_2 * d,
    },
  )
}

/// Generates the boundary on the sphere of the hexagon cell with the
/// given FaceIJK address, for `length` vertices starting at `start`.
/// Distortion vertices are introduced where a Class III cell edge
/// crosses an icosahedron edge.
pub(crate) fn face_ijk_to_boundary(h: &FaceIJK, res: i32, start: usize, length: usize) -> GeoBoundary {
  let mut adj_res = res;
  let mut center = *h;
  let verts = face_ijk_to_verts(&mut center, &mut adj_res);

  // one extra lap catches a distortion vertex on the closing edge
  let additional = usize::from(length == NUM_HEX_VERTS);

  let mut g = GeoBoundary::default();
  let mut last_face = -1;
  let mut last_overage = Overage::None;

  for vert in start..start + length + additional {
    let v = vert % NUM_HEX_VERTS;

    let mut fijk = verts[v];
    let overage = adjust_overage_class_ii(&mut fijk, adj_res, false, true);

    // Each icosahedron face is its own projection plane, so an edge
    // crossing a face boundary needs an extra vertex at the crossing
    // point. Class II edges only touch face edges at vertices.
    if res_is_class_iii(res) && vert > start && fijk.face != last_face && last_overage != Overage::FaceEdge {
      let last_v = (v + 5) % NUM_HEX_VERTS;
      let orig2d0 = verts[last_v].coord.to_hex2d();
      let orig2d1 = verts[v].coord.to_hex2d();

      let max_dim = MAX_DIM_BY_CII_RES[adj_res as usize];
      let (c0, c1, c2) = face_edge_corners(max_dim);

      let face2 = if last_face == center.face { fijk.face } else { last_face };
      let (edge0, edge1) = match ADJACENT_FACE_DIR[center.face as usize][face2 as usize] {
        x if x == IJ => (c0, c1),
        x if x == JK => (c1, c2),
        _ => (c2, c0), // KI
      };

      let inter = vec2d::intersect(&orig2d0, &orig2d1, &edge0, &edge1);
      // a crossing exactly at a hexagon vertex needs no extra point
      let at_vertex = vec2d::equals(&orig2d0, &inter) || vec2d::equals(&orig2d1, &inter);
      if !at_vertex {
        g.verts[g.num_verts] = hex2d_to_geo(&inter, center.face, adj_res, true);
        g.num_verts += 1;
      }
    }

    // the extra lap only probes for a trailing distortion vertex
    if vert < start + NUM_HEX_VERTS {
      g.verts[g.num_verts] = hex2d_to_geo(&fijk.coord.to_hex2d(), fijk.face, adj_res, true);
      g.num_verts += 1;
    }

    last_face = fijk.face;
    last_overage = overage;
  }

  g
}

/// Generates the boundary on the sphere of the pentagon cell with the
/// given FaceIJK address. Every Class III pentagon edge crosses an
/// icosahedron edge; Class II pentagons have their vertices exactly on
/// the face edges.
pub(crate) fn face_ijk_pent_to_boundary(h: &FaceIJK, res: i32, start: usize, length: usize) -> GeoBoundary {
  let mut adj_res = res;
  let mut center = *h;
  let verts = face_ijk_pent_to_verts(&mut center, &mut adj_res);

  let additional = usize::from(length == NUM_PENT_VERTS);

  let mut g = GeoBoundary::default();
  let mut last_fijk = FaceIJK::default();

  for vert in start..start + length + additional {
    let v = vert % NUM_PENT_VERTS;

    let mut fijk = verts[v];
    adjust_pent_vert_overage(&mut fijk, adj_res);

    if res_is_class_iii(res) && vert > start {
      // transport the previous vertex into this vertex's face frame
      let orig2d0 = last_fijk.coord.to_hex2d();

      let current_to_last = ADJACENT_FACE_DIR[fijk.face as usize][last_fijk.face as usize];
      let orientation = &FACE_NEIGHBORS[fijk.face as usize][current_to_last as usize];

      let mut tmp = fijk;
      tmp.face = orientation.face;
      for _ in 0..orientation.ccw_rot60 {
        tmp.coord.rotate60_ccw();
      }

      let mut trans = orientation.translate;
      trans.scale(UNIT_SCALE_BY_CII_RES[adj_res as usize] * 3);
      tmp.coord = tmp.coord.add(&trans);
      tmp.coord.normalize();

      let orig2d1 = tmp.coord.to_hex2d();

      let max_dim = MAX_DIM_BY_CII_RES[adj_res as usize];
      let (c0, c1, c2) = face_edge_corners(max_dim);

      let (edge0, edge1) = match ADJACENT_FACE_DIR[tmp.face as usize][fijk.face as usize] {
        x if x == IJ => (c0, c1),
        x if x == JK => (c1, c2),
        _ => (c2, c0), // KI
      };

      let inter = vec2d::intersect(&orig2d0, &orig2d1, &edge0, &edge1);
      g.verts[g.num_verts] = hex2d_to_geo(&inter, tmp.face, adj_res, true);
      g.num_verts += 1;
    }

    if vert < start + NUM_PENT_VERTS {
      g.verts[g.num_verts] = hex2d_to_geo(&fijk.coord.to_hex2d(), fijk.face, adj_res, true);
      g.num_verts += 1;
    }

    last_fijk = fijk;
  }

  g
}

/// Adjusts a FaceIJK address in place so that it is relative to the
/// face actually containing it, transporting coordinates across at most
/// one icosahedron edge. `res` must be a Class II resolution.
///
/// A pentagon cell whose leading digit is 4 sits rotated against the
/// missing K subsequence and must be rotated about the pentagon center
/// before the KI-quadrant transport (`pent_leading_4`).
pub(crate) fn adjust_overage_class_ii(fijk: &mut FaceIJK, res: i32, pent_leading_4: bool, substrate: bool) -> Overage {
  let mut overage = Overage::None;

  let mut max_dim = MAX_DIM_BY_CII_RES[res as usize];
  if substrate {
    max_dim *= 3;
  }

  let ijk_sum = fijk.coord.i + fijk.coord.j + fijk.coord.k;
  if substrate && ijk_sum == max_dim {
    overage = Overage::FaceEdge;
  } else if ijk_sum > max_dim {
    overage = Overage::NewFace;

    let orientation = if fijk.coord.k > 0 {
      if fijk.coord.j > 0 {
        &FACE_NEIGHBORS[fijk.face as usize][JK as usize]
      } else {
        // ik quadrant
        if pent_leading_4 {
          // rotate about the pentagon center to undo the deleted
          // subsequence before picking the neighbor
          let origin = CoordIJK::new(max_dim, 0, 0);
          let mut tmp = fijk.coord.sub(&origin);
          tmp.rotate60_cw();
          fijk.coord = tmp.add(&origin);
        }
        &FACE_NEIGHBORS[fijk.face as usize][KI as usize]
      }
    } else {
      &FACE_NEIGHBORS[fijk.face as usize][IJ as usize]
    };

    fijk.face = orientation.face;

    for _ in 0..orientation.ccw_rot60 {
      fijk.coord.rotate60_ccw();
    }

    let mut trans = orientation.translate;
    let mut unit_scale = UNIT_SCALE_BY_CII_RES[res as usize];
    if substrate {
      unit_scale *= 3;
    }
    trans.scale(unit_scale);
    fijk.coord = fijk.coord.add(&trans);
    fijk.coord.normalize();

    // transported pentagon boundary points can land exactly on an edge
    if substrate && fijk.coord.i + fijk.coord.j + fijk.coord.k == max_dim {
      overage = Overage::FaceEdge;
    }
  }

  overage
}

/// Adjusts a substrate pentagon vertex in place, transporting across as
/// many icosahedron edges as needed. A pentagon touches five faces, so
/// the loop is capped rather than trusted to terminate on its own.
pub(crate) fn adjust_pent_vert_overage(fijk: &mut FaceIJK, res: i32) -> Overage {
  let mut overage = Overage::NewFace;
  // 5 faces neighbor a pentagon; a correct table converges well within
  // that many passes
  for _ in 0..NUM_PENT_VERTS {
    overage = adjust_overage_class_ii(fijk, res, false, true);
    if overage != Overage::NewFace {
      break;
    }
  }
  overage
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::geom::geodesy::{degs_to_rads, geo_almost_equal_threshold};

  #[test]
  fn face_centers_match_cartesian_table() {
    for f in 0..NUM_ICOSA_FACES as usize {
      let v = geo_to_vec3d(&FACE_CENTER_GEO[f]);
      assert!(
        point_square_dist(&v, &FACE_CENTER_POINT[f]) < 1e-12,
        "face {f} geo and Cartesian centers disagree"
      );
    }
  }

  #[test]
  fn geo_face_round_trip_res0() {
    // each face center maps to (that face, origin ijk)
    for (f, center) in FACE_CENTER_GEO.iter().enumerate() {
      let fijk = geo_to_face_ijk(center, 0);
      assert_eq!(fijk.face, f as i32);
      assert_eq!(fijk.coord, CoordIJK::default());

      let back = face_ijk_to_geo(&fijk, 0);
      assert!(geo_almost_equal_threshold(center, &back, 1e-9));
    }
  }

  #[test]
  fn geo_round_trip_various_resolutions() {
    let p = GeoCoord {
      lat: degs_to_rads(37.779),
      lon: degs_to_rads(-122.419),
    };
    for res in 0..=15 {
      let fijk = geo_to_face_ijk(&p, res);
      let center = face_ijk_to_geo(&fijk, res);
      // cell center must re-encode to the same address
      assert_eq!(geo_to_face_ijk(&center, res), fijk, "res {res}");
    }
  }

  #[test]
  fn adjacency_tables_are_mutual() {
    for f in 0..NUM_ICOSA_FACES as usize {
      for quadrant in 1..4 {
        let n = FACE_NEIGHBORS[f][quadrant].face as usize;
        assert_ne!(
          ADJACENT_FACE_DIR[f][n], INVALID_FACE,
          "face {f} quadrant {quadrant} neighbor {n} missing from direction table"
        );
        assert_ne!(ADJACENT_FACE_DIR[n][f], INVALID_FACE);
      }
    }
  }

  #[test]
  fn overage_on_face_stays_put() {
    let mut fijk = FaceIJK {
      face: 3,
      coord: CoordIJK::new(1, 0, 0),
    };
    let overage = adjust_overage_class_ii(&mut fijk, 0, false, false);
    assert_eq!(overage, Overage::None);
    assert_eq!(fijk.face, 3);
  }

  #[test]
  fn overage_moves_to_neighbor_face() {
    // i+j+k beyond maxDim at res 0 must transport onto another face
    let mut fijk = FaceIJK {
      face: 0,
      coord: CoordIJK::new(4, 0, 0),
    };
    let overage = adjust_overage_class_ii(&mut fijk, 0, false, false);
    assert_eq!(overage, Overage::NewFace);
    assert_ne!(fijk.face, 0);
  }
}
