//! The 122 resolution 0 cells: home faces, pentagon flags, neighbor
//! relationships and the face-coordinate lookup used to place a face
//! address into its base cell's frame.

use crate::constants::{NUM_BASE_CELLS, NUM_ICOSA_FACES};
use crate::types::{CoordIJK, Direction, FaceIJK};

/// Sentinel for "no base cell"; cannot be encoded in the 7-bit field's
/// valid range.
pub(crate) const INVALID_BASE_CELL: i32 = 127;
/// Largest component of a resolution 0 face coordinate.
pub(crate) const MAX_FACE_COORD: i32 = 2;
/// Sentinel for "no rotation count".
pub(crate) const INVALID_ROTATIONS: i32 = -1;

/// One resolution 0 cell.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BaseCellData {
  /// Home face and normalized ijk coordinates on that face.
  pub home: FaceIJK,
  /// Whether this base cell is one of the twelve pentagons.
  pub is_pentagon: bool,
  /// For pentagons, the two faces offset clockwise from the home face;
  /// -1 otherwise.
  pub cw_offset_pent: [i32; 2],
}

const fn cell(face: i32, i: i32, j: i32, k: i32, is_pentagon: bool, off0: i32, off1: i32) -> BaseCellData {
  BaseCellData {
    home: FaceIJK {
      face,
      coord: CoordIJK { i, j, k },
    },
    is_pentagon,
    cw_offset_pent: [off0, off1],
  }
}

/// Neighboring base cell in each digit direction. `INVALID_BASE_CELL`
/// marks the deleted K direction of the pentagons.
#[rustfmt::skip]
pub(crate) static BASE_CELL_NEIGHBORS: [[i32; 7]; NUM_BASE_CELLS as usize] = [
  [0, 1, 5, 2, 4, 3, 8],
  [1, 7, 6, 9, 0, 3, 2],
  [2, 6, 10, 11, 0, 1, 5],
  [3, 13, 1, 7, 4, 12, 0],
  [4, INVALID_BASE_CELL, 15, 8, 3, 0, 12], // pentagon
  [5, 2, 18, 10, 8, 0, 16],
  [6, 14, 11, 17, 1, 9, 2],
  [7, 21, 9, 19, 3, 13, 1],
  [8, 5, 22, 16, 4, 0, 15],
  [9, 19, 14, 20, 1, 7, 6],
  [10, 11, 24, 23, 5, 2, 18],
  [11, 17, 23, 25, 2, 6, 10],
  [12, 28, 13, 26, 4, 15, 3],
  [13, 26, 21, 29, 3, 12, 7],
  [14, INVALID_BASE_CELL, 17, 27, 9, 20, 6], // pentagon
  [15, 22, 28, 31, 4, 8, 12],
  [16, 18, 33, 30, 8, 5, 22],
  [17, 11, 14, 6, 35, 25, 27],
  [18, 24, 30, 32, 5, 10, 16],
  [19, 34, 20, 36, 7, 21, 9],
  [20, 14, 19, 9, 40, 27, 36],
  [21, 38, 19, 34, 13, 29, 7],
  [22, 16, 41, 33, 15, 8, 31],
  [23, 24, 11, 10, 39, 37, 25],
  [24, INVALID_BASE_CELL, 32, 37, 10, 23, 18], // pentagon
  [25, 23, 17, 11, 45, 39, 35],
  [26, 42, 29, 43, 12, 28, 13],
  [27, 40, 35, 46, 14, 20, 17],
  [28, 31, 42, 44, 12, 15, 26],
  [29, 43, 38, 47, 13, 26, 21],
  [30, 32, 48, 50, 16, 18, 33],
  [31, 41, 44, 53, 15, 22, 28],
  [32, 30, 24, 18, 52, 50, 37],
  [33, 30, 49, 48, 22, 16, 41],
  [34, 19, 38, 21, 54, 36, 51],
  [35, 46, 45, 56, 17, 27, 25],
  [36, 20, 34, 19, 55, 40, 54],
  [37, 39, 52, 57, 24, 23, 32],
  [38, INVALID_BASE_CELL, 34, 51, 29, 47, 21], // pentagon
  [39, 37, 25, 23, 59, 57, 45],
  [40, 27, 36, 20, 60, 46, 55],
  [41, 49, 53, 61, 22, 33, 31],
  [42, 58, 43, 62, 28, 44, 26],
  [43, 62, 47, 64, 26, 42, 29],
  [44, 53, 58, 65, 28, 31, 42],
  [45, 39, 35, 25, 63, 59, 56],
  [46, 60, 56, 68, 27, 40, 35],
  [47, 38, 43, 29, 69, 51, 64],
  [48, 49, 30, 33, 67, 66, 50],
  [49, INVALID_BASE_CELL, 61, 66, 33, 48, 41], // pentagon
  [50, 48, 32, 30, 70, 67, 52],
  [51, 69, 54, 71, 38, 47, 34],
  [52, 57, 70, 74, 32, 37, 50],
  [53, 61, 65, 75, 31, 41, 44],
  [54, 71, 55, 73, 34, 51, 36],
  [55, 40, 54, 36, 72, 60, 73],
  [56, 68, 63, 77, 35, 46, 45],
  [57, 59, 74, 78, 37, 39, 52],
  [58, INVALID_BASE_CELL, 62, 76, 44, 65, 42], // pentagon
  [59, 63, 78, 79, 39, 45, 57],
  [60, 72, 68, 80, 40, 55, 46],
  [61, 53, 49, 41, 81, 75, 66],
  [62, 43, 58, 42, 82, 64, 76],
  [63, INVALID_BASE_CELL, 56, 45, 79, 59, 77], // pentagon
  [64, 47, 62, 43, 84, 69, 82],
  [65, 58, 53, 44, 86, 76, 75],
  [66, 67, 81, 85, 49, 48, 61],
  [67, 66, 50, 48, 87, 85, 70],
  [68, 56, 60, 46, 90, 77, 80],
  [69, 51, 64, 47, 89, 71, 84],
  [70, 67, 52, 50, 83, 87, 74],
  [71, 89, 73, 91, 51, 69, 54],
  [72, INVALID_BASE_CELL, 73, 55, 80, 60, 88], // pentagon
  [73, 91, 72, 88, 54, 71, 55],
  [74, 78, 83, 92, 52, 57, 70],
  [75, 65, 61, 53, 94, 86, 81],
  [76, 86, 82, 96, 58, 65, 62],
  [77, 63, 68, 56, 93, 79, 90],
  [78, 74, 59, 57, 95, 92, 79],
  [79, 78, 63, 59, 93, 95, 77],
  [80, 68, 72, 60, 99, 90, 88],
  [81, 85, 94, 101, 61, 66, 75],
  [82, 96, 84, 98, 62, 76, 64],
  [83, INVALID_BASE_CELL, 74, 70, 100, 87, 92], // pentagon
  [84, 69, 82, 64, 97, 89, 98],
  [85, 87, 101, 102, 66, 67, 81],
  [86, 76, 75, 65, 104, 96, 94],
  [87, 83, 102, 100, 67, 70, 85],
  [88, 72, 91, 73, 99, 80, 105],
  [89, 97, 91, 103, 69, 84, 71],
  [90, 77, 80, 68, 106, 93, 99],
  [91, 73, 89, 71, 105, 88, 103],
  [92, 83, 78, 74, 108, 100, 95],
  [93, 79, 90, 77, 109, 95, 106],
  [94, 86, 81, 75, 107, 104, 101],
  [95, 92, 79, 78, 109, 108, 93],
  [96, 104, 98, 110, 76, 86, 82],
  [97, INVALID_BASE_CELL, 98, 84, 103, 89, 111], // pentagon
  [98, 110, 97, 111, 82, 96, 84],
  [99, 80, 105, 88, 106, 90, 113],
  [100, 102, 83, 87, 108, 114, 92],
  [101, 102, 107, 112, 81, 85, 94],
  [102, 101, 87, 85, 114, 112, 100],
  [103, 91, 97, 89, 116, 105, 111],
  [104, 107, 110, 115, 86, 94, 96],
  [105, 88, 103, 91, 113, 99, 116],
  [106, 93, 99, 90, 117, 109, 113],
  [107, INVALID_BASE_CELL, 101, 94, 115, 104, 112], // pentagon
  [108, 100, 95, 92, 118, 114, 109],
  [109, 108, 93, 95, 117, 118, 106],
  [110, 98, 104, 96, 119, 111, 115],
  [111, 97, 110, 98, 116, 103, 119],
  [112, 107, 102, 101, 120, 115, 114],
  [113, 99, 116, 105, 117, 106, 121],
  [114, 112, 100, 102, 118, 120, 108],
  [115, 110, 107, 104, 120, 119, 112],
  [116, 103, 119, 111, 113, 105, 121],
  [117, INVALID_BASE_CELL, 109, 118, 113, 121, 106], // pentagon
  [118, 120, 108, 114, 117, 121, 109],
  [119, 111, 115, 110, 121, 116, 120],
  [120, 115, 114, 112, 121, 119, 118],
  [121, 116, 120, 119, 117, 113, 118],
];

/// 60 degree CCW rotations into the neighboring base cell's coordinate
/// system, per digit direction.
#[rustfmt::skip]
pub(crate) static BASE_CELL_NEIGHBOR_60CCW_ROTS: [[i32; 7]; NUM_BASE_CELLS as usize] = [
  [0, 5, 0, 0, 1, 5, 1], [0, 0, 1, 0, 1, 0, 1], [0, 0, 0, 0, 0, 5, 0], [0, 5, 0, 0, 2, 5, 1],
  [0, -1, 1, 0, 3, 4, 2], // pentagon 4
  [0, 0, 1, 0, 1, 0, 1], [0, 0, 0, 3, 5, 5, 0], [0, 0, 0, 0, 0, 5, 0], [0, 5, 0, 0, 0, 5, 1],
  [0, 0, 1, 3, 0, 0, 1], [0, 0, 1, 3, 0, 0, 1], [0, 3, 3, 3, 0, 0, 0], [0, 5, 0, 0, 3, 5, 1],
  [0, 0, 1, 0, 1, 0, 1],
  [0, -1, 3, 0, 5, 2, 0], // pentagon 14
  [0, 5, 0, 0, 4, 5, 1], [0, 0, 0, 0, 0, 5, 0], [0, 3, 3, 3, 3, 0, 3], [0, 0, 0, 3, 5, 5, 0],
  [0, 3, 3, 3, 0, 0, 0], [0, 3, 3, 3, 0, 3, 0], [0, 0, 0, 3, 5, 5, 0], [0, 0, 1, 0, 1, 0, 1],
  [0, 3, 3, 3, 0, 3, 0],
  [0, -1, 3, 0, 5, 2, 0], // pentagon 24
  [0, 0, 0, 3, 0, 0, 3], [0, 0, 0, 0, 0, 5, 0], [0, 3, 0, 0, 0, 3, 3], [0, 0, 1, 0, 1, 0, 1],
  [0, 0, 1, 3, 0, 0, 1], [0, 3, 3, 3, 0, 0, 0], [0, 0, 0, 0, 0, 5, 0], [0, 3, 3, 3, 3, 0, 3],
  [0, 0, 1, 3, 0, 0, 1], [0, 3, 3, 3, 3, 0, 3], [0, 0, 3, 0, 3, 0, 3], [0, 0, 0, 3, 0, 0, 3],
  [0, 3, 0, 0, 0, 3, 3],
  [0, -1, 3, 0, 5, 2, 0], // pentagon 38
  [0, 3, 0, 0, 3, 3, 0], [0, 3, 0, 0, 3, 3, 0], [0, 0, 0, 3, 5, 5, 0], [0, 0, 0, 3, 5, 5, 0],
  [0, 3, 3, 3, 0, 0, 0], [0, 0, 1, 3, 0, 0, 1], [0, 0, 3, 0, 0, 3, 3], [0, 0, 0, 3, 0, 3, 0],
  [0, 3, 3, 3, 0, 3, 0], [0, 3, 3, 3, 0, 3, 0],
  [0, -1, 3, 0, 5, 2, 0], // pentagon 49
  [0, 0, 0, 3, 0, 0, 3], [0, 3, 0, 0, 0, 3, 3], [0, 0, 3, 0, 3, 0, 3], [0, 3, 3, 3, 0, 0, 0],
  [0, 0, 3, 0, 3, 0, 3], [0, 0, 3, 0, 0, 3, 3], [0, 3, 3, 3, 0, 0, 3], [0, 0, 0, 3, 0, 3, 0],
  [0, -1, 3, 0, 5, 2, 0], // pentagon 58
  [0, 3, 3, 3, 3, 3, 0], [0, 3, 3, 3, 3, 3, 0], [0, 3, 3, 3, 3, 0, 3], [0, 3, 3, 3, 3, 0, 3],
  [0, -1, 3, 0, 5, 2, 0], // pentagon 63
  [0, 0, 0, 3, 0, 0, 3], [0, 3, 3, 3, 0, 3, 0], [0, 3, 0, 0, 0, 3, 3], [0, 3, 0, 0, 3, 3, 0],
  [0, 3, 3, 3, 0, 0, 0], [0, 3, 0, 0, 3, 3, 0], [0, 0, 3, 0, 0, 3, 3], [0, 0, 0, 3, 0, 3, 0],
  [0, -1, 3, 0, 5, 2, 0], // pentagon 72
  [0, 3, 3, 3, 0, 0, 3], [0, 3, 3, 3, 0, 0, 3], [0, 0, 0, 3, 0, 0, 3], [0, 3, 0, 0, 0, 3, 3],
  [0, 0, 0, 3, 0, 5, 0], [0, 3, 3, 3, 0, 0, 0], [0, 0, 1, 3, 1, 0, 1], [0, 0, 1, 3, 1, 0, 1],
  [0, 0, 3, 0, 3, 0, 3], [0, 0, 3, 0, 3, 0, 3],
  [0, -1, 3, 0, 5, 2, 0], // pentagon 83
  [0, 0, 3, 0, 0, 3, 3], [0, 0, 0, 3, 0, 3, 0], [0, 3, 0, 0, 3, 3, 0], [0, 3, 3, 3, 3, 3, 0],
  [0, 0, 0, 3, 0, 5, 0], [0, 3, 3, 3, 3, 3, 0], [0, 0, 0, 0, 0, 0, 1], [0, 3, 3, 3, 0, 0, 0],
  [0, 0, 0, 3, 0, 5, 0], [0, 5, 0, 0, 5, 5, 0], [0, 0, 3, 0, 0, 3, 3], [0, 0, 0, 0, 0, 0, 1],
  [0, 0, 0, 3, 0, 3, 0],
  [0, -1, 3, 0, 5, 2, 0], // pentagon 97
  [0, 3, 3, 3, 0, 0, 3], [0, 5, 0, 0, 5, 5, 0], [0, 0, 1, 3, 1, 0, 1], [0, 3, 3, 3, 0, 0, 3],
  [0, 3, 3, 3, 0, 0, 0], [0, 0, 1, 3, 1, 0, 1], [0, 3, 3, 3, 3, 3, 0], [0, 0, 0, 0, 0, 0, 1],
  [0, 0, 1, 0, 3, 5, 1],
  [0, -1, 3, 0, 5, 2, 0], // pentagon 107
  [0, 5, 0, 0, 5, 5, 0], [0, 0, 1, 0, 4, 5, 1], [0, 3, 3, 3, 0, 0, 0], [0, 0, 0, 3, 0, 5, 0],
  [0, 0, 0, 3, 0, 5, 0], [0, 0, 1, 0, 2, 5, 1], [0, 0, 0, 0, 0, 0, 1], [0, 0, 1, 3, 1, 0, 1],
  [0, 5, 0, 0, 5, 5, 0],
  [0, -1, 1, 0, 3, 4, 2], // pentagon 117
  [0, 0, 1, 0, 0, 5, 1], [0, 0, 0, 0, 0, 0, 1], [0, 5, 0, 0, 5, 5, 0], [0, 0, 1, 0, 1, 5, 1],
];

/// Per-base-cell data: home face address, pentagon flag, clockwise
/// offset faces.
#[rustfmt::skip]
pub(crate) static BASE_CELL_DATA: [BaseCellData; NUM_BASE_CELLS as usize] = [
  cell(1, 1, 0, 0, false, -1, -1),  // base cell 0
  cell(2, 1, 1, 0, false, -1, -1),  // base cell 1
  cell(1, 0, 0, 0, false, -1, -1),  // base cell 2
  cell(2, 1, 0, 0, false, -1, -1),  // base cell 3
  cell(0, 2, 0, 0, true, -1, -1),   // base cell 4 (polar pentagon)
  cell(1, 1, 1, 0, false, -1, -1),  // base cell 5
  cell(1, 0, 0, 1, false, -1, -1),  // base cell 6
  cell(2, 0, 0, 0, false, -1, -1),  // base cell 7
  cell(0, 1, 0, 0, false, -1, -1),  // base cell 8
  cell(2, 0, 1, 0, false, -1, -1),  // base cell 9
  cell(1, 0, 1, 0, false, -1, -1),  // base cell 10
  cell(1, 0, 1, 1, false, -1, -1),  // base cell 11
  cell(3, 1, 0, 0, false, -1, -1),  // base cell 12
  cell(3, 1, 1, 0, false, -1, -1),  // base cell 13
  cell(11, 2, 0, 0, true, 2, 6),    // base cell 14 (pentagon)
  cell(4, 1, 0, 0, false, -1, -1),  // base cell 15
  cell(0, 0, 0, 0, false, -1, -1),  // base cell 16
  cell(6, 0, 1, 0, false, -1, -1),  // base cell 17
  cell(0, 0, 0, 1, false, -1, -1),  // base cell 18
  cell(2, 0, 1, 1, false, -1, -1),  // base cell 19
  cell(7, 0, 0, 1, false, -1, -1),  // base cell 20
  cell(2, 0, 0, 1, false, -1, -1),  // base cell 21
  cell(0, 1, 1, 0, false, -1, -1),  // base cell 22
  cell(6, 0, 0, 1, false, -1, -1),  // base cell 23
  cell(10, 2, 0, 0, true, 1, 5),    // base cell 24 (pentagon)
  cell(6, 0, 0, 0, false, -1, -1),  // base cell 25
  cell(3, 0, 0, 0, false, -1, -1),  // base cell 26
  cell(11, 1, 0, 0, false, -1, -1), // base cell 27
  cell(4, 1, 1, 0, false, -1, -1),  // base cell 28
  cell(3, 0, 1, 0, false, -1, -1),  // base cell 29
  cell(0, 0, 1, 1, false, -1, -1),  // base cell 30
  cell(4, 0, 0, 0, false, -1, -1),  // base cell 31
  cell(5, 0, 1, 0, false, -1, -1),  // base cell 32
  cell(0, 0, 1, 0, false, -1, -1),  // base cell 33
  cell(7, 0, 1, 0, false, -1, -1),  // base cell 34
  cell(11, 1, 1, 0, false, -1, -1), // base cell 35
  cell(7, 0, 0, 0, false, -1, -1),  // base cell 36
  cell(10, 1, 0, 0, false, -1, -1), // base cell 37
  cell(12, 2, 0, 0, true, 3, 7),    // base cell 38 (pentagon)
  cell(6, 1, 0, 1, false, -1, -1),  // base cell 39
  cell(7, 1, 0, 1, false, -1, -1),  // base cell 40
  cell(4, 0, 0, 1, false, -1, -1),  // base cell 41
  cell(3, 0, 0, 1, false, -1, -1),  // base cell 42
  cell(3, 0, 1, 1, false, -1, -1),  // base cell 43
  cell(4, 0, 1, 0, false, -1, -1),  // base cell 44
  cell(6, 1, 0, 0, false, -1, -1),  // base cell 45
  cell(11, 0, 0, 0, false, -1, -1), // base cell 46
  cell(8, 0, 0, 1, false, -1, -1),  // base cell 47
  cell(5, 0, 0, 1, false, -1, -1),  // base cell 48
  cell(14, 2, 0, 0, true, 0, 9),    // base cell 49 (pentagon)
  cell(5, 0, 0, 0, false, -1, -1),  // base cell 50
  cell(12, 1, 0, 0, false, -1, -1), // base cell 51
  cell(10, 1, 1, 0, false, -1, -1), // base cell 52
  cell(4, 0, 1, 1, false, -1, -1),  // base cell 53
  cell(12, 1, 1, 0, false, -1, -1), // base cell 54
  cell(7, 1, 0, 0, false, -1, -1),  // base cell 55
  cell(11, 0, 1, 0, false, -1, -1), // base cell 56
  cell(10, 0, 0, 0, false, -1, -1), // base cell 57
  cell(13, 2, 0, 0, true, 4, 8),    // base cell 58 (pentagon)
  cell(10, 0, 0, 1, false, -1, -1), // base cell 59
  cell(11, 0, 0, 1, false, -1, -1), // base cell 60
  cell(9, 0, 1, 0, false, -1, -1),  // base cell 61
  cell(8, 0, 1, 0, false, -1, -1),  // base cell 62
  cell(6, 2, 0, 0, true, 11, 15),   // base cell 63 (pentagon)
  cell(8, 0, 0, 0, false, -1, -1),  // base cell 64
  cell(9, 0, 0, 1, false, -1, -1),  // base cell 65
  cell(14, 1, 0, 0, false, -1, -1), // base cell 66
  cell(5, 1, 0, 1, false, -1, -1),  // base cell 67
  cell(16, 0, 1, 1, false, -1, -1), // base cell 68
  cell(8, 1, 0, 1, false, -1, -1),  // base cell 69
  cell(5, 1, 0, 0, false, -1, -1),  // base cell 70
  cell(12, 0, 0, 0, false, -1, -1), // base cell 71
  cell(7, 2, 0, 0, true, 12, 16),   // base cell 72 (pentagon)
  cell(12, 0, 1, 0, false, -1, -1), // base cell 73
  cell(10, 0, 1, 0, false, -1, -1), // base cell 74
  cell(9, 0, 0, 0, false, -1, -1),  // base cell 75
  cell(13, 1, 0, 0, false, -1, -1), // base cell 76
  cell(16, 0, 0, 1, false, -1, -1), // base cell 77
  cell(15, 0, 1, 1, false, -1, -1), // base cell 78
  cell(15, 0, 1, 0, false, -1, -1), // base cell 79
  cell(16, 0, 1, 0, false, -1, -1), // base cell 80
  cell(14, 1, 1, 0, false, -1, -1), // base cell 81
  cell(13, 1, 1, 0, false, -1, -1), // base cell 82
  cell(5, 2, 0, 0, true, 10, 19),   // base cell 83 (pentagon)
  cell(8, 1, 0, 0, false, -1, -1),  // base cell 84
  cell(14, 0, 0, 0, false, -1, -1), // base cell 85
  cell(9, 1, 0, 1, false, -1, -1),  // base cell 86
  cell(14, 0, 0, 1, false, -1, -1), // base cell 87
  cell(17, 0, 0, 1, false, -1, -1), // base cell 88
  cell(12, 0, 0, 1, false, -1, -1), // base cell 89
  cell(16, 0, 0, 0, false, -1, -1), // base cell 90
  cell(17, 0, 1, 1, false, -1, -1), // base cell 91
  cell(15, 0, 0, 1, false, -1, -1), // base cell 92
  cell(16, 1, 0, 1, false, -1, -1), // base cell 93
  cell(9, 1, 0, 0, false, -1, -1),  // base cell 94
  cell(15, 0, 0, 0, false, -1, -1), // base cell 95
  cell(13, 0, 0, 0, false, -1, -1), // base cell 96
  cell(8, 2, 0, 0, true, 13, 17),   // base cell 97 (pentagon)
  cell(13, 0, 1, 0, false, -1, -1), // base cell 98
  cell(17, 1, 0, 1, false, -1, -1), // base cell 99
  cell(19, 0, 1, 0, false, -1, -1), // base cell 100
  cell(14, 0, 1, 0, false, -1, -1), // base cell 101
  cell(19, 0, 1, 1, false, -1, -1), // base cell 102
  cell(17, 0, 1, 0, false, -1, -1), // base cell 103
  cell(13, 0, 0, 1, false, -1, -1), // base cell 104
  cell(17, 0, 0, 0, false, -1, -1), // base cell 105
  cell(16, 1, 0, 0, false, -1, -1), // base cell 106
  cell(9, 2, 0, 0, true, 14, 18),   // base cell 107 (pentagon)
  cell(15, 1, 0, 1, false, -1, -1), // base cell 108
  cell(15, 1, 0, 0, false, -1, -1), // base cell 109
  cell(18, 0, 1, 1, false, -1, -1), // base cell 110
  cell(18, 0, 0, 1, false, -1, -1), // base cell 111
  cell(19, 0, 0, 1, false, -1, -1), // base cell 112
  cell(17, 1, 0, 0, false, -1, -1), // base cell 113
  cell(19, 0, 0, 0, false, -1, -1), // base cell 114
  cell(18, 0, 1, 0, false, -1, -1), // base cell 115
  cell(18, 1, 0, 1, false, -1, -1), // base cell 116
  cell(19, 2, 0, 0, true, -1, -1),  // base cell 117 (polar pentagon)
  cell(19, 1, 0, 0, false, -1, -1), // base cell 118
  cell(18, 0, 0, 0, false, -1, -1), // base cell 119
  cell(19, 1, 0, 1, false, -1, -1), // base cell 120
  cell(18, 1, 0, 0, false, -1, -1), // base cell 121
];

/// A base cell and the CCW rotations into its coordinate system.
#[derive(Debug, Clone, Copy)]
struct BaseCellRotation {
  base_cell: i32,
  ccw_rot60: i32,
}

const fn b(base_cell: i32, ccw_rot60: i32) -> BaseCellRotation {
  BaseCellRotation { base_cell, ccw_rot60 }
}

/// Resolution 0 base cell at each valid (face, i, j, k) coordinate with
/// components in 0..=2, plus the rotation count into that base cell's
/// orientation.
#[rustfmt::skip]
static FACE_IJK_BASE_CELLS: [[[[BaseCellRotation; 3]; 3]; 3]; NUM_ICOSA_FACES as usize] = [
  [ // face 0
    [[b(16, 0), b(18, 0), b(24, 0)], [b(33, 0), b(30, 0), b(32, 3)], [b(49, 1), b(48, 3), b(50, 3)]],
    [[b(8, 0), b(5, 5), b(10, 5)], [b(22, 0), b(16, 0), b(18, 0)], [b(41, 1), b(33, 0), b(30, 0)]],
    [[b(4, 0), b(0, 5), b(2, 5)], [b(15, 1), b(8, 0), b(5, 5)], [b(31, 1), b(22, 0), b(16, 0)]],
  ],
  [ // face 1
    [[b(2, 0), b(6, 0), b(14, 0)], [b(10, 0), b(11, 0), b(17, 3)], [b(24, 1), b(23, 3), b(25, 3)]],
    [[b(0, 0), b(1, 5), b(9, 5)], [b(5, 0), b(2, 0), b(6, 0)], [b(18, 1), b(10, 0), b(11, 0)]],
    [[b(4, 1), b(3, 5), b(7, 5)], [b(8, 1), b(0, 0), b(1, 5)], [b(16, 1), b(5, 0), b(2, 0)]],
  ],
  [ // face 2
    [[b(7, 0), b(21, 0), b(38, 0)], [b(9, 0), b(19, 0), b(34, 3)], [b(14, 1), b(20, 3), b(36, 3)]],
    [[b(3, 0), b(13, 5), b(29, 5)], [b(1, 0), b(7, 0), b(21, 0)], [b(6, 1), b(9, 0), b(19, 0)]],
    [[b(4, 2), b(12, 5), b(26, 5)], [b(0, 1), b(3, 0), b(13, 5)], [b(2, 1), b(1, 0), b(7, 0)]],
  ],
  [ // face 3
    [[b(26, 0), b(42, 0), b(58, 0)], [b(29, 0), b(43, 0), b(62, 3)], [b(38, 1), b(47, 3), b(64, 3)]],
    [[b(12, 0), b(28, 5), b(44, 5)], [b(13, 0), b(26, 0), b(42, 0)], [b(21, 1), b(29, 0), b(43, 0)]],
    [[b(4, 3), b(15, 5), b(31, 5)], [b(3, 1), b(12, 0), b(28, 5)], [b(7, 1), b(13, 0), b(26, 0)]],
  ],
  [ // face 4
    [[b(31, 0), b(41, 0), b(49, 0)], [b(44, 0), b(53, 0), b(61, 3)], [b(58, 1), b(65, 3), b(75, 3)]],
    [[b(15, 0), b(22, 5), b(33, 5)], [b(28, 0), b(31, 0), b(41, 0)], [b(42, 1), b(44, 0), b(53, 0)]],
    [[b(4, 4), b(8, 5), b(16, 5)], [b(12, 1), b(15, 0), b(22, 5)], [b(26, 1), b(28, 0), b(31, 0)]],
  ],
  [ // face 5
    [[b(50, 0), b(48, 0), b(49, 3)], [b(32, 0), b(30, 3), b(33, 3)], [b(24, 3), b(18, 3), b(16, 3)]],
    [[b(70, 0), b(67, 0), b(66, 3)], [b(52, 3), b(50, 0), b(48, 0)], [b(37, 3), b(32, 0), b(30, 3)]],
    [[b(83, 0), b(87, 3), b(85, 3)], [b(74, 3), b(70, 0), b(67, 0)], [b(57, 1), b(52, 3), b(50, 0)]],
  ],
  [ // face 6
    [[b(25, 0), b(23, 0), b(24, 3)], [b(17, 0), b(11, 3), b(10, 3)], [b(14, 3), b(6, 3), b(2, 3)]],
    [[b(45, 0), b(39, 0), b(37, 3)], [b(35, 3), b(25, 0), b(23, 0)], [b(27, 3), b(17, 0), b(11, 3)]],
    [[b(63, 0), b(59, 3), b(57, 3)], [b(56, 3), b(45, 0), b(39, 0)], [b(46, 3), b(35, 3), b(25, 0)]],
  ],
  [ // face 7
    [[b(36, 0), b(20, 0), b(14, 3)], [b(34, 0), b(19, 3), b(9, 3)], [b(38, 3), b(21, 3), b(7, 3)]],
    [[b(55, 0), b(40, 0), b(27, 3)], [b(54, 3), b(36, 0), b(20, 0)], [b(51, 3), b(34, 0), b(19, 3)]],
    [[b(72, 0), b(60, 3), b(46, 3)], [b(73, 3), b(55, 0), b(40, 0)], [b(71, 3), b(54, 3), b(36, 0)]],
  ],
  [ // face 8
    [[b(64, 0), b(47, 0), b(38, 3)], [b(62, 0), b(43, 3), b(29, 3)], [b(58, 3), b(42, 3), b(26, 3)]],
    [[b(84, 0), b(69, 0), b(51, 3)], [b(82, 3), b(64, 0), b(47, 0)], [b(76, 3), b(62, 0), b(43, 3)]],
    [[b(97, 0), b(89, 3), b(71, 3)], [b(98, 3), b(84, 0), b(69, 0)], [b(96, 3), b(82, 3), b(64, 0)]],
  ],
  [ // face 9
    [[b(75, 0), b(65, 0), b(58, 3)], [b(61, 0), b(53, 3), b(44, 3)], [b(49, 3), b(41, 3), b(31, 3)]],
    [[b(94, 0), b(86, 0), b(76, 3)], [b(81, 3), b(75, 0), b(65, 0)], [b(66, 3), b(61, 0), b(53, 3)]],
    [[b(107, 0), b(104, 3), b(96, 3)], [b(101, 3), b(94, 0), b(86, 0)], [b(85, 3), b(81, 3), b(75, 0)]],
  ],
  [ // face 10
    [[b(57, 0), b(59, 0), b(63, 3)], [b(74, 0), b(78, 3), b(79, 3)], [b(83, 3), b(92, 3), b(95, 3)]],
    [[b(37, 0), b(39, 3), b(45, 3)], [b(52, 0), b(57, 0), b(59, 0)], [b(70, 3), b(74, 0), b(78, 3)]],
    [[b(24, 0), b(23, 3), b(25, 3)], [b(32, 3), b(37, 0), b(39, 3)], [b(50, 3), b(52, 0), b(57, 0)]],
  ],
  [ // face 11
    [[b(46, 0), b(60, 0), b(72, 3)], [b(56, 0), b(68, 3), b(80, 3)], [b(63, 3), b(77, 3), b(90, 3)]],
    [[b(27, 0), b(40, 3), b(55, 3)], [b(35, 0), b(46, 0), b(60, 0)], [b(45, 3), b(56, 0), b(68, 3)]],
    [[b(14, 0), b(20, 3), b(36, 3)], [b(17, 3), b(27, 0), b(40, 3)], [b(25, 3), b(35, 0), b(46, 0)]],
  ],
  [ // face 12
    [[b(71, 0), b(89, 0), b(97, 3)], [b(73, 0), b(91, 3), b(103, 3)], [b(72, 3), b(88, 3), b(105, 3)]],
    [[b(51, 0), b(69, 3), b(84, 3)], [b(54, 0), b(71, 0), b(89, 0)], [b(55, 3), b(73, 0), b(91, 3)]],
    [[b(38, 0), b(47, 3), b(64, 3)], [b(34, 3), b(51, 0), b(69, 3)], [b(36, 3), b(54, 0), b(71, 0)]],
  ],
  [ // face 13
    [[b(96, 0), b(104, 0), b(107, 3)], [b(98, 0), b(110, 3), b(115, 3)], [b(97, 3), b(111, 3), b(119, 3)]],
    [[b(76, 0), b(86, 3), b(94, 3)], [b(82, 0), b(96, 0), b(104, 0)], [b(84, 3), b(98, 0), b(110, 3)]],
    [[b(58, 0), b(65, 3), b(75, 3)], [b(62, 3), b(76, 0), b(86, 3)], [b(64, 3), b(82, 0), b(96, 0)]],
  ],
  [ // face 14
    [[b(85, 0), b(87, 0), b(83, 3)], [b(101, 0), b(102, 3), b(100, 3)], [b(107, 3), b(112, 3), b(114, 3)]],
    [[b(66, 0), b(67, 3), b(70, 3)], [b(81, 0), b(85, 0), b(87, 0)], [b(94, 3), b(101, 0), b(102, 3)]],
    [[b(49, 0), b(48, 3), b(50, 3)], [b(61, 3), b(66, 0), b(67, 3)], [b(75, 3), b(81, 0), b(85, 0)]],
  ],
  [ // face 15
    [[b(95, 0), b(92, 0), b(83, 0)], [b(79, 0), b(78, 0), b(74, 3)], [b(63, 1), b(59, 3), b(57, 3)]],
    [[b(109, 0), b(108, 0), b(100, 5)], [b(93, 1), b(95, 0), b(92, 0)], [b(77, 1), b(79, 0), b(78, 0)]],
    [[b(117, 4), b(118, 5), b(114, 5)], [b(106, 1), b(109, 0), b(108, 0)], [b(90, 1), b(93, 1), b(95, 0)]],
  ],
  [ // face 16
    [[b(90, 0), b(77, 0), b(63, 0)], [b(80, 0), b(68, 0), b(56, 3)], [b(72, 1), b(60, 3), b(46, 3)]],
    [[b(106, 0), b(93, 0), b(79, 5)], [b(99, 1), b(90, 0), b(77, 0)], [b(88, 1), b(80, 0), b(68, 0)]],
    [[b(117, 3), b(109, 5), b(95, 5)], [b(113, 1), b(106, 0), b(93, 0)], [b(105, 1), b(99, 1), b(90, 0)]],
  ],
  [ // face 17
    [[b(105, 0), b(88, 0), b(72, 0)], [b(103, 0), b(91, 0), b(73, 3)], [b(97, 1), b(89, 3), b(71, 3)]],
    [[b(113, 0), b(99, 0), b(80, 5)], [b(116, 1), b(105, 0), b(88, 0)], [b(111, 1), b(103, 0), b(91, 0)]],
    [[b(117, 2), b(106, 5), b(90, 5)], [b(121, 1), b(113, 0), b(99, 0)], [b(119, 1), b(116, 1), b(105, 0)]],
  ],
  [ // face 18
    [[b(119, 0), b(111, 0), b(97, 0)], [b(115, 0), b(110, 0), b(98, 3)], [b(107, 1), b(104, 3), b(96, 3)]],
    [[b(121, 0), b(116, 0), b(103, 5)], [b(120, 1), b(119, 0), b(111, 0)], [b(112, 1), b(115, 0), b(110, 0)]],
    [[b(117, 1), b(113, 5), b(105, 5)], [b(118, 1), b(121, 0), b(116, 0)], [b(114, 1), b(120, 1), b(119, 0)]],
  ],
  [ // face 19
    [[b(114, 0), b(112, 0), b(107, 0)], [b(100, 0), b(102, 0), b(101, 3)], [b(83, 1), b(87, 3), b(85, 3)]],
    [[b(118, 0), b(120, 0), b(115, 5)], [b(108, 1), b(114, 0), b(112, 0)], [b(92, 1), b(100, 0), b(102, 0)]],
    [[b(117, 0), b(121, 5), b(119, 5)], [b(109, 1), b(118, 0), b(120, 0)], [b(95, 1), b(108, 1), b(114, 0)]],
  ],
];

/// Whether the base cell is one of the twelve pentagons.
#[inline]
#[must_use]
pub(crate) fn is_base_cell_pentagon(base_cell: i32) -> bool {
  if !(0..NUM_BASE_CELLS).contains(&base_cell) {
    return false;
  }
  BASE_CELL_DATA[base_cell as usize].is_pentagon
}

/// Whether the base cell is one of the two polar pentagons.
#[inline]
#[must_use]
pub(crate) fn is_base_cell_polar_pentagon(base_cell: i32) -> bool {
  base_cell == 4 || base_cell == 117
}

#[inline]
fn in_lookup_range(h: &FaceIJK) -> bool {
  (0..NUM_ICOSA_FACES).contains(&h.face)
    && (0..=MAX_FACE_COORD).contains(&h.coord.i)
    && (0..=MAX_FACE_COORD).contains(&h.coord.j)
    && (0..=MAX_FACE_COORD).contains(&h.coord.k)
}

/// Base cell at a resolution 0 face coordinate, or
/// `INVALID_BASE_CELL` for out-of-range input.
#[inline]
#[must_use]
pub(crate) fn face_ijk_to_base_cell(h: &FaceIJK) -> i32 {
  if !in_lookup_range(h) {
    return INVALID_BASE_CELL;
  }
  FACE_IJK_BASE_CELLS[h.face as usize][h.coord.i as usize][h.coord.j as usize][h.coord.k as usize].base_cell
}

/// CCW rotations from the face frame into the orientation of the base
/// cell at a resolution 0 face coordinate, or `INVALID_ROTATIONS` for
/// out-of-range input.
#[inline]
#[must_use]
pub(crate) fn face_ijk_to_base_cell_ccw_rot60(h: &FaceIJK) -> i32 {
  if !in_lookup_range(h) {
    return INVALID_ROTATIONS;
  }
  FACE_IJK_BASE_CELLS[h.face as usize][h.coord.i as usize][h.coord.j as usize][h.coord.k as usize].ccw_rot60
}

/// Home face address of a base cell.
#[inline]
#[must_use]
pub(crate) fn base_cell_to_face_ijk(base_cell: i32) -> FaceIJK {
  BASE_CELL_DATA[base_cell as usize].home
}

/// CCW rotations for a base cell's coordinate system on the given
/// face, or `INVALID_ROTATIONS` if the base cell does not appear on it.
#[must_use]
pub(crate) fn base_cell_to_ccw_rot60(base_cell: i32, face: i32) -> i32 {
  if !(0..NUM_ICOSA_FACES).contains(&face) || !(0..NUM_BASE_CELLS).contains(&base_cell) {
    return INVALID_ROTATIONS;
  }
  for plane in &FACE_IJK_BASE_CELLS[face as usize] {
    for row in plane {
      for entry in row {
        if entry.base_cell == base_cell {
          return entry.ccw_rot60;
        }
      }
    }
  }
  INVALID_ROTATIONS
}

/// Whether `test_face` is a clockwise offset face of the (pentagon)
/// base cell.
#[inline]
#[must_use]
pub(crate) fn base_cell_is_cw_offset(base_cell: i32, test_face: i32) -> bool {
  if !(0..NUM_BASE_CELLS).contains(&base_cell) {
    return false;
  }
  let data = &BASE_CELL_DATA[base_cell as usize];
  data.is_pentagon && (data.cw_offset_pent[0] == test_face || data.cw_offset_pent[1] == test_face)
}

/// Neighboring base cell in the given direction, or
/// `INVALID_BASE_CELL` off the deleted pentagon direction.
#[inline]
#[must_use]
pub(crate) fn base_cell_neighbor(base_cell: i32, dir: Direction) -> i32 {
  if !(0..NUM_BASE_CELLS).contains(&base_cell) || dir == Direction::Invalid {
    return INVALID_BASE_CELL;
  }
  BASE_CELL_NEIGHBORS[base_cell as usize][dir as usize]
}

/// Direction such that stepping from `origin` reaches `neighbor`, or
/// [`Direction::Invalid`] if the base cells are not adjacent.
#[must_use]
pub(crate) fn base_cell_direction(origin: i32, neighbor: i32) -> Direction {
  if !(0..NUM_BASE_CELLS).contains(&origin) || !(0..NUM_BASE_CELLS).contains(&neighbor) {
    return Direction::Invalid;
  }
  for dir in 0..7u8 {
    let dir = Direction::try_from(dir).unwrap_or(Direction::Invalid);
    if base_cell_neighbor(origin, dir) == neighbor {
      return dir;
    }
  }
  Direction::Invalid
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::constants::NUM_PENTAGONS;

  #[test]
  fn pentagon_count_is_twelve() {
    let count = (0..NUM_BASE_CELLS).filter(|&bc| is_base_cell_pentagon(bc)).count();
    assert_eq!(count, NUM_PENTAGONS as usize);
  }

  #[test]
  fn polar_pentagons() {
    assert!(is_base_cell_polar_pentagon(4));
    assert!(is_base_cell_polar_pentagon(117));
    assert!(!is_base_cell_polar_pentagon(14));
    assert!(is_base_cell_pentagon(4) && is_base_cell_pentagon(117));
  }

  #[test]
  fn home_address_resolves_to_own_base_cell() {
    for bc in 0..NUM_BASE_CELLS {
      let home = base_cell_to_face_ijk(bc);
      assert_eq!(face_ijk_to_base_cell(&home), bc, "base cell {bc}");
      assert_eq!(face_ijk_to_base_cell_ccw_rot60(&home), 0, "base cell {bc} home is unrotated");
    }
  }

  #[test]
  fn neighbor_tables_are_symmetric() {
    for bc in 0..NUM_BASE_CELLS {
      for dir in 1..7u8 {
        let dir = Direction::try_from(dir).unwrap();
        let n = base_cell_neighbor(bc, dir);
        if n == INVALID_BASE_CELL {
          assert!(is_base_cell_pentagon(bc), "only pentagons have a deleted direction");
          assert_eq!(dir, Direction::K);
          continue;
        }
        assert_ne!(
          base_cell_direction(n, bc),
          Direction::Invalid,
          "neighbor link {bc} -> {n} must be mutual"
        );
      }
    }
  }

  #[test]
  fn direction_lookup_matches_neighbors() {
    assert_eq!(base_cell_direction(0, 0), Direction::Center);
    for bc in [0, 4, 63, 121] {
      for dir in 2..7u8 {
        let dir = Direction::try_from(dir).unwrap();
        let n = base_cell_neighbor(bc, dir);
        assert_eq!(base_cell_direction(bc, n), dir);
      }
    }
    assert_eq!(base_cell_direction(0, 100), Direction::Invalid);
  }

  #[test]
  fn pentagons_never_border_pentagons() {
    for bc in 0..NUM_BASE_CELLS {
      if !is_base_cell_pentagon(bc) {
        continue;
      }
      for dir in 2..7u8 {
        let n = base_cell_neighbor(bc, Direction::try_from(dir).unwrap());
        assert!(!is_base_cell_pentagon(n), "pentagon {bc} borders pentagon {n}");
      }
    }
  }

  #[test]
  fn cw_offset_faces_only_on_pentagons() {
    for bc in 0..NUM_BASE_CELLS {
      let data = &BASE_CELL_DATA[bc as usize];
      if !data.is_pentagon {
        assert_eq!(data.cw_offset_pent, [-1, -1]);
      }
      assert!(!base_cell_is_cw_offset(bc, -1));
    }
    // pentagon 14 straddles faces 2 and 6
    assert!(base_cell_is_cw_offset(14, 2));
    assert!(base_cell_is_cw_offset(14, 6));
    assert!(!base_cell_is_cw_offset(14, 11));
  }
}
