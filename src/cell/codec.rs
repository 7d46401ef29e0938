//! Bit-level accessors for the packed cell index word, plus the digit
//! rotations used to put indexes into canonical orientation.

use crate::base_cells::is_base_cell_pentagon;
use crate::constants::{
  BASE_CELL_MASK, BASE_CELL_OFFSET, CELL_INIT, CELL_MODE, DIGIT_MASK, HIGH_BIT_MASK, MAX_RES, MODE_MASK, MODE_OFFSET,
  NUM_BASE_CELLS, PER_DIGIT_OFFSET, RESERVED_MASK, RESERVED_OFFSET, RES_MASK, RES_OFFSET,
};
use crate::types::{CellIndex, Direction};

impl CellIndex {
  /// The reserved high bit; 0 for every valid index.
  #[inline]
  #[must_use]
  pub(crate) fn high_bit(self) -> u64 {
    (self.0 & HIGH_BIT_MASK) >> 63
  }

  /// The index mode.
  #[inline]
  #[must_use]
  pub(crate) fn mode(self) -> u8 {
    ((self.0 & MODE_MASK) >> MODE_OFFSET) as u8
  }

  /// Sets the index mode.
  #[inline]
  pub(crate) fn set_mode(&mut self, mode: u8) {
    self.0 = (self.0 & !MODE_MASK) | (u64::from(mode) << MODE_OFFSET);
  }

  /// The reserved bits; 0 for cells, the edge direction for edges.
  #[inline]
  #[must_use]
  pub(crate) fn reserved(self) -> i32 {
    ((self.0 & RESERVED_MASK) >> RESERVED_OFFSET) as i32
  }

  /// Sets the reserved bits.
  #[inline]
  pub(crate) fn set_reserved(&mut self, v: i32) {
    self.0 = (self.0 & !RESERVED_MASK) | ((v as u64) << RESERVED_OFFSET);
  }

  /// The resolution, 0..=15.
  #[inline]
  #[must_use]
  pub fn resolution(self) -> i32 {
    ((self.0 & RES_MASK) >> RES_OFFSET) as i32
  }

  /// Sets the resolution.
  #[inline]
  pub(crate) fn set_resolution(&mut self, res: i32) {
    self.0 = (self.0 & !RES_MASK) | ((res as u64) << RES_OFFSET);
  }

  /// The base cell number, 0..=121 for valid indexes.
  #[inline]
  #[must_use]
  pub fn base_cell(self) -> i32 {
    ((self.0 & BASE_CELL_MASK) >> BASE_CELL_OFFSET) as i32
  }

  /// Sets the base cell number.
  #[inline]
  pub(crate) fn set_base_cell(&mut self, base_cell: i32) {
    self.0 = (self.0 & !BASE_CELL_MASK) | ((base_cell as u64) << BASE_CELL_OFFSET);
  }

  /// The path digit at resolution `res` (1..=15); r = 1 occupies the
  /// most significant digit bits, r = 15 the least.
  #[inline]
  #[must_use]
  pub(crate) fn digit(self, res: i32) -> Direction {
    let shift = (MAX_RES - res) as u64 * PER_DIGIT_OFFSET;
    Direction::try_from(((self.0 >> shift) & DIGIT_MASK) as u8).unwrap_or(Direction::Invalid)
  }

  /// Sets the path digit at resolution `res`.
  #[inline]
  pub(crate) fn set_digit(&mut self, res: i32, digit: Direction) {
    let shift = (MAX_RES - res) as u64 * PER_DIGIT_OFFSET;
    self.0 = (self.0 & !(DIGIT_MASK << shift)) | ((digit as u64) << shift);
  }

  /// The coarsest non-center path digit, or [`Direction::Center`] if
  /// every digit up to the resolution is the center.
  #[must_use]
  pub(crate) fn leading_non_zero_digit(self) -> Direction {
    for r in 1..=self.resolution() {
      let digit = self.digit(r);
      if digit != Direction::Center {
        return digit;
      }
    }
    Direction::Center
  }

  /// Rotates all path digits 60 degrees counter-clockwise.
  #[must_use]
  pub(crate) fn rotate60_ccw(self) -> CellIndex {
    let mut h = self;
    for r in 1..=h.resolution() {
      h.set_digit(r, h.digit(r).rotate60_ccw());
    }
    h
  }

  /// Rotates all path digits 60 degrees clockwise.
  #[must_use]
  pub(crate) fn rotate60_cw(self) -> CellIndex {
    let mut h = self;
    for r in 1..=h.resolution() {
      h.set_digit(r, h.digit(r).rotate60_cw());
    }
    h
  }

  /// Rotates 60 degrees counter-clockwise about a pentagonal center,
  /// skipping over the deleted K subsequence.
  #[must_use]
  pub(crate) fn rotate_pent60_ccw(self) -> CellIndex {
    let mut h = self;
    let mut found_first_non_zero = false;
    for r in 1..=h.resolution() {
      h.set_digit(r, h.digit(r).rotate60_ccw());

      if !found_first_non_zero && h.digit(r) != Direction::Center {
        found_first_non_zero = true;
        if h.leading_non_zero_digit() == Direction::K {
          h = h.rotate60_ccw();
        }
      }
    }
    h
  }

  /// Rotates 60 degrees clockwise about a pentagonal center, skipping
  /// over the deleted K subsequence.
  #[must_use]
  pub(crate) fn rotate_pent60_cw(self) -> CellIndex {
    let mut h = self;
    let mut found_first_non_zero = false;
    for r in 1..=h.resolution() {
      h.set_digit(r, h.digit(r).rotate60_cw());

      if !found_first_non_zero && h.digit(r) != Direction::Center {
        found_first_non_zero = true;
        if h.leading_non_zero_digit() == Direction::K {
          h = h.rotate60_cw();
        }
      }
    }
    h
  }

  /// Whether the index is a valid cell: zero high bit, cell mode, zero
  /// reserved bits, a base cell in range, in-range digits up to the
  /// resolution (respecting the pentagon deleted subsequence) and the
  /// unused sentinel beyond it.
  #[must_use]
  pub fn is_valid(self) -> bool {
    if self.high_bit() != 0 || self.mode() != CELL_MODE || self.reserved() != 0 {
      return false;
    }

    let base_cell = self.base_cell();
    if !(0..NUM_BASE_CELLS).contains(&base_cell) {
      return false;
    }

    let res = self.resolution();
    if !(0..=MAX_RES).contains(&res) {
      return false;
    }

    let mut found_first_non_zero = false;
    for r in 1..=res {
      let digit = self.digit(r);
      if digit == Direction::Invalid {
        return false;
      }
      if !found_first_non_zero && digit != Direction::Center {
        found_first_non_zero = true;
        if is_base_cell_pentagon(base_cell) && digit == Direction::K {
          return false;
        }
      }
    }

    for r in res + 1..=MAX_RES {
      if self.digit(r) != Direction::Invalid {
        return false;
      }
    }

    true
  }

  /// Whether the index addresses one of the twelve pentagons of its
  /// resolution.
  #[inline]
  #[must_use]
  pub fn is_pentagon(self) -> bool {
    is_base_cell_pentagon(self.base_cell()) && self.leading_non_zero_digit() == Direction::Center
  }
}

/// Builds a cell index with the given resolution and base cell, with
/// every digit up to the resolution set to `init_digit`.
#[must_use]
pub(crate) fn make_cell(res: i32, base_cell: i32, init_digit: Direction) -> CellIndex {
  let mut h = CellIndex(CELL_INIT);
  h.set_mode(CELL_MODE);
  h.set_resolution(res);
  h.set_base_cell(base_cell);
  for r in 1..=res {
    h.set_digit(r, init_digit);
  }
  h
}
