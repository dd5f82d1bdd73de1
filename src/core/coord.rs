//! Board coordinates and move offsets.
//!
//! A `Coord` names a square by (column, row); the difference between two
//! coords is an `Offset`. Move validation works entirely on offsets: a
//! simple move changes both components by one, a capture by two, and the
//! midpoint of a capture offset locates the jumped square.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A board square, addressed by column and row.
///
/// Columns and rows are 0-based. Signed storage lets offset arithmetic
/// produce off-board results that bounds checks reject later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub col: i8,
    pub row: i8,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(col: i8, row: i8) -> Self {
        Self { col, row }
    }

    /// Whether this square is dark under the standard parity rule.
    ///
    /// Dark squares are those with odd `col + row`; pieces only ever
    /// occupy dark squares.
    #[must_use]
    pub fn is_dark(self) -> bool {
        (self.col + self.row).rem_euclid(2) == 1
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// Component-wise difference between two coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Offset {
    pub dcol: i8,
    pub drow: i8,
}

impl Offset {
    /// Create a new offset.
    #[must_use]
    pub const fn new(dcol: i8, drow: i8) -> Self {
        Self { dcol, drow }
    }

    /// Whether either component is zero (orthogonal or null movement).
    #[must_use]
    pub const fn has_zero_axis(self) -> bool {
        self.dcol == 0 || self.drow == 0
    }

    /// Whether this is a one-square diagonal step.
    #[must_use]
    pub const fn is_unit_diagonal(self) -> bool {
        self.dcol.abs() == 1 && self.drow.abs() == 1
    }

    /// Whether this is a two-square diagonal jump.
    #[must_use]
    pub const fn is_jump_diagonal(self) -> bool {
        self.dcol.abs() == 2 && self.drow.abs() == 2
    }

    /// Half of this offset, component-wise.
    ///
    /// For a jump offset this points at the jumped-over square.
    #[must_use]
    pub const fn midpoint(self) -> Self {
        Self {
            dcol: self.dcol / 2,
            drow: self.drow / 2,
        }
    }
}

impl Sub for Coord {
    type Output = Offset;

    fn sub(self, rhs: Coord) -> Offset {
        Offset::new(self.col - rhs.col, self.row - rhs.row)
    }
}

impl Add<Offset> for Coord {
    type Output = Coord;

    fn add(self, rhs: Offset) -> Coord {
        Coord::new(self.col + rhs.dcol, self.row + rhs.drow)
    }
}
