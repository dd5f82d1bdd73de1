//! Piece identity and piece values.
//!
//! Every piece gets a `PieceId` when the board spawns it. The id stays
//! stable while the piece moves and is retired permanently when the piece
//! is captured; ids are never reused within a game.

use serde::{Deserialize, Serialize};

use super::coord::Coord;
use super::player::Color;

/// Unique identifier for a piece on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceId(pub u32);

impl PieceId {
    /// Create a new piece ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Piece({})", self.0)
    }
}

/// A live piece: stable identity, owning color, current square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    pub color: Color,
    pub position: Coord,
}

impl Piece {
    /// Create a new piece.
    #[must_use]
    pub const fn new(id: PieceId, color: Color, position: Coord) -> Self {
        Self {
            id,
            color,
            position,
        }
    }
}
