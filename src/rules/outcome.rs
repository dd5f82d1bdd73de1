//! Results of engine operations: status, selections, move records,
//! and the rejection taxonomy.
//!
//! Rejections are ordinary values, not faults. Every variant carries a
//! user-facing message a frontend can show verbatim before letting the
//! player try again.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Color, Coord, PieceId};

/// The engine's state machine.
///
/// `Turn` states alternate between the colors; `Won` is terminal and
/// rejects all further operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// The given player may select and move.
    Turn(Color),
    /// The given player has captured every opposing piece.
    Won(Color),
}

impl GameStatus {
    /// The player to move, if the game is still running.
    #[must_use]
    pub const fn current_player(self) -> Option<Color> {
        match self {
            GameStatus::Turn(color) => Some(color),
            GameStatus::Won(_) => None,
        }
    }

    /// The winner, once the game has ended.
    #[must_use]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Turn(_) => None,
            GameStatus::Won(color) => Some(color),
        }
    }

    /// Whether the game has ended.
    #[must_use]
    pub const fn is_game_over(self) -> bool {
        matches!(self, GameStatus::Won(_))
    }
}

/// Result of a successful selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// A piece is now selected.
    Selected(PieceId),
    /// Re-selecting the selected piece toggled the selection off.
    Cleared,
}

/// A capture folded into a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capture {
    /// The removed piece.
    pub piece: PieceId,
    /// Its color (always the mover's opponent).
    pub color: Color,
    /// The jumped-over square it occupied.
    pub at: Coord,
}

/// A successfully applied move, as recorded in the game history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who moved.
    pub player: Color,
    /// Square the piece left.
    pub from: Coord,
    /// Square the piece landed on.
    pub to: Coord,
    /// The capture, for jump moves.
    pub capture: Option<Capture>,
    /// Turn number when the move was made (starts at 1).
    pub turn_number: u32,
}

/// Why a selection was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("the game is already over")]
    GameOver,
    #[error("there is no piece on that square")]
    NoPiece,
    #[error("that piece belongs to the opponent, it is {0}'s turn")]
    WrongTurn(Color),
}

/// Why a move was rejected.
///
/// Variants are ordered the way validation evaluates them; the branch
/// order is part of the engine contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("the game is already over")]
    GameOver,
    #[error("no piece is selected")]
    NoSelection,
    #[error("the destination is off the board")]
    OutOfBounds,
    #[error("invalid move, only diagonal moves are allowed")]
    NotDiagonal,
    #[error("the destination square is occupied")]
    Occupied,
    #[error("cannot move two squares without capturing a piece")]
    EmptyJump,
    #[error("invalid move, move one square diagonally or jump over an opposing piece")]
    InvalidDistance,
}
