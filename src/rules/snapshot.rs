//! Read-only game snapshots for presentation layers.
//!
//! A frontend renders from a `GameSnapshot` instead of poking at engine
//! internals: board cells, scores, turn, selection, and the winner once
//! there is one. The snapshot serializes, so it can cross a process or
//! wire boundary unchanged.

use serde::Serialize;

use crate::core::{Color, Coord};

use super::engine::GameEngine;

/// Everything a frontend needs to draw one frame of the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    /// Row-major cells: 0 = empty, 1 = white, 2 = black.
    pub cells: Vec<u8>,
    /// Board side length, for decoding `cells`.
    pub size: u8,
    /// The player to move; `None` once the game is over.
    pub current_player: Option<Color>,
    pub white_score: u32,
    pub black_score: u32,
    /// Square of the currently selected piece, if any.
    pub selected: Option<Coord>,
    pub is_game_over: bool,
    pub winner: Option<Color>,
    pub turn_number: u32,
}

impl GameSnapshot {
    /// Status line for a score display.
    ///
    /// While the game runs:
    /// `"White: {n}\nBlack: {n}\nTurn: {player}"`; after the winning
    /// capture, `"{winner} won!"`.
    #[must_use]
    pub fn status_text(&self) -> String {
        match self.winner {
            Some(winner) => format!("{winner} won!"),
            None => {
                let turn = self
                    .current_player
                    .map(|p| p.to_string())
                    .unwrap_or_default();
                format!(
                    "White: {}\nBlack: {}\nTurn: {}",
                    self.white_score, self.black_score, turn
                )
            }
        }
    }
}

impl GameEngine {
    /// Capture the current state as a render-ready snapshot.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            cells: self.board().cells(),
            size: self.board().size(),
            current_player: self.current_player(),
            white_score: self.score(Color::White),
            black_score: self.score(Color::Black),
            selected: self.selected().map(|p| p.position),
            is_game_over: self.status().is_game_over(),
            winner: self.winner(),
            turn_number: self.turn_number(),
        }
    }
}
