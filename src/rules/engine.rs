//! The game engine: turn management, move validation, scoring, win
//! detection.
//!
//! ## Protocol
//!
//! A frontend drives one `GameEngine` per game:
//! 1. `try_select(coord)` to pick up (or toggle/replace) a piece of the
//!    player to move.
//! 2. `try_move(coord)` to attempt moving the selected piece.
//! 3. Read back `snapshot()` / accessors to render the result.
//!
//! Both operations return rejections as values; nothing here panics on
//! illegal play. A rejected operation leaves board, scores, selection,
//! history, and status unchanged.
//!
//! ## Validation order
//!
//! `try_move` evaluates its branches in a fixed order that is part of the
//! contract: not-diagonal (either offset component zero, which also covers
//! a null move) first, then the one-square simple move, then the two-square
//! capture, then everything else as an invalid distance. Non-square jumps
//! like (1, 2) land in the last branch.

use smallvec::SmallVec;

use crate::board::Board;
use crate::core::{BoardConfig, Color, ColorMap, Coord, Offset, Piece, PieceId};

use super::outcome::{Capture, GameStatus, MoveError, MoveRecord, Selection, SelectionError};

/// Rules engine and state for a single game.
///
/// Owns the board exclusively; frontends mutate game state only through
/// `try_select` and `try_move`.
#[derive(Clone, Debug)]
pub struct GameEngine {
    board: Board,
    status: GameStatus,
    selected: Option<PieceId>,
    scores: ColorMap<u32>,
    turn_number: u32,
    history: im::Vector<MoveRecord>,
}

impl GameEngine {
    /// Start a standard game: 8x8 board, 12 pieces per side, White to move.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(BoardConfig::default())
    }

    /// Start a game on a board with the given configuration.
    #[must_use]
    pub fn with_config(config: BoardConfig) -> Self {
        Self {
            board: Board::with_starting_pieces(config),
            status: GameStatus::Turn(Color::White),
            selected: None,
            scores: ColorMap::default(),
            turn_number: 1,
            history: im::Vector::new(),
        }
    }

    /// Start from a prepared board, for endgame setups and tests.
    ///
    /// Turn and scores start fresh: `to_move` plays, both scores are zero.
    #[must_use]
    pub fn from_board(board: Board, to_move: Color) -> Self {
        Self {
            board,
            status: GameStatus::Turn(to_move),
            selected: None,
            scores: ColorMap::default(),
            turn_number: 1,
            history: im::Vector::new(),
        }
    }

    // === Read-only accessors ===

    /// The board, for rendering and queries.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current state-machine status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The player to move, `None` once the game is over.
    #[must_use]
    pub fn current_player(&self) -> Option<Color> {
        self.status.current_player()
    }

    /// The winner, once decided.
    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        self.status.winner()
    }

    /// Captures made by a color so far.
    #[must_use]
    pub fn score(&self, color: Color) -> u32 {
        self.scores[color]
    }

    /// The currently selected piece, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&Piece> {
        self.board.piece(self.selected?)
    }

    /// Turn counter, starting at 1 and bumped after every applied move.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Applied moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &im::Vector<MoveRecord> {
        &self.history
    }

    /// Captures needed to win: the opponent's starting piece count.
    #[must_use]
    pub fn win_threshold(&self) -> u32 {
        self.board.config().pieces_per_side()
    }

    // === Operations ===

    /// Select the piece on `at` for the player to move.
    ///
    /// Re-selecting the selected piece toggles the selection off; selecting
    /// a different own piece replaces the selection without moving.
    pub fn try_select(&mut self, at: Coord) -> Result<Selection, SelectionError> {
        let GameStatus::Turn(player) = self.status else {
            return Err(SelectionError::GameOver);
        };

        let piece = self.board.piece_at(at).ok_or(SelectionError::NoPiece)?;
        if piece.color != player {
            return Err(SelectionError::WrongTurn(player));
        }

        let id = piece.id;
        if self.selected == Some(id) {
            self.selected = None;
            tracing::trace!(piece = %id, at = %at, "selection toggled off");
            Ok(Selection::Cleared)
        } else {
            self.selected = Some(id);
            tracing::trace!(piece = %id, at = %at, "piece selected");
            Ok(Selection::Selected(id))
        }
    }

    /// Move the selected piece to `to`.
    ///
    /// On success the selection is cleared, the move is recorded, and the
    /// turn passes to the opponent (or the game ends on the winning
    /// capture).
    pub fn try_move(&mut self, to: Coord) -> Result<MoveRecord, MoveError> {
        let GameStatus::Turn(player) = self.status else {
            return Err(MoveError::GameOver);
        };
        let id = self.selected.ok_or(MoveError::NoSelection)?;
        let from = self
            .board
            .piece(id)
            .ok_or(MoveError::NoSelection)?
            .position;

        if !self.board.in_bounds(to) {
            return Err(MoveError::OutOfBounds);
        }

        let diff = to - from;
        if diff.has_zero_axis() {
            return Err(MoveError::NotDiagonal);
        }

        if diff.is_unit_diagonal() {
            if self.board.piece_at(to).is_some() {
                return Err(MoveError::Occupied);
            }
            self.board.move_piece(id, to);
            Ok(self.finish_move(player, from, to, None))
        } else if diff.is_jump_diagonal() {
            let mid = from + diff.midpoint();
            let jumps_opponent = self
                .board
                .piece_at(mid)
                .is_some_and(|p| p.color == player.opponent());
            if !jumps_opponent {
                return Err(MoveError::EmptyJump);
            }
            if self.board.piece_at(to).is_some() {
                return Err(MoveError::Occupied);
            }

            let Some(taken) = self.board.remove_piece_at(mid) else {
                return Err(MoveError::EmptyJump);
            };
            self.scores[player] += 1;
            self.board.move_piece(id, to);

            let capture = Capture {
                piece: taken.id,
                color: taken.color,
                at: mid,
            };
            Ok(self.finish_move(player, from, to, Some(capture)))
        } else {
            Err(MoveError::InvalidDistance)
        }
    }

    /// Squares the piece on `at` could legally move to right now.
    ///
    /// A pure query for frontends that highlight destinations; it ignores
    /// whose turn it is and works off the piece's own color.
    #[must_use]
    pub fn legal_destinations(&self, at: Coord) -> SmallVec<[Coord; 8]> {
        let mut out = SmallVec::new();
        let Some(piece) = self.board.piece_at(at) else {
            return out;
        };
        let opponent = piece.color.opponent();

        for dcol in [-1i8, 1] {
            for drow in [-1i8, 1] {
                let step = at + Offset::new(dcol, drow);
                if self.board.in_bounds(step) && self.board.piece_at(step).is_none() {
                    out.push(step);
                }

                let jump = at + Offset::new(dcol * 2, drow * 2);
                let jumps_opponent = self
                    .board
                    .piece_at(step)
                    .is_some_and(|p| p.color == opponent);
                if jumps_opponent
                    && self.board.in_bounds(jump)
                    && self.board.piece_at(jump).is_none()
                {
                    out.push(jump);
                }
            }
        }

        out
    }

    // === Internals ===

    /// Bookkeeping shared by both move kinds: clears the selection,
    /// records the move, then either ends the game or passes the turn.
    fn finish_move(
        &mut self,
        player: Color,
        from: Coord,
        to: Coord,
        capture: Option<Capture>,
    ) -> MoveRecord {
        self.selected = None;

        let record = MoveRecord {
            player,
            from,
            to,
            capture,
            turn_number: self.turn_number,
        };
        self.history.push_back(record);

        match capture {
            Some(cap) => tracing::debug!(
                player = %player, from = %from, to = %to, captured = %cap.piece,
                "capture applied"
            ),
            None => tracing::debug!(player = %player, from = %from, to = %to, "move applied"),
        }

        if self.scores[player] >= self.win_threshold() {
            self.status = GameStatus::Won(player);
            tracing::info!(winner = %player, "game over");
        } else {
            self.advance_turn();
        }

        record
    }

    fn advance_turn(&mut self) {
        if let GameStatus::Turn(player) = self.status {
            self.status = GameStatus::Turn(player.opponent());
            self.turn_number += 1;
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
