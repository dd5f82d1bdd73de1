//! Board occupancy tracking.
//!
//! The board is a row-major grid of optional piece ids plus a table of live
//! pieces. The two views are kept mutually consistent: a square points at a
//! piece exactly when that piece's recorded position is the square, and no
//! two live pieces share a square.
//!
//! The board owns placement and geometry only. It never reads turn state,
//! and its mutation primitives are unchecked: rule validation happens in
//! `rules::GameEngine` before anything here is called.

use rustc_hash::FxHashMap;

use crate::core::{BoardConfig, Color, Coord, Piece, PieceId};

/// Piece occupancy for one game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    config: BoardConfig,
    /// Row-major occupancy: `squares[row * size + col]`.
    squares: Vec<Option<PieceId>>,
    /// Live pieces by id. Captured pieces are removed, never reused.
    pieces: FxHashMap<PieceId, Piece>,
    next_piece_id: u32,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            squares: vec![None; config.square_count()],
            pieces: FxHashMap::default(),
            next_piece_id: 0,
        }
    }

    /// Create a board with the standard starting layout.
    ///
    /// White fills the dark squares of the bottom `rows_per_side` rows,
    /// Black mirrors it on the top rows.
    #[must_use]
    pub fn with_starting_pieces(config: BoardConfig) -> Self {
        let mut board = Self::new(config);
        let size = config.size() as i8;
        let rows = config.rows_per_side() as i8;

        for row in 0..rows {
            for col in 0..size {
                let coord = Coord::new(col, row);
                if board.is_dark_square(coord) {
                    board.spawn_piece(Color::White, coord);
                }
            }
        }

        for row in (size - rows)..size {
            for col in 0..size {
                let coord = Coord::new(col, row);
                if board.is_dark_square(coord) {
                    board.spawn_piece(Color::Black, coord);
                }
            }
        }

        board
    }

    /// Get the board configuration.
    #[must_use]
    pub fn config(&self) -> BoardConfig {
        self.config
    }

    /// Board side length.
    #[must_use]
    pub fn size(&self) -> u8 {
        self.config.size()
    }

    /// Whether a coordinate lies on the board.
    #[must_use]
    pub fn in_bounds(&self, coord: Coord) -> bool {
        let size = self.config.size() as i8;
        (0..size).contains(&coord.col) && (0..size).contains(&coord.row)
    }

    /// Whether a square is dark (playable).
    #[must_use]
    pub fn is_dark_square(&self, coord: Coord) -> bool {
        coord.is_dark()
    }

    /// Look up the piece occupying a square, if any. O(1).
    #[must_use]
    pub fn piece_at(&self, coord: Coord) -> Option<&Piece> {
        if !self.in_bounds(coord) {
            return None;
        }
        let id = self.squares[self.index(coord)]?;
        self.pieces.get(&id)
    }

    /// Look up a live piece by id.
    #[must_use]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(&id)
    }

    /// Place a new piece on an empty square and return its id.
    ///
    /// Used by the starting-layout constructor and by tests that set up
    /// positions directly.
    pub fn spawn_piece(&mut self, color: Color, at: Coord) -> PieceId {
        assert!(self.in_bounds(at), "Spawn target {at} is off the board");
        assert!(
            self.squares[self.index(at)].is_none(),
            "Spawn target {at} is already occupied"
        );

        let id = PieceId::new(self.next_piece_id);
        self.next_piece_id += 1;

        let idx = self.index(at);
        self.squares[idx] = Some(id);
        self.pieces.insert(id, Piece::new(id, color, at));
        id
    }

    /// Relocate a piece to a square, unconditionally.
    ///
    /// Returns the vacated square, or `None` when the id is not live.
    /// The caller is responsible for having validated the move.
    pub fn move_piece(&mut self, id: PieceId, to: Coord) -> Option<Coord> {
        let piece = self.pieces.get_mut(&id)?;
        let from = piece.position;
        piece.position = to;

        let from_idx = self.index(from);
        let to_idx = self.index(to);
        self.squares[from_idx] = None;
        self.squares[to_idx] = Some(id);
        Some(from)
    }

    /// Remove and return the piece occupying a square.
    ///
    /// No-op returning `None` when the square is empty or off the board.
    pub fn remove_piece_at(&mut self, coord: Coord) -> Option<Piece> {
        if !self.in_bounds(coord) {
            return None;
        }
        let idx = self.index(coord);
        let id = self.squares[idx].take()?;
        self.pieces.remove(&id)
    }

    /// Number of live pieces of a color.
    #[must_use]
    pub fn piece_count(&self, color: Color) -> usize {
        self.pieces.values().filter(|p| p.color == color).count()
    }

    /// Iterate over all live pieces, in no particular order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.values()
    }

    /// Row-major render array: 0 = empty, 1 = white, 2 = black.
    #[must_use]
    pub fn cells(&self) -> Vec<u8> {
        let mut cells = vec![0u8; self.config.square_count()];
        for piece in self.pieces.values() {
            cells[self.index(piece.position)] = match piece.color {
                Color::White => 1,
                Color::Black => 2,
            };
        }
        cells
    }

    fn index(&self, coord: Coord) -> usize {
        debug_assert!(self.in_bounds(coord));
        coord.row as usize * self.config.size() as usize + coord.col as usize
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::with_starting_pieces(BoardConfig::default())
    }
}
