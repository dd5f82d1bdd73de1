//! # rust-checkers
//!
//! A checkers rules engine: board setup, turn management, move legality,
//! capture resolution, scoring, and win detection.
//!
//! ## Design Principles
//!
//! 1. **Engine, not application**: no rendering, input, or asset handling.
//!    A presentation layer asks the engine whether a move is legal, applies
//!    it, and reads back state to render.
//!
//! 2. **Rejections are values**: illegal selections and moves come back as
//!    `Result::Err` with a user-facing message. They are normal control
//!    flow, never panics.
//!
//! 3. **Configuration over constants**: board size and starting rows come
//!    from `BoardConfig`; the win threshold is derived from the starting
//!    piece count, not hardcoded.
//!
//! 4. **Instances, not globals**: each `GameEngine` owns one game, so
//!    several games can run side by side and tests stay deterministic.
//!
//! ## Modules
//!
//! - `core`: colors, coordinates, pieces, configuration
//! - `board`: occupancy grid, starting layout, placement primitives
//! - `rules`: the game state machine, move validation, snapshots
//!
//! ## Example
//!
//! ```
//! use rust_checkers::{Coord, GameEngine};
//!
//! let mut game = GameEngine::new();
//! game.try_select(Coord::new(1, 2)).unwrap();
//! game.try_move(Coord::new(2, 3)).unwrap();
//!
//! let snapshot = game.snapshot();
//! assert_eq!(snapshot.status_text(), "White: 0\nBlack: 0\nTurn: Black");
//! ```

pub mod board;
pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{BoardConfig, Color, ColorMap, Coord, Offset, Piece, PieceId};

pub use crate::board::Board;

pub use crate::rules::{
    Capture, GameEngine, GameSnapshot, GameStatus, MoveError, MoveRecord, Selection,
    SelectionError,
};
