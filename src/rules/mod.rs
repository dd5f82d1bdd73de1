//! Rules engine: turn state machine, move validation, scoring, win
//! detection.
//!
//! ## Key Types
//!
//! - `GameEngine`: owns one game and exposes the select/move protocol
//! - `GameStatus`: turn alternation with terminal `Won` states
//! - `MoveRecord` / `Capture`: applied moves, kept in the game history
//! - `SelectionError` / `MoveError`: the rejection taxonomy
//! - `GameSnapshot`: read-only view for presentation layers

pub mod engine;
pub mod outcome;
pub mod snapshot;

pub use engine::GameEngine;
pub use outcome::{Capture, GameStatus, MoveError, MoveRecord, Selection, SelectionError};
pub use snapshot::GameSnapshot;
