//! Core engine types: colors, coordinates, pieces, configuration.
//!
//! This module contains the fundamental building blocks shared by the board
//! and the rules engine. Board dimensions and layout are configured via
//! `BoardConfig` rather than hardcoded.

pub mod config;
pub mod coord;
pub mod piece;
pub mod player;

pub use config::BoardConfig;
pub use coord::{Coord, Offset};
pub use piece::{Piece, PieceId};
pub use player::{Color, ColorMap};
