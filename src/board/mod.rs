//! Board: piece placement and square geometry.
//!
//! ## Key Types
//!
//! - `Board`: occupancy grid + live piece table
//! - `BoardConfig`: dimensions and layout (from `core::config`)
//!
//! The board answers occupancy queries and applies unchecked placement
//! primitives; move legality lives in `rules`.

pub mod grid;

pub use grid::Board;

// Re-export the configuration type from core for convenience
pub use crate::core::config::BoardConfig;
