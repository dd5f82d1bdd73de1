//! Board configuration.
//!
//! The engine hardcodes neither the board size nor the starting layout.
//! Games provide a `BoardConfig` at construction; the win threshold is
//! derived from it rather than carried as a separate constant.

use serde::{Deserialize, Serialize};

/// Board dimensions and starting layout.
///
/// The default is the standard game: an 8x8 board with three home rows
/// per side, which works out to 12 pieces each.
///
/// ## Example
///
/// ```
/// use rust_checkers::core::BoardConfig;
///
/// let config = BoardConfig::default();
/// assert_eq!(config.size(), 8);
/// assert_eq!(config.pieces_per_side(), 12);
///
/// let small = BoardConfig::new(6).with_rows_per_side(2);
/// assert_eq!(small.pieces_per_side(), 6);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    size: u8,
    rows_per_side: u8,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size: 8,
            rows_per_side: 3,
        }
    }
}

impl BoardConfig {
    /// Create a configuration for a square board of the given size.
    ///
    /// Starts with the standard three home rows per side; adjust via
    /// `with_rows_per_side`.
    pub fn new(size: u8) -> Self {
        assert!(size >= 2, "Board must be at least 2x2");
        assert!(size % 2 == 0, "Board size must be even");

        Self {
            size,
            rows_per_side: 3.min(size / 2 - 1).max(1),
        }
    }

    /// Set the number of starting rows per side.
    #[must_use]
    pub fn with_rows_per_side(mut self, rows: u8) -> Self {
        assert!(rows >= 1, "Each side needs at least one home row");
        assert!(
            rows as u16 * 2 <= self.size as u16,
            "Home rows of the two sides may not overlap"
        );
        self.rows_per_side = rows;
        self
    }

    /// Board side length.
    #[must_use]
    pub const fn size(&self) -> u8 {
        self.size
    }

    /// Number of starting rows each side occupies.
    #[must_use]
    pub const fn rows_per_side(&self) -> u8 {
        self.rows_per_side
    }

    /// Total number of squares.
    #[must_use]
    pub const fn square_count(&self) -> usize {
        self.size as usize * self.size as usize
    }

    /// Starting piece count per side: half the squares of each home row
    /// are dark.
    ///
    /// Capturing this many opposing pieces wins the game.
    #[must_use]
    pub const fn pieces_per_side(&self) -> u32 {
        self.rows_per_side as u32 * (self.size as u32 / 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BoardConfig::default();

        assert_eq!(config.size(), 8);
        assert_eq!(config.rows_per_side(), 3);
        assert_eq!(config.square_count(), 64);
        assert_eq!(config.pieces_per_side(), 12);
    }

    #[test]
    fn test_small_board() {
        let config = BoardConfig::new(4);

        assert_eq!(config.rows_per_side(), 1);
        assert_eq!(config.pieces_per_side(), 2);
    }

    #[test]
    fn test_builder() {
        let config = BoardConfig::new(10).with_rows_per_side(4);

        assert_eq!(config.size(), 10);
        assert_eq!(config.pieces_per_side(), 20);
    }

    #[test]
    #[should_panic(expected = "Board size must be even")]
    fn test_odd_size_rejected() {
        BoardConfig::new(7);
    }

    #[test]
    #[should_panic(expected = "may not overlap")]
    fn test_overlapping_home_rows_rejected() {
        let _ = BoardConfig::new(6).with_rows_per_side(4);
    }
}
