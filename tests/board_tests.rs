//! Board integration tests: square geometry, starting layout, and the
//! placement primitives the rules engine builds on.

use rust_checkers::{Board, BoardConfig, Color, Coord};

// =============================================================================
// Square geometry
// =============================================================================

#[test]
fn square_color_follows_coordinate_parity() {
    let board = Board::new(BoardConfig::default());

    for col in 0..8 {
        for row in 0..8 {
            let coord = Coord::new(col, row);
            assert_eq!(board.is_dark_square(coord), (col + row) % 2 != 0);
        }
    }
}

#[test]
fn bounds_match_configured_size() {
    let board = Board::new(BoardConfig::new(6));

    assert!(board.in_bounds(Coord::new(5, 5)));
    assert!(!board.in_bounds(Coord::new(6, 0)));
    assert!(!board.in_bounds(Coord::new(0, -1)));
}

// =============================================================================
// Starting layout
// =============================================================================

#[test]
fn standard_layout_places_twelve_per_side() {
    let board = Board::with_starting_pieces(BoardConfig::default());

    assert_eq!(board.piece_count(Color::White), 12);
    assert_eq!(board.piece_count(Color::Black), 12);
}

#[test]
fn standard_layout_fills_exact_squares() {
    let board = Board::with_starting_pieces(BoardConfig::default());

    for col in 0..8 {
        for row in 0..8 {
            let coord = Coord::new(col, row);
            let expected = if !board.is_dark_square(coord) {
                None
            } else if row < 3 {
                Some(Color::White)
            } else if row > 4 {
                Some(Color::Black)
            } else {
                None
            };
            assert_eq!(
                board.piece_at(coord).map(|p| p.color),
                expected,
                "wrong occupancy at {coord}"
            );
        }
    }
}

#[test]
fn layout_scales_with_configuration() {
    let board = Board::with_starting_pieces(BoardConfig::new(10).with_rows_per_side(4));

    assert_eq!(board.piece_count(Color::White), 20);
    assert_eq!(board.piece_count(Color::Black), 20);
    assert_eq!(board.config().pieces_per_side(), 20);
}

// =============================================================================
// Placement primitives
// =============================================================================

#[test]
fn move_and_remove_round_trip() {
    let mut board = Board::new(BoardConfig::default());
    let id = board.spawn_piece(Color::White, Coord::new(0, 1));

    board.move_piece(id, Coord::new(1, 2));
    board.move_piece(id, Coord::new(2, 3));

    assert!(board.piece_at(Coord::new(0, 1)).is_none());
    assert!(board.piece_at(Coord::new(1, 2)).is_none());
    assert_eq!(board.piece_at(Coord::new(2, 3)).unwrap().id, id);

    let removed = board.remove_piece_at(Coord::new(2, 3)).unwrap();
    assert_eq!(removed.id, id);
    assert_eq!(board.pieces().count(), 0);
}

#[test]
fn piece_identity_is_stable_across_moves() {
    let mut board = Board::new(BoardConfig::default());
    let id = board.spawn_piece(Color::Black, Coord::new(5, 6));

    board.move_piece(id, Coord::new(4, 5));

    let piece = board.piece(id).unwrap();
    assert_eq!(piece.id, id);
    assert_eq!(piece.color, Color::Black);
    assert_eq!(piece.position, Coord::new(4, 5));
}

#[test]
fn cells_and_piece_table_agree() {
    let board = Board::with_starting_pieces(BoardConfig::default());
    let cells = board.cells();

    for piece in board.pieces() {
        let idx = piece.position.row as usize * 8 + piece.position.col as usize;
        let expected = match piece.color {
            Color::White => 1,
            Color::Black => 2,
        };
        assert_eq!(cells[idx], expected);
    }
    assert_eq!(cells.iter().filter(|&&c| c == 0).count(), 64 - 24);
}
