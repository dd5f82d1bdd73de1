//! Property tests for the engine's hard invariants.
//!
//! Arbitrary (and mostly illegal) action streams must never corrupt the
//! game: rejections leave the state untouched, scores only grow, turns
//! strictly alternate on applied moves, and pieces never leave the dark
//! squares.

use proptest::prelude::*;

use rust_checkers::{Color, Coord, GameEngine};

/// One frontend interaction: a click interpreted as select or move.
#[derive(Clone, Copy, Debug)]
enum Action {
    Select(Coord),
    Move(Coord),
}

fn action_strategy() -> impl Strategy<Value = Action> {
    // Slightly out-of-range coordinates exercise the bounds checks too.
    let coord = (-2i8..10, -2i8..10).prop_map(|(col, row)| Coord::new(col, row));
    prop_oneof![
        coord.clone().prop_map(Action::Select),
        coord.prop_map(Action::Move),
    ]
}

proptest! {
    #[test]
    fn dark_square_rule_matches_parity(col in 0i8..8, row in 0i8..8) {
        let engine = GameEngine::new();
        let coord = Coord::new(col, row);

        prop_assert_eq!(
            engine.board().is_dark_square(coord),
            (col + row) % 2 != 0
        );
    }

    #[test]
    fn rejected_operations_leave_state_unchanged(
        actions in prop::collection::vec(action_strategy(), 1..120)
    ) {
        let mut engine = GameEngine::new();

        for action in actions {
            let before = engine.snapshot();
            let rejected = match action {
                Action::Select(at) => engine.try_select(at).is_err(),
                Action::Move(to) => engine.try_move(to).is_err(),
            };
            if rejected {
                prop_assert_eq!(engine.snapshot(), before);
            }
        }
    }

    #[test]
    fn applied_moves_alternate_turns_and_scores_grow(
        actions in prop::collection::vec(action_strategy(), 1..120)
    ) {
        let mut engine = GameEngine::new();
        let threshold = engine.win_threshold();

        for action in actions {
            let player_before = engine.current_player();
            let white_before = engine.score(Color::White);
            let black_before = engine.score(Color::Black);

            let moved = match action {
                Action::Select(at) => {
                    engine.try_select(at).ok();
                    false
                }
                Action::Move(to) => engine.try_move(to).is_ok(),
            };

            if moved && !engine.status().is_game_over() {
                prop_assert_eq!(
                    engine.current_player(),
                    player_before.map(Color::opponent)
                );
            }
            prop_assert!(engine.score(Color::White) >= white_before);
            prop_assert!(engine.score(Color::Black) >= black_before);
            prop_assert!(engine.score(Color::White) <= threshold);
            prop_assert!(engine.score(Color::Black) <= threshold);
        }
    }

    #[test]
    fn pieces_stay_on_dark_squares(
        actions in prop::collection::vec(action_strategy(), 1..120)
    ) {
        let mut engine = GameEngine::new();

        for action in actions {
            match action {
                Action::Select(at) => {
                    engine.try_select(at).ok();
                }
                Action::Move(to) => {
                    engine.try_move(to).ok();
                }
            }
        }

        let total_live = engine.board().pieces().count() as u32;
        let captured = engine.score(Color::White) + engine.score(Color::Black);
        prop_assert_eq!(total_live + captured, 24);

        for piece in engine.board().pieces() {
            prop_assert!(engine.board().is_dark_square(piece.position));
            prop_assert!(engine.board().in_bounds(piece.position));
        }
    }
}
