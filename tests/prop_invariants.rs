//! Property-based tests for the engine's arithmetic invariants.
//!
//! Run with: cargo test prop_

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use margincall::scoring::{check_status, clamp_leverage, leverage_from_input, performance};
use margincall::{Board, GameRng, Player, PlayerId, PlayerStatus, Position, START_TOPIC};

proptest! {
    /// Any raw string input yields a leverage inside the configured
    /// bounds once parsed (default 1) and clamped.
    #[test]
    fn prop_leverage_input_always_in_bounds(raw in "\\PC*") {
        let lev = leverage_from_input(&raw, -3, 9);
        prop_assert!((-3..=9).contains(&lev));
    }

    /// Clamping lands inside any well-formed bounds pair, for any
    /// integer leverage.
    #[test]
    fn prop_clamp_total(lev in any::<i64>(), a in -100i64..100, width in 0i64..50) {
        let (min, max) = (a, a + width);
        let clamped = clamp_leverage(lev, min, max);
        prop_assert!((min..=max).contains(&clamped));
    }

    /// Performance is zero exactly when the denominator is
    /// non-positive, and matches the formula otherwise.
    #[test]
    fn prop_performance_formula(
        cash in -1000.0f64..1000.0,
        init in 0.0f64..100.0,
        lev_sum in -50i64..50
    ) {
        let perf = performance(cash, init, lev_sum);
        if lev_sum <= 0 {
            prop_assert_eq!(perf, 0.0);
        } else {
            prop_assert_eq!(perf, (cash - init) / (lev_sum as f64).sqrt());
        }
    }

    /// Elimination and winning are mutually exclusive, and either one
    /// deactivates the player.
    #[test]
    fn prop_status_outcomes_exclusive(cash in -500.0f64..500.0) {
        let mut p = Player::new(PlayerId::new(1), 30.0);
        p.cash = cash;
        check_status(&mut p, 100.0);

        match p.status {
            PlayerStatus::Eliminated => {
                prop_assert!(cash < 0.0);
                prop_assert!(!p.active);
            }
            PlayerStatus::Won => {
                prop_assert!(cash >= 100.0);
                prop_assert!(!p.active);
            }
            PlayerStatus::InPlay => {
                prop_assert!((0.0..100.0).contains(&cash));
                prop_assert!(p.active);
            }
        }
    }

    /// Every generated board starts with the fixed topic and holds each
    /// of the 36 topics exactly once.
    #[test]
    fn prop_board_is_permutation(seed in any::<u64>()) {
        let board = Board::generate(&mut GameRng::new(seed));

        prop_assert_eq!(board.topic_at(Position::START), START_TOPIC);

        let mut ids: Vec<u8> = board.cells().iter().map(|t| t.0).collect();
        ids.sort_unstable();
        let expected: Vec<u8> = (0..36).collect();
        prop_assert_eq!(ids, expected);
    }

    /// Advancing any position by any step count stays on the board.
    #[test]
    fn prop_position_advance_in_range(cell in 1u8..=36, steps in any::<u8>()) {
        let next = Position::new(cell).advanced(steps);
        prop_assert!((1..=36).contains(&next.cell()));
        // Wraparound arithmetic agrees with stepping one cell at a time.
        let mut walked = Position::new(cell);
        for _ in 0..steps {
            walked = walked.advanced(1);
        }
        prop_assert_eq!(walked, next);
    }
}
