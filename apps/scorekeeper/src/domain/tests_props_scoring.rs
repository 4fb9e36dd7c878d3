//! Property-based tests for the scoring rule.

use proptest::prelude::*;

use crate::domain::scoring::{apply_round, score_delta};
use crate::domain::state::GameState;
use crate::domain::test_gens;

proptest! {
    #![proptest_config(scorekeeper_test_support::proptest_config::config())]

    /// Property: an exact bid always earns 20 + 10 per trick.
    #[test]
    fn prop_exact_bid_bonus(tricks in 0u8..=20) {
        prop_assert_eq!(score_delta(tricks, tricks), 20 + i32::from(tricks) * 10);
    }

    /// Property: a miss costs 10 per trick of deviation and is symmetric.
    #[test]
    fn prop_missed_bid_penalty(bid in 0u8..=20, gap in 1u8..=20) {
        // Never equal to the bid, without rejecting cases
        let tricks = (bid + gap) % 21;
        let expected = -10 * (i32::from(bid) - i32::from(tricks)).abs();
        prop_assert_eq!(score_delta(bid, tricks), expected);
        prop_assert_eq!(score_delta(tricks, bid), expected);
        prop_assert!(score_delta(bid, tricks) < 0);
    }

    /// Property: stored round points are exactly the score change of that round.
    #[test]
    fn prop_points_match_score_change(
        (players, entries) in test_gens::roster_and_rounds(8)
    ) {
        let mut state = GameState::new(players);
        for (bids, tricks) in entries {
            let before = state.scores.clone();
            apply_round(&mut state, bids, tricks);
            let last = state.round_results.last().expect("round was appended");
            for seat in 0..state.player_count() {
                prop_assert_eq!(state.scores[seat] - before[seat], last.points[seat]);
                prop_assert_eq!(
                    last.points[seat],
                    score_delta(last.bids[seat], last.tricks[seat])
                );
            }
        }
    }
}
