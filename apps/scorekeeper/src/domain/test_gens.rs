// Proptest generators for domain types.
// Round entries are valid by construction: bids in range, tricks summing to the round.

use proptest::prelude::*;

use crate::domain::rules::{MAX_PLAYERS, MIN_PLAYERS};

/// Roster of 3..=6 distinct names.
pub fn roster() -> impl Strategy<Value = Vec<String>> {
    (MIN_PLAYERS..=MAX_PLAYERS)
        .prop_map(|n| (0..n).map(|i| format!("Player {}", i + 1)).collect())
}

/// One bid per player, each within `0..=round`.
pub fn bids(player_count: usize, round: u8) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0..=round, player_count)
}

/// Tricks per player summing exactly to `round`.
///
/// Deals each trick to a random seat rather than filtering.
pub fn tricks(player_count: usize, round: u8) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0..player_count, usize::from(round)).prop_map(move |winners| {
        let mut won = vec![0u8; player_count];
        for seat in winners {
            won[seat] += 1;
        }
        won
    })
}

/// A full valid round entry for `player_count` players in `round`.
pub fn round_entry(player_count: usize, round: u8) -> impl Strategy<Value = (Vec<u8>, Vec<u8>)> {
    (bids(player_count, round), tricks(player_count, round))
}

/// A roster together with `k` valid round entries for rounds 1..=k.
pub fn roster_and_rounds(max_rounds: u8) -> impl Strategy<Value = (Vec<String>, Vec<(Vec<u8>, Vec<u8>)>)> {
    roster().prop_flat_map(move |players| {
        let n = players.len();
        let cap = (60 / n as u8).min(max_rounds);
        (0..=cap).prop_flat_map(move |k| {
            let players = players.clone();
            let entries: Vec<_> = (1..=k).map(|round| round_entry(n, round)).collect();
            (Just(players), entries)
        })
    })
}
