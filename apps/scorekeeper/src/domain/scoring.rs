use tracing::debug;

use crate::domain::state::{next_seat, GameState, RoundResult};

/// Score change for one player: exact bids earn 20 plus 10 per trick,
/// misses lose 10 per trick of deviation in either direction.
pub fn score_delta(bid: u8, tricks: u8) -> i32 {
    if bid == tricks {
        20 + i32::from(tricks) * 10
    } else {
        -(i32::from(bid.abs_diff(tricks)) * 10)
    }
}

/// Per-player deltas for a round, index-aligned with the inputs.
pub fn round_points(bids: &[u8], tricks: &[u8]) -> Vec<i32> {
    bids.iter()
        .zip(tricks)
        .map(|(&bid, &won)| score_delta(bid, won))
        .collect()
}

/// Score the current round and move the game forward.
///
/// Inputs are trusted: bid range and trick sum are checked by
/// `domain::validation` before this is called. On a completed game this is a
/// no-op, so a round can never be scored twice.
pub fn apply_round(state: &mut GameState, bids: Vec<u8>, tricks: Vec<u8>) {
    if state.is_complete() {
        debug!(
            total_rounds = state.total_rounds,
            "Round entry after the final round ignored"
        );
        return;
    }

    let deltas = round_points(&bids, &tricks);
    // Seats without an entry keep their score; extra entries are ignored.
    let new_scores: Vec<i32> = state
        .scores
        .iter()
        .enumerate()
        .map(|(seat, score)| score + deltas.get(seat).copied().unwrap_or(0))
        .collect();
    let points: Vec<i32> = new_scores
        .iter()
        .zip(&state.scores)
        .map(|(new, old)| new - old)
        .collect();

    debug!(
        round = state.current_round,
        dealer = state.current_dealer_index,
        ?points,
        "Round scored"
    );

    state.round_results.push(RoundResult {
        bids,
        tricks,
        points,
    });
    state.scores = new_scores;

    if state.current_round < state.total_rounds {
        state.current_round += 1;
        state.current_dealer_index = next_seat(state.current_dealer_index, state.player_count());
    }
}
