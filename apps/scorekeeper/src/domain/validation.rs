//! Local sanity checks a front end runs before calling the engine.
//!
//! These only look at the shape of the input. Scoring lives in
//! `domain::scoring` and nowhere else.

use crate::domain::rules::{valid_bid_range, MAX_PLAYERS, MIN_PLAYERS};
use crate::domain::state::GameState;
use crate::errors::domain::{DomainError, ValidationKind};

/// Trim names, drop blank entries and require a 3–6 player roster.
pub fn normalize_roster<I, S>(names: I) -> Result<Vec<String>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let roster: Vec<String> = names
        .into_iter()
        .map(|name| name.as_ref().trim().to_string())
        .filter(|name| !name.is_empty())
        .collect();

    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&roster.len()) {
        return Err(DomainError::validation(
            ValidationKind::RosterSize,
            format!(
                "Please enter {MIN_PLAYERS} to {MAX_PLAYERS} player names (got {})",
                roster.len()
            ),
        ));
    }
    Ok(roster)
}

/// Check a round's bids and tricks against the current round.
pub fn validate_round_entry(
    state: &GameState,
    bids: &[u8],
    tricks: &[u8],
) -> Result<(), DomainError> {
    if state.is_complete() {
        return Err(DomainError::validation(
            ValidationKind::GameComplete,
            format!("all {} rounds have been scored", state.total_rounds),
        ));
    }

    let n = state.player_count();
    if bids.len() != n || tricks.len() != n {
        return Err(DomainError::validation(
            ValidationKind::EntryLength,
            format!(
                "expected {n} bids and tricks, got {} bids and {} tricks",
                bids.len(),
                tricks.len()
            ),
        ));
    }

    let range = valid_bid_range(state.current_round);
    if let Some((seat, bid)) = bids
        .iter()
        .enumerate()
        .find(|(_, bid)| !range.contains(*bid))
    {
        return Err(DomainError::validation(
            ValidationKind::BidOutOfRange,
            format!(
                "{} bid {bid}, must be between 0 and {}",
                state.players[seat], state.current_round
            ),
        ));
    }

    let trick_sum: u32 = tricks.iter().map(|&t| u32::from(t)).sum();
    if trick_sum != u32::from(state.current_round) {
        return Err(DomainError::validation(
            ValidationKind::TrickSum,
            format!(
                "the sum of tricks must equal {} (got {trick_sum})",
                state.current_round
            ),
        ));
    }
    Ok(())
}

/// Tricks not yet claimed by bids; negative when the table is over-bid.
pub fn tricks_remaining(state: &GameState, bids: &[u8]) -> i32 {
    let total_bids: i32 = bids.iter().map(|&b| i32::from(b)).sum();
    i32::from(state.current_round) - total_bids
}
