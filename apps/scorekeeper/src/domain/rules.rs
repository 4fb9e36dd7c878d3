use std::ops::RangeInclusive;

/// Cards in a Wizard deck; the round count is this divided by the player count.
pub const DECK_SIZE: u8 = 60;
pub const MIN_PLAYERS: usize = 3;
pub const MAX_PLAYERS: usize = 6;

/// Number of rounds in a game with `player_count` players.
///
/// The engine does not bound the roster itself; any non-zero count works.
pub fn total_rounds_for(player_count: usize) -> Option<u8> {
    if player_count == 0 {
        return None;
    }
    Some((usize::from(DECK_SIZE) / player_count) as u8)
}

/// Bids a player may make in `round_no` (one card is dealt per round).
pub fn valid_bid_range(round_no: u8) -> RangeInclusive<u8> {
    0..=round_no
}
