//! Rosters and round entries used across integration tests.

/// Roster of `n` players named `Player 1`..`Player n`.
pub fn roster(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("Player {i}")).collect()
}

/// The three-player table used by the worked examples.
pub fn abc() -> Vec<String> {
    vec!["A".to_string(), "B".to_string(), "C".to_string()]
}

/// A valid entry for `round`: `seat` bids and wins every trick, everyone
/// else bids and wins nothing.
pub fn sweep(player_count: usize, round: u8, seat: usize) -> (Vec<u8>, Vec<u8>) {
    let mut entry = vec![0u8; player_count];
    entry[seat % player_count] = round;
    (entry.clone(), entry)
}
