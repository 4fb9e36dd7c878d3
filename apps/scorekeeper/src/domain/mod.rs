//! Domain layer: pure game logic types and helpers.

pub mod game_transition;
pub mod rules;
pub mod scoring;
pub mod standings;
pub mod state;
pub mod validation;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_props_scoring;
#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_state;

// Re-exports for ergonomics
pub use game_transition::{derive_game_transitions, GameTransition};
pub use rules::{total_rounds_for, valid_bid_range};
pub use scoring::{apply_round, round_points, score_delta};
pub use standings::{history, leader, standings, winners, HistoryCell, HistoryRow, Standing};
pub use state::{next_seat, seat_offset, GamePhase, GameState, RoundResult, Seat};
pub use validation::{normalize_roster, tricks_remaining, validate_round_entry};
