use serde::{Deserialize, Serialize};

use crate::domain::rules::total_rounds_for;
use crate::errors::domain::DomainError;

/// Index into `GameState::players`; seating and dealing order.
pub type Seat = usize;

/// Overall game progression as seen by a collaborator.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GamePhase {
    /// Rounds remain to be scored.
    InProgress,
    /// The final round has been scored.
    Complete,
}

/// Immutable record of one completed round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    /// Bids per player.
    pub bids: Vec<u8>,
    /// Tricks won per player.
    pub tricks: Vec<u8>,
    /// Net score change per player for this round.
    pub points: Vec<i32>,
}

/// Entire game container, persisted verbatim under the game-state key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// Roster in seating order, fixed for the lifetime of the game.
    pub players: Vec<String>,
    /// Cumulative scores, index-aligned with `players`.
    pub scores: Vec<i32>,
    /// 1-based round about to be (or being) played.
    pub current_round: u8,
    /// One entry per completed round, in round order.
    pub round_results: Vec<RoundResult>,
    /// `floor(60 / players.len())`, fixed at creation.
    pub total_rounds: u8,
    /// Seat of the current dealer.
    /// Payloads saved before dealer tracking existed load with dealer 0.
    #[serde(default)]
    pub current_dealer_index: Seat,
}

impl GameState {
    /// Fresh game for `players`: zero scores, round 1, first seat deals.
    pub fn new(players: Vec<String>) -> Self {
        let total_rounds = total_rounds_for(players.len()).unwrap_or(0);
        Self {
            scores: vec![0; players.len()],
            players,
            current_round: 1,
            round_results: Vec::new(),
            total_rounds,
            current_dealer_index: 0,
        }
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// `Complete` once as many rounds have been recorded as the game has.
    pub fn phase(&self) -> GamePhase {
        if self.round_results.len() >= usize::from(self.total_rounds) {
            GamePhase::Complete
        } else {
            GamePhase::InProgress
        }
    }

    pub fn is_complete(&self) -> bool {
        self.phase() == GamePhase::Complete
    }

    /// True while the last round is being played (and after it is scored).
    pub fn is_final_round(&self) -> bool {
        self.current_round >= self.total_rounds
    }

    /// Name of the player dealing the current round.
    pub fn dealer(&self) -> Option<&str> {
        self.players
            .get(self.current_dealer_index)
            .map(String::as_str)
    }

    /// Structural checks for a state that came from outside the engine.
    ///
    /// Fresh states and states produced by valid advances always pass.
    pub fn check_invariants(&self) -> Result<(), DomainError> {
        let n = self.players.len();
        if n == 0 {
            return Err(DomainError::invariant("roster is empty"));
        }
        if self.scores.len() != n {
            return Err(DomainError::invariant(format!(
                "{} scores for {n} players",
                self.scores.len()
            )));
        }
        if total_rounds_for(n) != Some(self.total_rounds) {
            return Err(DomainError::invariant(format!(
                "totalRounds {} does not match {n} players",
                self.total_rounds
            )));
        }
        if self.current_round == 0 || self.current_round > self.total_rounds.max(1) {
            return Err(DomainError::invariant(format!(
                "currentRound {} outside 1..={}",
                self.current_round, self.total_rounds
            )));
        }
        if self.current_dealer_index >= n {
            return Err(DomainError::invariant(format!(
                "dealer index {} outside roster of {n}",
                self.current_dealer_index
            )));
        }

        let played = self.round_results.len();
        let expected_in_progress = usize::from(self.current_round) - 1;
        let finished = self.current_round == self.total_rounds
            && played == usize::from(self.total_rounds);
        if played != expected_in_progress && !finished {
            return Err(DomainError::invariant(format!(
                "{played} round results recorded before round {}",
                self.current_round
            )));
        }

        let mut totals = vec![0i32; n];
        for (idx, result) in self.round_results.iter().enumerate() {
            if result.bids.len() != n || result.tricks.len() != n || result.points.len() != n {
                return Err(DomainError::invariant(format!(
                    "round {} result is not aligned with {n} players",
                    idx + 1
                )));
            }
            for (total, points) in totals.iter_mut().zip(&result.points) {
                *total += points;
            }
        }
        if totals != self.scores {
            return Err(DomainError::invariant(
                "scores do not equal the sum of recorded round points",
            ));
        }
        Ok(())
    }
}

/// Seat `delta` steps from `seat` around a table of `player_count` (positive is clockwise).
///
/// An empty table has nowhere to move, so `seat` comes back unchanged.
#[inline]
pub fn seat_offset(seat: Seat, delta: isize, player_count: usize) -> Seat {
    if player_count == 0 {
        return seat;
    }
    let n = player_count as isize;
    (seat as isize + delta).rem_euclid(n) as Seat
}

/// Next seat clockwise; the dealer button moves here after each round.
#[inline]
pub fn next_seat(seat: Seat, player_count: usize) -> Seat {
    seat_offset(seat, 1, player_count)
}
