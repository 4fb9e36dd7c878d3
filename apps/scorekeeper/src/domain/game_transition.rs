use crate::domain::standings::winners;
use crate::domain::state::{GameState, Seat};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameTransition {
    /// A fresh game began (initialize or reset).
    GameStarted { players: Vec<String> },

    /// A round was scored and appended to the history.
    RoundScored { round: u8, points: Vec<i32> },

    /// The dealer button moved to a new seat.
    DealerChanged { dealer: Seat },

    /// The final round was scored.
    GameCompleted { winners: Vec<Seat> },
}

/// Derive transitions from the states before and after a mutation.
///
/// `before` is `None` when there was no game yet.
pub fn derive_game_transitions(
    before: Option<&GameState>,
    after: &GameState,
) -> Vec<GameTransition> {
    let mut transitions = Vec::new();

    let before_rounds = before.map_or(0, |s| s.round_results.len());
    let after_rounds = after.round_results.len();

    // 1. Fresh game: history emptied or never existed
    let restarted = after_rounds == 0
        && before.map_or(true, |s| {
            !s.round_results.is_empty() || s.players != after.players || s == after
        });
    if restarted {
        transitions.push(GameTransition::GameStarted {
            players: after.players.clone(),
        });
    }

    // 2. Round scored
    if after_rounds == before_rounds + 1 {
        if let Some(result) = after.round_results.last() {
            transitions.push(GameTransition::RoundScored {
                round: after_rounds as u8,
                points: result.points.clone(),
            });
        }
    }

    // 3. Dealer moved
    if let Some(prev) = before {
        if !restarted && prev.current_dealer_index != after.current_dealer_index {
            transitions.push(GameTransition::DealerChanged {
                dealer: after.current_dealer_index,
            });
        }
    }

    // 4. Game end (!Complete -> Complete)
    let was_complete = before.is_some_and(GameState::is_complete);
    if !was_complete && after.is_complete() && after_rounds > 0 {
        transitions.push(GameTransition::GameCompleted {
            winners: winners(after),
        });
    }

    transitions
}
