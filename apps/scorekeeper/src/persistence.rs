//! Storage layout for a game and the rehydration contract.
//!
//! Two keys are owned by the engine:
//! - [`GAME_STATE_KEY`] holds the full `GameState` JSON, rewritten after
//!   every mutation.
//! - [`PLAYERS_KEY`] holds the submitted roster, used to pre-fill roster
//!   entry on a return visit. Reset drops it and overwrites the game.

use std::str::FromStr;

use tracing::{debug, warn};

use crate::domain::state::GameState;
use crate::error::AppError;
use crate::store::KeyValueStore;

pub const GAME_STATE_KEY: &str = "wizardGameState";
pub const PLAYERS_KEY: &str = "wizardPlayers";

/// How much a stored game is trusted when it is loaded back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RehydratePolicy {
    /// Adopt any payload that parses, even if it breaks game invariants.
    #[default]
    Trust,
    /// Also require `GameState::check_invariants`; otherwise start fresh.
    Validate,
}

impl FromStr for RehydratePolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trust" => Ok(Self::Trust),
            "validate" => Ok(Self::Validate),
            other => Err(AppError::config(format!(
                "rehydrate policy must be 'trust' or 'validate', got '{other}'"
            ))),
        }
    }
}

pub fn save_state<S: KeyValueStore + ?Sized>(
    store: &S,
    state: &GameState,
) -> Result<(), AppError> {
    let json = serde_json::to_string(state)
        .map_err(|e| AppError::serialization(GAME_STATE_KEY, e))?;
    store
        .set(GAME_STATE_KEY, &json)
        .map_err(|e| AppError::storage(GAME_STATE_KEY, e))?;
    debug!(
        round = state.current_round,
        dealer = state.current_dealer_index,
        results = state.round_results.len(),
        "Persisted game state"
    );
    Ok(())
}

/// Raw load: a payload that does not parse is an error here.
pub fn load_state<S: KeyValueStore + ?Sized>(store: &S) -> Result<Option<GameState>, AppError> {
    let Some(json) = store
        .get(GAME_STATE_KEY)
        .map_err(|e| AppError::storage(GAME_STATE_KEY, e))?
    else {
        return Ok(None);
    };
    serde_json::from_str(&json)
        .map(Some)
        .map_err(|e| AppError::serialization(GAME_STATE_KEY, e))
}

pub fn save_roster<S: KeyValueStore + ?Sized>(
    store: &S,
    players: &[String],
) -> Result<(), AppError> {
    let json =
        serde_json::to_string(players).map_err(|e| AppError::serialization(PLAYERS_KEY, e))?;
    store
        .set(PLAYERS_KEY, &json)
        .map_err(|e| AppError::storage(PLAYERS_KEY, e))
}

/// Previously submitted roster, if any. An unreadable value counts as none.
pub fn load_roster<S: KeyValueStore + ?Sized>(store: &S) -> Result<Option<Vec<String>>, AppError> {
    let Some(json) = store
        .get(PLAYERS_KEY)
        .map_err(|e| AppError::storage(PLAYERS_KEY, e))?
    else {
        return Ok(None);
    };
    match serde_json::from_str(&json) {
        Ok(players) => Ok(Some(players)),
        Err(e) => {
            warn!(key = PLAYERS_KEY, error = %e, "Ignoring unreadable stored roster");
            Ok(None)
        }
    }
}

/// Remove both engine keys.
pub fn clear<S: KeyValueStore + ?Sized>(store: &S) -> Result<(), AppError> {
    store
        .remove(GAME_STATE_KEY)
        .map_err(|e| AppError::storage(GAME_STATE_KEY, e))?;
    clear_roster(store)
}

/// Remove only the roster key; the saved game stays.
pub fn clear_roster<S: KeyValueStore + ?Sized>(store: &S) -> Result<(), AppError> {
    store
        .remove(PLAYERS_KEY)
        .map_err(|e| AppError::storage(PLAYERS_KEY, e))
}

/// Load a saved game for resuming, applying `policy`.
///
/// Storage failures are errors. A payload that cannot be represented as a
/// `GameState` (or, under `Validate`, breaks an invariant) is logged and
/// reported as no saved game.
pub fn rehydrate<S: KeyValueStore + ?Sized>(
    store: &S,
    policy: RehydratePolicy,
) -> Result<Option<GameState>, AppError> {
    let state = match load_state(store) {
        Ok(Some(state)) => state,
        Ok(None) => return Ok(None),
        Err(AppError::Serialization { key, source }) => {
            warn!(key, error = %source, "Discarding stored game that does not parse");
            return Ok(None);
        }
        Err(e) => return Err(e),
    };

    if policy == RehydratePolicy::Validate {
        if let Err(e) = state.check_invariants() {
            warn!(key = GAME_STATE_KEY, error = %e, "Discarding stored game that fails validation");
            return Ok(None);
        }
    }

    debug!(
        round = state.current_round,
        total_rounds = state.total_rounds,
        players = state.player_count(),
        ?policy,
        "Rehydrated game state"
    );
    Ok(Some(state))
}
