//! The game-state engine: owns the active `GameState` and its storage.
//!
//! Every mutation writes the full state to the store before it becomes
//! visible, then notifies subscribers once. The game-state key is always the
//! last write of a mutation, so a failure at any step leaves it matching the
//! in-memory state. The roster key only pre-fills roster entry and may
//! already have been updated when a later write fails.

use std::fmt;

use tracing::{debug, info};

use crate::domain::game_transition::{derive_game_transitions, GameTransition};
use crate::domain::scoring::apply_round;
use crate::domain::state::GameState;
use crate::error::AppError;
use crate::persistence::{self, RehydratePolicy};
use crate::store::KeyValueStore;

pub type SubscriptionId = u64;

type Listener = Box<dyn FnMut(&GameState, &[GameTransition])>;

pub struct GameEngine<S: KeyValueStore> {
    store: S,
    state: GameState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: SubscriptionId,
}

impl<S: KeyValueStore> GameEngine<S> {
    /// Resume the stored game, or start a fresh one for `roster` if there is none.
    pub fn rehydrate(
        store: S,
        roster: Vec<String>,
        policy: RehydratePolicy,
    ) -> Result<Self, AppError> {
        if let Some(state) = persistence::rehydrate(&store, policy)? {
            info!(
                round = state.current_round,
                total_rounds = state.total_rounds,
                "Resuming saved game"
            );
            return Ok(Self::with_state(store, state));
        }

        let mut engine = Self::with_state(store, GameState::new(Vec::new()));
        engine.initialize(roster)?;
        Ok(engine)
    }

    /// Resume the stored game; `None` when nothing usable is saved.
    pub fn resume(store: S, policy: RehydratePolicy) -> Result<Option<Self>, AppError> {
        Ok(persistence::rehydrate(&store, policy)?.map(|state| Self::with_state(store, state)))
    }

    fn with_state(store: S, state: GameState) -> Self {
        Self {
            store,
            state,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Start a fresh game for `players`, replacing whatever was active.
    ///
    /// The roster size is the caller's concern (see `domain::validation`).
    pub fn initialize(&mut self, players: Vec<String>) -> Result<&GameState, AppError> {
        let fresh = GameState::new(players);
        persistence::save_roster(&self.store, &fresh.players)?;
        persistence::save_state(&self.store, &fresh)?;

        info!(
            players = fresh.player_count(),
            total_rounds = fresh.total_rounds,
            "Game initialized"
        );
        self.commit(fresh);
        Ok(&self.state)
    }

    /// Score the current round from index-aligned bids and tricks.
    ///
    /// Inputs must already satisfy `domain::validation::validate_round_entry`.
    /// If the write fails, the in-memory state is left as it was.
    pub fn advance_round(&mut self, bids: Vec<u8>, tricks: Vec<u8>) -> Result<&GameState, AppError> {
        if self.state.is_complete() {
            debug!(
                total_rounds = self.state.total_rounds,
                "Round entry after the final round ignored"
            );
            return Ok(&self.state);
        }

        let mut next = self.state.clone();
        apply_round(&mut next, bids, tricks);
        persistence::save_state(&self.store, &next)?;

        if next.is_complete() {
            info!(scores = ?next.scores, "Final round scored");
        }
        self.commit(next);
        Ok(&self.state)
    }

    /// Clear storage and restart the current roster from round 1.
    ///
    /// The fresh state replaces the stored game in place, so a failed write
    /// never leaves storage without a game while one is still active.
    pub fn reset(&mut self) -> Result<&GameState, AppError> {
        let fresh = GameState::new(self.state.players.clone());
        persistence::clear_roster(&self.store)?;
        persistence::save_state(&self.store, &fresh)?;

        info!(players = fresh.player_count(), "Game reset");
        self.commit(fresh);
        Ok(&self.state)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Call `listener` after every completed mutation.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&GameState, &[GameTransition]) + 'static,
    {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    fn commit(&mut self, next: GameState) {
        let previous = std::mem::replace(&mut self.state, next);
        let before = (!previous.players.is_empty()).then_some(&previous);
        let transitions = derive_game_transitions(before, &self.state);
        for (_, listener) in &mut self.listeners {
            listener(&self.state, &transitions);
        }
    }
}

impl<S: KeyValueStore + fmt::Debug> fmt::Debug for GameEngine<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameEngine")
            .field("store", &self.store)
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
