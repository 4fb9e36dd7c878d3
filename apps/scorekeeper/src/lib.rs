#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod errors;
pub mod persistence;
pub mod store;
pub mod telemetry;

// Re-exports for public API
pub use config::EngineConfig;
pub use domain::{GamePhase, GameState, GameTransition, RoundResult};
pub use engine::{GameEngine, SubscriptionId};
pub use error::AppError;
pub use errors::domain::{DomainError, ValidationKind};
pub use persistence::{RehydratePolicy, GAME_STATE_KEY, PLAYERS_KEY};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    scorekeeper_test_support::logging::init();
}
