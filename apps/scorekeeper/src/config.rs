//! Engine configuration from the environment.
//!
//! - `WIZARD_STATE_DIR`: directory for a `FileStore`; unset keeps state in memory.
//! - `WIZARD_REHYDRATE`: `trust` (default) or `validate`.

use std::env;
use std::path::PathBuf;

use crate::error::AppError;
use crate::persistence::RehydratePolicy;
use crate::store::{FileStore, KeyValueStore, MemoryStore};

pub const STATE_DIR_VAR: &str = "WIZARD_STATE_DIR";
pub const REHYDRATE_VAR: &str = "WIZARD_REHYDRATE";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineConfig {
    pub state_dir: Option<PathBuf>,
    pub rehydrate: RehydratePolicy,
}

impl EngineConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let state_dir = optional_var(STATE_DIR_VAR)?.map(PathBuf::from);
        let rehydrate = match optional_var(REHYDRATE_VAR)? {
            Some(raw) => raw.parse()?,
            None => RehydratePolicy::default(),
        };
        Ok(Self {
            state_dir,
            rehydrate,
        })
    }

    /// Storage backend this configuration points at.
    pub fn open_store(&self) -> Result<Box<dyn KeyValueStore>, AppError> {
        match &self.state_dir {
            Some(dir) => {
                let store = FileStore::open(dir).map_err(|e| {
                    AppError::config(format!(
                        "{STATE_DIR_VAR} is not usable ({}): {e}",
                        dir.display()
                    ))
                })?;
                Ok(Box::new(store))
            }
            None => Ok(Box::new(MemoryStore::new())),
        }
    }
}

/// Unset and empty both mean "not configured"; non-unicode values are errors.
fn optional_var(name: &str) -> Result<Option<String>, AppError> {
    match env::var(name) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => {
            Err(AppError::config(format!("{name} must be valid unicode")))
        }
    }
}
