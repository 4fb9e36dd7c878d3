use thiserror::Error;

use crate::errors::domain::DomainError;
use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Storage error on key {key}: {source}")]
    Storage {
        key: &'static str,
        #[source]
        source: StoreError,
    },
    #[error("Serialization error on key {key}: {source}")]
    Serialization {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl AppError {
    /// Stable machine-readable code for each variant
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Storage { .. } => "STORAGE_ERROR",
            AppError::Serialization { .. } => "SERIALIZATION_ERROR",
            AppError::Config { .. } => "CONFIG_ERROR",
            AppError::Domain(_) => "VALIDATION_ERROR",
        }
    }

    pub fn storage(key: &'static str, source: StoreError) -> Self {
        Self::Storage { key, source }
    }

    pub fn serialization(key: &'static str, source: serde_json::Error) -> Self {
        Self::Serialization { key, source }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }
}
