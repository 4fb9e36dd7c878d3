//! Error handling for the scorekeeper engine.

pub mod domain;

pub use domain::{DomainError, ValidationKind};
