//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`KeyNotFound`] thrown when a user, transaction or goal is not found
//!   (or belongs to somebody else).
//! - [`InvalidTransaction`] thrown when a transaction is rejected at the
//!   store-write boundary (e.g. `end_date < start_date`).
//! - [`InvalidHorizon`] thrown when a forecast window cannot be built.
//!
//! "Goal not reached" is **not** an error: see
//! [`Achievement::NotReached`](crate::Achievement::NotReached).
//!
//!  [`KeyNotFound`]: EngineError::KeyNotFound
//!  [`InvalidTransaction`]: EngineError::InvalidTransaction
//!  [`InvalidHorizon`]: EngineError::InvalidHorizon
use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("\"{0}\" key not found!")]
    KeyNotFound(String),
    #[error("\"{0}\" already present!")]
    ExistingKey(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid transaction: {0}")]
    InvalidTransaction(String),
    #[error("Invalid goal: {0}")]
    InvalidGoal(String),
    #[error("Invalid horizon: {0}")]
    InvalidHorizon(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::KeyNotFound(a), Self::KeyNotFound(b)) => a == b,
            (Self::ExistingKey(a), Self::ExistingKey(b)) => a == b,
            (Self::InvalidAmount(a), Self::InvalidAmount(b)) => a == b,
            (Self::InvalidTransaction(a), Self::InvalidTransaction(b)) => a == b,
            (Self::InvalidGoal(a), Self::InvalidGoal(b)) => a == b,
            (Self::InvalidHorizon(a), Self::InvalidHorizon(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
