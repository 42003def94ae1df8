//! The module contains the errors the engine can throw.
//!
//! All variants are validation failures: a candidate expense is rejected
//! before it reaches the ledger, so no partial state is ever written.
use thiserror::Error;

/// Engine custom errors.
///
/// The display strings are part of the API contract: they are returned
/// verbatim in the error envelope of `POST /expenses`.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid category")]
    InvalidCategory,
    #[error("Amount must be a positive number")]
    InvalidAmount,
    #[error("Invalid date format")]
    InvalidDate,
}
