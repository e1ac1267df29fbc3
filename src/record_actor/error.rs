//! Error types for the record service.

use thiserror::Error;

/// Errors that can occur during record service operations.
///
/// Absence of a record is not an error; lookups return `Ok(None)`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// The record data provided is invalid.
    #[error("Tax record validation error: {0}")]
    Validation(String),

    /// An error occurred while communicating with the record actor.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
