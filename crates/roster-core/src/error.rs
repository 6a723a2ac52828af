//! Error types for the ROSTER system.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type RosterResult<T> = Result<T, RosterError>;
