//! Shared error types for the matching service

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SharedError {
    #[error("Invalid user id: {reason}")]
    InvalidUserId { reason: String },

    #[error("Invalid match id: {input}")]
    InvalidMatchId { input: String },

    #[error("Invalid coordinates: lat={lat}, lon={lon}")]
    InvalidCoordinates { lat: f64, lon: f64 },
}

pub type SharedResult<T> = Result<T, SharedError>;
