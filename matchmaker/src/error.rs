//! Matchmaker error types
//!
//! `StoreError` is what collaborators (swipe store, discovery index) report.
//! `MatchmakerError` is what the core surfaces to its callers; every store
//! failure is wrapped with the name of the operation that failed.

use shared::SharedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store backend unavailable: {message}")]
    Unavailable { message: String },

    #[error("Record already exists: {key}")]
    Conflict { key: String },

    #[error("Malformed record: {message}")]
    Malformed { message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StoreError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable { message: message.into() }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed { message: message.into() }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum MatchmakerError {
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("Swipe from {acting_user} on {target_user} already recorded")]
    AlreadySwiped { acting_user: String, target_user: String },

    #[error("Storage operation '{operation}' failed: {source}")]
    Storage {
        operation: &'static str,
        #[source]
        source: StoreError,
    },

    #[error("Storage operation '{operation}' timed out")]
    Timeout { operation: &'static str },

    #[error("No discovery profile for user {user_id}")]
    ProfileNotFound { user_id: String },

    #[error("Shared component error")]
    SharedError(#[from] SharedError),
}

impl MatchmakerError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation { field, reason: reason.into() }
    }

    /// True for failures that originate in a store, timeouts included
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage { .. } | Self::Timeout { .. })
    }
}

pub type MatchmakerResult<T> = Result<T, MatchmakerError>;
