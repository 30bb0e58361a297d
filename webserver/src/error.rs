//! WebServer-specific error types and their HTTP mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use matchmaker::MatchmakerError;
use shared::SharedError;

#[derive(Error, Debug)]
pub enum WebServerError {
    #[error("Unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("Invalid request: {details}")]
    InvalidRequest { details: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Server startup error: {0}")]
    ServerStartup(String),

    #[error(transparent)]
    Matchmaker(#[from] MatchmakerError),

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl WebServerError {
    pub fn unauthorized(reason: impl Into<String>) -> Self {
        Self::Unauthorized { reason: reason.into() }
    }

    pub fn invalid_request(details: impl Into<String>) -> Self {
        Self::InvalidRequest { details: details.into() }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Status code and short machine-readable kind
    pub fn classify(&self) -> (StatusCode, &'static str) {
        match self {
            WebServerError::Unauthorized { .. } => (StatusCode::UNAUTHORIZED, "unauthorized"),
            WebServerError::InvalidRequest { .. } | WebServerError::SharedError(_) => {
                (StatusCode::BAD_REQUEST, "validation")
            }
            WebServerError::Matchmaker(err) => match err {
                MatchmakerError::Validation { .. } | MatchmakerError::SharedError(_) => {
                    (StatusCode::BAD_REQUEST, "validation")
                }
                MatchmakerError::ProfileNotFound { .. } => (StatusCode::NOT_FOUND, "profile_not_found"),
                MatchmakerError::AlreadySwiped { .. } => (StatusCode::CONFLICT, "already_swiped"),
                MatchmakerError::Storage { .. } => (StatusCode::BAD_GATEWAY, "storage"),
                MatchmakerError::Timeout { .. } => (StatusCode::GATEWAY_TIMEOUT, "timeout"),
            },
            WebServerError::Config(_) | WebServerError::ServerStartup(_) | WebServerError::IoError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal")
            }
        }
    }
}

impl IntoResponse for WebServerError {
    fn into_response(self) -> Response {
        let (status, kind) = self.classify();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }
        (status, Json(json!({ "error": kind, "message": self.to_string() }))).into_response()
    }
}

pub type WebServerResult<T> = Result<T, WebServerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use matchmaker::StoreError;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (WebServerError::unauthorized("missing token"), StatusCode::UNAUTHORIZED),
            (WebServerError::invalid_request("bad json"), StatusCode::BAD_REQUEST),
            (MatchmakerError::validation("target_user", "self").into(), StatusCode::BAD_REQUEST),
            (
                MatchmakerError::ProfileNotFound { user_id: "alice".into() }.into(),
                StatusCode::NOT_FOUND,
            ),
            (
                MatchmakerError::AlreadySwiped {
                    acting_user: "alice".into(),
                    target_user: "bob".into(),
                }
                .into(),
                StatusCode::CONFLICT,
            ),
            (
                MatchmakerError::Storage {
                    operation: "put",
                    source: StoreError::unavailable("down"),
                }
                .into(),
                StatusCode::BAD_GATEWAY,
            ),
            (MatchmakerError::Timeout { operation: "search" }.into(), StatusCode::GATEWAY_TIMEOUT),
            (WebServerError::config("no key"), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, expected) in cases {
            assert_eq!(err.classify().0, expected, "{err}");
        }
    }
}
