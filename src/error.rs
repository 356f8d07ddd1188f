//! Core error type shared by the store, the newsroom facade and the HTTP layer.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Errors surfaced by the core. Analysis and search never fail, so only
/// ingestion and lookups produce these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PulseError {
    /// Ingestion payload is missing its text fields or has a mistyped known field.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No article is stored under the given id.
    #[error("article not found: {0}")]
    NotFound(String),
}

impl PulseError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl From<serde_json::Error> for PulseError {
    fn from(err: serde_json::Error) -> Self {
        PulseError::InvalidInput(format!("malformed JSON: {err}"))
    }
}

#[derive(serde::Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for PulseError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, PulseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_kind() {
        assert_eq!(
            PulseError::invalid("x").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(PulseError::not_found("x").status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn json_errors_become_invalid_input() {
        let err: PulseError = serde_json::from_str::<serde_json::Value>("{oops")
            .unwrap_err()
            .into();
        assert!(matches!(err, PulseError::InvalidInput(_)));
    }
}
