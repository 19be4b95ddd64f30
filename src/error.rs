// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::ErrorResponse;

/// Every failure the relay can produce, from startup through the upstream call.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("GROQ_API_KEY environment variable not set")]
    CredentialMissing,

    #[error("Failed to initialize Groq client: {0}")]
    ClientInitFailed(String),

    #[error("No message provided")]
    ValidationFailed,

    // Upstream variants render as the bare cause; the route layer adds its own prefix.
    #[error("{0}")]
    UpstreamCallFailed(String),

    #[error("{0}")]
    UpstreamMalformedResponse(String),
}

impl RelayError {
    pub fn init(msg: impl Into<String>) -> Self {
        Self::ClientInitFailed(msg.into())
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::UpstreamCallFailed(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::UpstreamMalformedResponse(msg.into())
    }
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::UpstreamMalformedResponse(err.to_string())
        } else {
            Self::UpstreamCallFailed(err.to_string())
        }
    }
}

/// Errors as the HTTP caller sees them.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Internal(String),
}

impl AppError {
    /// Catch-all 500 wrapping whatever went wrong while handling a request.
    pub fn internal(cause: impl std::fmt::Display) -> Self {
        Self::Internal(format!("An error occurred: {}", cause))
    }
}

impl From<RelayError> for AppError {
    fn from(err: RelayError) -> Self {
        match err {
            RelayError::ValidationFailed => AppError::BadRequest(err.to_string()),
            other => AppError::internal(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        (status, Json(ErrorResponse { error })).into_response()
    }
}
