//! Errors surfaced by HTTP handlers
//!
//! Every failure is reported to the caller as a plain-text body with status 500.
//! Nothing here is fatal to the process.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Result type for handler logic
pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// The Supabase URL or key is missing or empty
    #[error("Missing Supabase credentials")]
    MissingCredentials,

    /// Body decoding, path derivation, or the insert failed
    #[error("Failed to store data: {0}")]
    StoreFailed(String),
}

impl AppError {
    /// Wrap any error, keeping its message or falling back to a generic one
    pub fn store_failed(err: impl std::fmt::Display) -> Self {
        let message = err.to_string();
        if message.trim().is_empty() {
            Self::StoreFailed("Unknown error".to_string())
        } else {
            Self::StoreFailed(message)
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingCredentials | Self::StoreFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credentials_message() {
        let err = AppError::MissingCredentials;
        assert_eq!(err.to_string(), "Missing Supabase credentials");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_store_failed_embeds_message() {
        let err = AppError::store_failed("duplicate key value");
        assert_eq!(err.to_string(), "Failed to store data: duplicate key value");
    }

    #[test]
    fn test_store_failed_blank_message_falls_back() {
        let err = AppError::store_failed("");
        assert_eq!(err.to_string(), "Failed to store data: Unknown error");
    }

    #[tokio::test]
    async fn test_into_response_is_plain_text() {
        let response = AppError::MissingCredentials.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let content_type = response
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(content_type.starts_with("text/plain"));

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"Missing Supabase credentials");
    }
}
