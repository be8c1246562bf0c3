use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use tmtr_core::message::x_message;

/// Auth service domain error variants.
///
/// `kind()` returns the error-taxonomy tag propagated unchanged from the
/// failing step up to the HTTP boundary.
#[derive(Debug, thiserror::Error)]
pub enum AuthServiceError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("user not found")]
    UserNotFound,
    #[error("email already registered")]
    EmailTaken,
    #[error("invalid credential")]
    InvalidCredential,
    #[error("invalid otp")]
    InvalidOtp,
    #[error("invalid refresh token")]
    InvalidRefreshToken,
    #[error("session invalidated or expired")]
    InvalidSession,
    #[error("userinfo endpoint rejected the bearer token")]
    GoogleRejected,
    #[error("database error")]
    Database(#[from] anyhow::Error),
    #[error("internal error")]
    Internal(anyhow::Error),
}

impl AuthServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "validation",
            Self::UserNotFound => "not-found",
            Self::EmailTaken => "conflict",
            Self::InvalidCredential
            | Self::InvalidOtp
            | Self::InvalidRefreshToken
            | Self::InvalidSession
            | Self::GoogleRejected => "authentication",
            Self::Database(_) => "database",
            Self::Internal(_) => "internal",
        }
    }
}

impl IntoResponse for AuthServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::EmailTaken => StatusCode::CONFLICT,
            Self::InvalidCredential
            | Self::InvalidOtp
            | Self::InvalidRefreshToken
            | Self::InvalidSession
            | Self::GoogleRejected => StatusCode::UNAUTHORIZED,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only: tower-http TraceLayer already records method/uri/status
        // for all requests. 4xx are expected client errors; logging them here
        // would be noise. 500s need the anyhow chain for the root cause.
        match &self {
            Self::Database(e) | Self::Internal(e) => {
                tracing::error!(error = %e, kind = self.kind(), "internal error");
            }
            _ => {}
        }
        let message = self.to_string();
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": message,
        });
        (status, x_message(&message), axum::Json(body)).into_response()
    }
}
