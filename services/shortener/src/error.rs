use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use tmtr_core::message::x_message;

/// Shortener service domain error variants.
///
/// `kind()` returns the error-taxonomy tag propagated unchanged from the
/// failing step up to the HTTP boundary.
#[derive(Debug, thiserror::Error)]
pub enum ShortenerServiceError {
    #[error("{0}")]
    InvalidUrl(String),
    #[error("short code not found")]
    LinkNotFound,
    #[error("not the owner of this link")]
    NotOwner,
    #[error("could not allocate a unique short code")]
    ShortCodeExhausted,
    #[error("database error")]
    Database(#[from] anyhow::Error),
    #[error("internal error")]
    Internal(anyhow::Error),
}

impl ShortenerServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidUrl(_) => "validation",
            Self::LinkNotFound => "not-found",
            Self::NotOwner => "authorization",
            Self::ShortCodeExhausted => "conflict",
            Self::Database(_) => "database",
            Self::Internal(_) => "internal",
        }
    }
}

impl IntoResponse for ShortenerServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidUrl(_) => StatusCode::BAD_REQUEST,
            Self::LinkNotFound => StatusCode::NOT_FOUND,
            Self::NotOwner => StatusCode::FORBIDDEN,
            Self::ShortCodeExhausted => StatusCode::CONFLICT,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only; 4xx are expected client errors and TraceLayer
        // already records method/uri/status per request.
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
