use axum::{
    Router,
    routing::{delete, get, post},
};

use tmtr_core::health::{healthz, readyz};
use tmtr_core::middleware::{request_id_layer, trace_layer};

use crate::handlers::{
    account::{signup, verify_email},
    google::{google_login, google_signup},
    token::{login, logout, refresh_token},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Account
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/verify-email", post(verify_email))
        // Credentials
        .route("/api/auth/login", post(login))
        .route("/api/auth/refresh", post(refresh_token))
        .route("/api/auth/logout", delete(logout))
        // Google OAuth
        .route("/api/auth/google-login", get(google_login))
        .route("/api/auth/google-signup", get(google_signup))
        .layer(trace_layer())
        .layer(request_id_layer())
        .with_state(state)
}
