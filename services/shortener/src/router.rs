use axum::{
    Router,
    routing::{get, post},
};

use tmtr_core::health::{healthz, readyz};
use tmtr_core::middleware::{request_id_layer, trace_layer};

use crate::handlers::link::{list_visits, resolve, shorten};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Links
        .route("/api/tmtr", post(shorten))
        .route("/api/tmtr/{code}", get(resolve))
        .route("/api/tmtr/{code}/visits", get(list_visits))
        .layer(trace_layer())
        .layer(request_id_layer())
        .with_state(state)
}
