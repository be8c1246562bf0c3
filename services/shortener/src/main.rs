use sea_orm::Database;
use tracing::info;

use tmtr_shortener::config::ShortenerConfig;
use tmtr_shortener::router::build_router;
use tmtr_shortener::state::AppState;

#[tokio::main]
async fn main() {
    tmtr_core::tracing::init_tracing();

    let config = ShortenerConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        jwt_secret: config.jwt_secret.clone(),
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.shortener_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("shortener service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
