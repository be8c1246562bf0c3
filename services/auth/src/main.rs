use sea_orm::Database;
use tracing::info;

use tmtr_auth::config::AuthConfig;
use tmtr_auth::infra::google::HttpGoogleClient;
use tmtr_auth::infra::mail::HttpMailClient;
use tmtr_auth::router::build_router;
use tmtr_auth::state::AppState;
use tmtr_auth_types::cookie::CookieOptions;

#[tokio::main]
async fn main() {
    tmtr_core::tracing::init_tracing();

    let config = AuthConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let http = reqwest::Client::new();
    let google = HttpGoogleClient::new(http.clone(), config.google_userinfo_url.clone());
    let mail = HttpMailClient::new(
        http,
        config.mail_api_url.clone(),
        config.mail_api_key.clone(),
        config.mail_from.clone(),
    );

    let state = AppState {
        db,
        jwt_secret: config.jwt_secret.clone(),
        cookie: CookieOptions {
            domain: config.cookie_domain.clone(),
            secure: config.is_production(),
        },
        google,
        mail,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.auth_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("auth service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
