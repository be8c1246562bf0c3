/// Shortener service configuration loaded from environment variables.
#[derive(Debug)]
pub struct ShortenerConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// HMAC secret for validating JWT access tokens. Must match the auth
    /// service's secret.
    pub jwt_secret: String,
    /// TCP port to listen on (default 3220). Env var: `SHORTENER_PORT`.
    pub shortener_port: u16,
}

impl ShortenerConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            jwt_secret: std::env::var("JWT_SECRET").expect("JWT_SECRET"),
            shortener_port: std::env::var("SHORTENER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3220),
        }
    }
}
