/// Auth service configuration loaded from environment variables.
#[derive(Debug)]
pub struct AuthConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// HMAC secret for signing JWT access tokens.
    pub jwt_secret: String,
    /// Cookie domain attribute (root domain, e.g. "example.com").
    pub cookie_domain: String,
    /// Deployment environment; cookies get the Secure flag only in
    /// "production". Env var: `APP_ENV` (default "development").
    pub app_env: String,
    /// TCP port to listen on (default 3210). Env var: `AUTH_PORT`.
    pub auth_port: u16,
    /// OAuth userinfo endpoint. Env var: `GOOGLE_USERINFO_URL`.
    pub google_userinfo_url: String,
    /// Transactional-mail send endpoint. Env var: `MAIL_API_URL`.
    pub mail_api_url: String,
    /// Mail provider API key. Env var: `MAIL_API_KEY`.
    pub mail_api_key: String,
    /// Sender address for all outbound mail. Env var: `MAIL_FROM`.
    pub mail_from: String,
}

impl AuthConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            jwt_secret: std::env::var("JWT_SECRET").expect("JWT_SECRET"),
            cookie_domain: std::env::var("COOKIE_DOMAIN").expect("COOKIE_DOMAIN"),
            app_env: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_owned()),
            auth_port: std::env::var("AUTH_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3210),
            google_userinfo_url: std::env::var("GOOGLE_USERINFO_URL")
                .unwrap_or_else(|_| "https://www.googleapis.com/oauth2/v2/userinfo".to_owned()),
            mail_api_url: std::env::var("MAIL_API_URL").expect("MAIL_API_URL"),
            mail_api_key: std::env::var("MAIL_API_KEY").expect("MAIL_API_KEY"),
            mail_from: std::env::var("MAIL_FROM").expect("MAIL_FROM"),
        }
    }

    pub fn is_production(&self) -> bool {
        self.app_env == "production"
    }
}
