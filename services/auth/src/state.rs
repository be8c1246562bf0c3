use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use tmtr_auth_types::cookie::CookieOptions;
use tmtr_auth_types::identity::JwtSecret;

use crate::infra::db::{DbOtpRepository, DbSessionRepository, DbUserRepository};
use crate::infra::google::HttpGoogleClient;
use crate::infra::mail::HttpMailClient;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: String,
    pub cookie: CookieOptions,
    pub google: HttpGoogleClient,
    pub mail: HttpMailClient,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn session_repo(&self) -> DbSessionRepository {
        DbSessionRepository {
            db: self.db.clone(),
        }
    }

    pub fn otp_repo(&self) -> DbOtpRepository {
        DbOtpRepository {
            db: self.db.clone(),
        }
    }
}

impl JwtSecret for AppState {
    fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }
}

// Readiness handler pings the database through this substate.
impl FromRef<AppState> for DatabaseConnection {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}
