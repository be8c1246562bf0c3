use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use tmtr_auth_types::identity::JwtSecret;

use crate::infra::db::{DbLinkRepository, DbVisitRepository};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: String,
}

impl AppState {
    pub fn link_repo(&self) -> DbLinkRepository {
        DbLinkRepository {
            db: self.db.clone(),
        }
    }

    pub fn visit_repo(&self) -> DbVisitRepository {
        DbVisitRepository {
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
