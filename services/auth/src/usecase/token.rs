use chrono::Utc;
use uuid::Uuid;

use tmtr_auth_types::token::issue_access_token;

use crate::domain::repository::SessionRepository;
use crate::domain::types::SessionStatus;
use crate::error::AuthServiceError;

/// Issue an access token, mapping signing failures into the service error.
pub(crate) fn issue_for(
    user_id: Uuid,
    profile_id: Option<Uuid>,
    secret: &str,
) -> Result<(String, u64), AuthServiceError> {
    issue_access_token(user_id, profile_id, secret)
        .map_err(|e| AuthServiceError::Internal(anyhow::anyhow!("issue access token: {e}")))
}

// ── RefreshToken ─────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct RefreshTokenOutput {
    pub user_id: Uuid,
    pub access_token: String,
    pub access_token_exp: u64,
}

pub struct RefreshTokenUseCase<S: SessionRepository> {
    pub sessions: S,
    pub jwt_secret: String,
}

impl<S: SessionRepository> RefreshTokenUseCase<S> {
    /// Exchange an opaque refresh token for a fresh access token.
    ///
    /// An invalidated or expired session never yields a token.
    pub async fn execute(
        &self,
        refresh_token_value: &str,
    ) -> Result<RefreshTokenOutput, AuthServiceError> {
        let session = self
            .sessions
            .find_by_refresh_token(refresh_token_value)
            .await?
            .ok_or(AuthServiceError::InvalidRefreshToken)?;

        if session.status(Utc::now()) != SessionStatus::Active {
            return Err(AuthServiceError::InvalidSession);
        }

        let (access_token, access_token_exp) =
            issue_for(session.user_id, None, &self.jwt_secret)?;

        Ok(RefreshTokenOutput {
            user_id: session.user_id,
            access_token,
            access_token_exp,
        })
    }
}

// ── Logout ───────────────────────────────────────────────────────────────────

pub struct LogoutUseCase<S: SessionRepository> {
    pub sessions: S,
}

impl<S: SessionRepository> LogoutUseCase<S> {
    /// Soft-invalidate the session behind a refresh token. The row is kept.
    pub async fn execute(&self, refresh_token_value: &str) -> Result<(), AuthServiceError> {
        let invalidated = self.sessions.invalidate(refresh_token_value).await?;
        if !invalidated {
            return Err(AuthServiceError::InvalidRefreshToken);
        }
        Ok(())
    }
}
