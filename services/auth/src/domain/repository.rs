#![allow(async_fn_in_trait)]

use uuid::Uuid;

use crate::domain::types::{GoogleProfile, MailMessage, Otp, OtpPurpose, Session, User};
use crate::error::AuthServiceError;

/// Repository for identity records.
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthServiceError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AuthServiceError>;

    /// Insert a new user. Fails with `EmailTaken` when the store's unique
    /// constraint on email is violated.
    async fn create(&self, user: &User) -> Result<(), AuthServiceError>;

    async fn mark_email_verified(&self, id: Uuid) -> Result<(), AuthServiceError>;
}

/// Repository for sessions. Sessions are soft-invalidated, never deleted.
pub trait SessionRepository: Send + Sync {
    async fn create(&self, session: &Session) -> Result<(), AuthServiceError>;

    async fn find_by_refresh_token(
        &self,
        refresh_token: &str,
    ) -> Result<Option<Session>, AuthServiceError>;

    /// Flip the session's state to invalidated. Returns `false` when no
    /// session carries that refresh token.
    async fn invalidate(&self, refresh_token: &str) -> Result<bool, AuthServiceError>;
}

/// Repository for one-time codes.
pub trait OtpRepository: Send + Sync {
    async fn create(&self, otp: &Otp) -> Result<(), AuthServiceError>;

    /// Find a valid (unused, unexpired) code by user + code + purpose.
    async fn find_valid(
        &self,
        user_id: Uuid,
        code: &str,
        purpose: OtpPurpose,
    ) -> Result<Option<Otp>, AuthServiceError>;

    /// Consume a code (sets used_at = now).
    async fn mark_used(&self, id: Uuid) -> Result<(), AuthServiceError>;
}

/// Port for the OAuth provider's userinfo endpoint.
pub trait GoogleUserinfoPort: Send + Sync {
    async fn fetch(&self, bearer_token: &str) -> Result<GoogleProfile, AuthServiceError>;
}

/// Port for the transactional mail provider.
pub trait MailPort: Send + Sync {
    async fn send(&self, message: &MailMessage) -> Result<(), AuthServiceError>;
}
