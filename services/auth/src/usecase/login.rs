use uuid::Uuid;

use tmtr_core::device::DeviceInfo;

use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::types::Session;
use crate::error::AuthServiceError;
use crate::password::verify_password;
use crate::usecase::token::issue_for;

pub struct LoginInput {
    pub email: String,
    pub password: String,
    pub device: DeviceInfo,
}

#[derive(Debug)]
pub struct LoginOutput {
    pub user_id: Uuid,
    pub access_token: String,
    pub access_token_exp: u64,
    pub refresh_token: String,
}

pub struct LoginUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    pub users: U,
    pub sessions: S,
    pub jwt_secret: String,
}

impl<U, S> LoginUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    pub async fn execute(&self, input: LoginInput) -> Result<LoginOutput, AuthServiceError> {
        let user = self
            .users
            .find_by_email(&input.email)
            .await?
            .ok_or(AuthServiceError::UserNotFound)?;

        // OAuth-sourced accounts have no password hash and cannot log in
        // with credentials.
        let hash = user
            .password_hash
            .as_deref()
            .ok_or(AuthServiceError::InvalidCredential)?;
        if !verify_password(&input.password, hash)? {
            return Err(AuthServiceError::InvalidCredential);
        }

        let (access_token, access_token_exp) = issue_for(user.id, None, &self.jwt_secret)?;
        let session = Session::open(user.id, input.device);
        self.sessions.create(&session).await?;

        Ok(LoginOutput {
            user_id: user.id,
            access_token,
            access_token_exp,
            refresh_token: session.refresh_token,
        })
    }
}
