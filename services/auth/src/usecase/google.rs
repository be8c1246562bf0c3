use chrono::Utc;
use uuid::Uuid;

use tmtr_core::device::DeviceInfo;

use crate::domain::repository::{GoogleUserinfoPort, MailPort, SessionRepository, UserRepository};
use crate::domain::types::{MailMessage, Session, User};
use crate::error::AuthServiceError;
use crate::usecase::token::issue_for;

pub struct GoogleSigninInput {
    pub bearer_token: String,
    pub device: DeviceInfo,
}

#[derive(Debug)]
pub struct GoogleSigninOutput {
    pub user_id: Uuid,
    pub access_token: String,
    pub access_token_exp: u64,
    pub refresh_token: String,
    /// True when this call created the account.
    pub is_signup: bool,
}

pub struct GoogleSigninUseCase<U, S, G, M>
where
    U: UserRepository,
    S: SessionRepository,
    G: GoogleUserinfoPort,
    M: MailPort,
{
    pub users: U,
    pub sessions: S,
    pub google: G,
    pub mail: M,
    pub jwt_secret: String,
}

impl<U, S, G, M> GoogleSigninUseCase<U, S, G, M>
where
    U: UserRepository,
    S: SessionRepository,
    G: GoogleUserinfoPort,
    M: MailPort,
{
    /// Sign in (or up) with a Google bearer token.
    ///
    /// Lookup-by-email is idempotent: an existing account is reused, never
    /// duplicated. The welcome mail for fresh accounts is best-effort;
    /// a mail-provider failure only gets logged.
    pub async fn execute(
        &self,
        input: GoogleSigninInput,
    ) -> Result<GoogleSigninOutput, AuthServiceError> {
        let profile = self.google.fetch(&input.bearer_token).await?;

        let (user, is_signup) = match self.users.find_by_email(&profile.email).await? {
            Some(user) => (user, false),
            None => {
                let now = Utc::now();
                let user = User {
                    id: Uuid::new_v4(),
                    email: profile.email.clone(),
                    name: profile.name.clone(),
                    password_hash: None,
                    email_verified: profile.verified_email,
                    role: 0,
                    created_at: now,
                    updated_at: now,
                };
                self.users.create(&user).await?;
                (user, true)
            }
        };

        let (access_token, access_token_exp) = issue_for(user.id, None, &self.jwt_secret)?;
        let session = Session::open(user.id, input.device);
        self.sessions.create(&session).await?;

        if is_signup {
            let message = MailMessage {
                to: user.email.clone(),
                subject: "Welcome to tmtr".to_owned(),
                body: format!("Hi {}, your account is ready.", user.name),
            };
            if let Err(e) = self.mail.send(&message).await {
                tracing::warn!(error = %e, user_id = %user.id, "welcome mail failed");
            }
        }

        Ok(GoogleSigninOutput {
            user_id: user.id,
            access_token,
            access_token_exp,
            refresh_token: session.refresh_token,
            is_signup,
        })
    }
}
