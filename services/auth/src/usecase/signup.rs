use chrono::{Duration, Utc};
use rand::RngExt;
use uuid::Uuid;

use tmtr_core::device::DeviceInfo;

use crate::domain::repository::{MailPort, OtpRepository, SessionRepository, UserRepository};
use crate::domain::types::{
    MailMessage, OTP_LEN, OTP_TTL_SECS, Otp, OtpPurpose, Session, User, validate_email,
};
use crate::error::AuthServiceError;
use crate::password::{hash_password, validate_password_strength};
use crate::usecase::token::issue_for;

fn generate_otp_code() -> String {
    let mut rng = rand::rng();
    (0..OTP_LEN)
        .map(|_| char::from(b'0' + rng.random_range(0..10) as u8))
        .collect()
}

// ── Signup ───────────────────────────────────────────────────────────────────

pub struct SignupInput {
    pub email: String,
    pub name: String,
    pub password: String,
}

pub struct SignupUseCase<U, O, M>
where
    U: UserRepository,
    O: OtpRepository,
    M: MailPort,
{
    pub users: U,
    pub otps: O,
    pub mail: M,
}

impl<U, O, M> SignupUseCase<U, O, M>
where
    U: UserRepository,
    O: OtpRepository,
    M: MailPort,
{
    /// Create a user and a pending signup OTP.
    ///
    /// The verification mail is best-effort: once the user and OTP rows
    /// are committed, a mail-provider failure is logged and the signup
    /// still succeeds.
    pub async fn execute(&self, input: SignupInput) -> Result<(), AuthServiceError> {
        if !validate_email(&input.email) {
            return Err(AuthServiceError::InvalidInput(
                "email is malformed".to_owned(),
            ));
        }
        validate_password_strength(&input.password)?;

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email: input.email.clone(),
            name: input.name,
            password_hash: Some(hash_password(&input.password)?),
            email_verified: false,
            role: 0,
            created_at: now,
            updated_at: now,
        };
        self.users.create(&user).await?;

        let code = generate_otp_code();
        let otp = Otp {
            id: Uuid::new_v4(),
            user_id: user.id,
            code: code.clone(),
            purpose: OtpPurpose::Signup,
            expires_at: now + Duration::seconds(OTP_TTL_SECS),
            used_at: None,
            created_at: now,
        };
        self.otps.create(&otp).await?;

        let message = MailMessage {
            to: input.email,
            subject: "Verify your email".to_owned(),
            body: format!("Your verification code is {code}. It expires in 10 minutes."),
        };
        if let Err(e) = self.mail.send(&message).await {
            tracing::warn!(error = %e, user_id = %user.id, "verification mail failed");
        }

        Ok(())
    }
}

// ── VerifyEmail ──────────────────────────────────────────────────────────────

pub struct VerifyEmailInput {
    pub email: String,
    pub code: String,
    pub device: DeviceInfo,
}

#[derive(Debug)]
pub struct VerifyEmailOutput {
    pub user_id: Uuid,
    pub access_token: String,
    pub access_token_exp: u64,
    pub refresh_token: String,
}

pub struct VerifyEmailUseCase<U, O, S>
where
    U: UserRepository,
    O: OtpRepository,
    S: SessionRepository,
{
    pub users: U,
    pub otps: O,
    pub sessions: S,
    pub jwt_secret: String,
}

impl<U, O, S> VerifyEmailUseCase<U, O, S>
where
    U: UserRepository,
    O: OtpRepository,
    S: SessionRepository,
{
    /// Consume a signup OTP, flag the email verified, and open the first
    /// session for the account.
    pub async fn execute(
        &self,
        input: VerifyEmailInput,
    ) -> Result<VerifyEmailOutput, AuthServiceError> {
        let user = self
            .users
            .find_by_email(&input.email)
            .await?
            .ok_or(AuthServiceError::UserNotFound)?;

        let otp = self
            .otps
            .find_valid(user.id, &input.code, OtpPurpose::Signup)
            .await?
            .ok_or(AuthServiceError::InvalidOtp)?;

        self.otps.mark_used(otp.id).await?;
        self.users.mark_email_verified(user.id).await?;

        let (access_token, access_token_exp) = issue_for(user.id, None, &self.jwt_secret)?;
        let session = Session::open(user.id, input.device);
        self.sessions.create(&session).await?;

        Ok(VerifyEmailOutput {
            user_id: user.id,
            access_token,
            access_token_exp,
            refresh_token: session.refresh_token,
        })
    }
}
