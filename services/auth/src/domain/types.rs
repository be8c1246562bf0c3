use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use tmtr_core::device::DeviceInfo;

/// Identity record.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    /// None for OAuth-sourced accounts.
    pub password_hash: Option<String>,
    pub email_verified: bool,
    pub role: u8,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Stored session state. Deliberately two-valued: expiry is derived from
/// `expires_at` so that explicit logout and expiry-by-time stay
/// distinguishable (see [`SessionStatus`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Active,
    Invalidated,
}

impl SessionState {
    pub fn as_i16(self) -> i16 {
        match self {
            Self::Active => 0,
            Self::Invalidated => 1,
        }
    }

    pub fn from_i16(value: i16) -> Self {
        match value {
            1 => Self::Invalidated,
            _ => Self::Active,
        }
    }
}

/// Effective session status at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Active,
    Invalidated,
    Expired,
}

/// One authenticated device instance.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Opaque refresh-token value, unique across all sessions.
    pub refresh_token: String,
    pub device: DeviceInfo,
    pub state: SessionState,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Session {
    /// Open a fresh session for a user: random opaque refresh token,
    /// expiry [`SESSION_TTL_DAYS`] out.
    pub fn open(user_id: Uuid, device: DeviceInfo) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            refresh_token: Uuid::new_v4().to_string(),
            device,
            state: SessionState::Active,
            expires_at: now + Duration::days(SESSION_TTL_DAYS),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn status(&self, now: DateTime<Utc>) -> SessionStatus {
        match self.state {
            SessionState::Invalidated => SessionStatus::Invalidated,
            SessionState::Active if self.expires_at <= now => SessionStatus::Expired,
            SessionState::Active => SessionStatus::Active,
        }
    }
}

/// What a one-time code authorizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpPurpose {
    Signup,
    Login,
    ForgotPassword,
    VerifyEmail,
}

impl OtpPurpose {
    pub fn as_i16(self) -> i16 {
        match self {
            Self::Signup => 0,
            Self::Login => 1,
            Self::ForgotPassword => 2,
            Self::VerifyEmail => 3,
        }
    }

    pub fn from_i16(value: i16) -> Self {
        match value {
            1 => Self::Login,
            2 => Self::ForgotPassword,
            3 => Self::VerifyEmail,
            _ => Self::Signup,
        }
    }
}

/// One-time numeric code.
#[derive(Debug, Clone)]
pub struct Otp {
    pub id: Uuid,
    pub user_id: Uuid,
    pub code: String,
    pub purpose: OtpPurpose,
    pub expires_at: DateTime<Utc>,
    pub used_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Otp {
    pub fn is_valid(&self) -> bool {
        self.used_at.is_none() && self.expires_at > Utc::now()
    }
}

/// Profile returned by the OAuth provider's userinfo endpoint.
#[derive(Debug, Clone)]
pub struct GoogleProfile {
    pub id: String,
    pub email: String,
    pub name: String,
    pub picture: Option<String>,
    pub verified_email: bool,
}

/// Outbound transactional mail.
#[derive(Debug, Clone)]
pub struct MailMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Session time-to-live in days.
pub const SESSION_TTL_DAYS: i64 = 30;

/// OTP length in digits.
pub const OTP_LEN: usize = 6;

/// OTP time-to-live in seconds.
pub const OTP_TTL_SECS: i64 = 600;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Cheap structural email check: one `@`, non-empty local part, and a
/// dot somewhere in the domain. The OTP round-trip is the real proof of
/// ownership.
pub fn validate_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.contains(char::is_whitespace)
}
