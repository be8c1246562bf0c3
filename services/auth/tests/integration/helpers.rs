use std::sync::{Arc, Mutex};

use chrono::Utc;
use uuid::Uuid;

use tmtr_auth::domain::repository::{
    GoogleUserinfoPort, MailPort, OtpRepository, SessionRepository, UserRepository,
};
use tmtr_auth::domain::types::{
    GoogleProfile, MailMessage, Otp, OtpPurpose, Session, SessionState, User,
};
use tmtr_auth::error::AuthServiceError;
use tmtr_auth::password::hash_password;

pub use tmtr_testing::fixture::{TEST_JWT_SECRET, test_device, test_user_id, unique_email};

// ── MockUserRepo ─────────────────────────────────────────────────────────────

pub struct MockUserRepo {
    pub users: Arc<Mutex<Vec<User>>>,
}

impl MockUserRepo {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Shared handle for post-execution inspection.
    pub fn users_handle(&self) -> Arc<Mutex<Vec<User>>> {
        Arc::clone(&self.users)
    }
}

impl UserRepository for MockUserRepo {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthServiceError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AuthServiceError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn create(&self, user: &User) -> Result<(), AuthServiceError> {
        let mut users = self.users.lock().unwrap();
        // The store's unique constraint on email.
        if users.iter().any(|u| u.email == user.email) {
            return Err(AuthServiceError::EmailTaken);
        }
        users.push(user.clone());
        Ok(())
    }

    async fn mark_email_verified(&self, id: Uuid) -> Result<(), AuthServiceError> {
        let mut users = self.users.lock().unwrap();
        if let Some(u) = users.iter_mut().find(|u| u.id == id) {
            u.email_verified = true;
        }
        Ok(())
    }
}

// ── MockSessionRepo ──────────────────────────────────────────────────────────

pub struct MockSessionRepo {
    pub sessions: Arc<Mutex<Vec<Session>>>,
}

impl MockSessionRepo {
    pub fn new(sessions: Vec<Session>) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(sessions)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn sessions_handle(&self) -> Arc<Mutex<Vec<Session>>> {
        Arc::clone(&self.sessions)
    }
}

impl SessionRepository for MockSessionRepo {
    async fn create(&self, session: &Session) -> Result<(), AuthServiceError> {
        self.sessions.lock().unwrap().push(session.clone());
        Ok(())
    }

    async fn find_by_refresh_token(
        &self,
        refresh_token: &str,
    ) -> Result<Option<Session>, AuthServiceError> {
        Ok(self
            .sessions
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.refresh_token == refresh_token)
            .cloned())
    }

    async fn invalidate(&self, refresh_token: &str) -> Result<bool, AuthServiceError> {
        let mut sessions = self.sessions.lock().unwrap();
        match sessions.iter_mut().find(|s| s.refresh_token == refresh_token) {
            Some(s) => {
                s.state = SessionState::Invalidated;
                s.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

// ── MockOtpRepo ──────────────────────────────────────────────────────────────

pub struct MockOtpRepo {
    pub otps: Arc<Mutex<Vec<Otp>>>,
}

impl MockOtpRepo {
    pub fn new(otps: Vec<Otp>) -> Self {
        Self {
            otps: Arc::new(Mutex::new(otps)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn otps_handle(&self) -> Arc<Mutex<Vec<Otp>>> {
        Arc::clone(&self.otps)
    }
}

impl OtpRepository for MockOtpRepo {
    async fn create(&self, otp: &Otp) -> Result<(), AuthServiceError> {
        self.otps.lock().unwrap().push(otp.clone());
        Ok(())
    }

    async fn find_valid(
        &self,
        user_id: Uuid,
        code: &str,
        purpose: OtpPurpose,
    ) -> Result<Option<Otp>, AuthServiceError> {
        Ok(self
            .otps
            .lock()
            .unwrap()
            .iter()
            .find(|o| o.user_id == user_id && o.code == code && o.purpose == purpose && o.is_valid())
            .cloned())
    }

    async fn mark_used(&self, id: Uuid) -> Result<(), AuthServiceError> {
        let mut otps = self.otps.lock().unwrap();
        if let Some(o) = otps.iter_mut().find(|o| o.id == id) {
            o.used_at = Some(Utc::now());
        }
        Ok(())
    }
}

// ── MockMail ─────────────────────────────────────────────────────────────────

pub struct MockMail {
    pub sent: Arc<Mutex<Vec<MailMessage>>>,
    pub fail: bool,
}

impl MockMail {
    pub fn working() -> Self {
        Self {
            sent: Arc::new(Mutex::new(vec![])),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            sent: Arc::new(Mutex::new(vec![])),
            fail: true,
        }
    }

    pub fn sent_handle(&self) -> Arc<Mutex<Vec<MailMessage>>> {
        Arc::clone(&self.sent)
    }
}

impl MailPort for MockMail {
    async fn send(&self, message: &MailMessage) -> Result<(), AuthServiceError> {
        if self.fail {
            return Err(AuthServiceError::Internal(anyhow::anyhow!(
                "mail provider down"
            )));
        }
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

// ── MockGoogle ───────────────────────────────────────────────────────────────

pub struct MockGoogle {
    pub profile: Option<GoogleProfile>,
}

impl MockGoogle {
    pub fn with_profile(profile: GoogleProfile) -> Self {
        Self {
            profile: Some(profile),
        }
    }

    pub fn rejecting() -> Self {
        Self { profile: None }
    }
}

impl GoogleUserinfoPort for MockGoogle {
    async fn fetch(&self, _bearer_token: &str) -> Result<GoogleProfile, AuthServiceError> {
        self.profile
            .clone()
            .ok_or(AuthServiceError::GoogleRejected)
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub const TEST_PASSWORD: &str = "Password1!";

pub fn password_user(email: &str) -> User {
    let now = Utc::now();
    User {
        id: test_user_id(),
        email: email.to_owned(),
        name: "alice".to_owned(),
        password_hash: Some(hash_password(TEST_PASSWORD).unwrap()),
        email_verified: true,
        role: 0,
        created_at: now,
        updated_at: now,
    }
}

pub fn oauth_user(email: &str) -> User {
    let now = Utc::now();
    User {
        id: Uuid::new_v4(),
        email: email.to_owned(),
        name: "bob".to_owned(),
        password_hash: None,
        email_verified: true,
        role: 0,
        created_at: now,
        updated_at: now,
    }
}

pub fn google_profile(email: &str) -> GoogleProfile {
    GoogleProfile {
        id: "108234567890".to_owned(),
        email: email.to_owned(),
        name: "bob".to_owned(),
        picture: Some("https://lh3.example.com/photo.jpg".to_owned()),
        verified_email: true,
    }
}
