use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    SqlErr, sea_query::Expr,
};
use uuid::Uuid;

use tmtr_auth_schema::{otps, sessions, users};
use tmtr_core::device::DeviceInfo;

use crate::domain::repository::{OtpRepository, SessionRepository, UserRepository};
use crate::domain::types::{Otp, OtpPurpose, Session, SessionState, User};
use crate::error::AuthServiceError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AuthServiceError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn create(&self, user: &User) -> Result<(), AuthServiceError> {
        let result = users::ActiveModel {
            id: Set(user.id),
            email: Set(user.email.clone()),
            name: Set(user.name.clone()),
            password_hash: Set(user.password_hash.clone()),
            email_verified: Set(user.email_verified),
            role: Set(user.role as i16),
            created_at: Set(user.created_at),
            updated_at: Set(user.updated_at),
        }
        .insert(&self.db)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(AuthServiceError::EmailTaken)
            }
            Err(e) => Err(anyhow::Error::new(e).context("create user").into()),
        }
    }

    async fn mark_email_verified(&self, id: Uuid) -> Result<(), AuthServiceError> {
        users::ActiveModel {
            id: Set(id),
            email_verified: Set(true),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("mark email verified")?;
        Ok(())
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        email: model.email,
        name: model.name,
        password_hash: model.password_hash,
        email_verified: model.email_verified,
        role: model.role as u8,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Session repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbSessionRepository {
    pub db: DatabaseConnection,
}

impl SessionRepository for DbSessionRepository {
    async fn create(&self, session: &Session) -> Result<(), AuthServiceError> {
        sessions::ActiveModel {
            id: Set(session.id),
            user_id: Set(session.user_id),
            refresh_token: Set(session.refresh_token.clone()),
            browser: Set(session.device.browser.clone()),
            browser_version: Set(session.device.browser_version.clone()),
            os: Set(session.device.os.clone()),
            os_version: Set(session.device.os_version.clone()),
            state: Set(session.state.as_i16()),
            expires_at: Set(session.expires_at),
            created_at: Set(session.created_at),
            updated_at: Set(session.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create session")?;
        Ok(())
    }

    async fn find_by_refresh_token(
        &self,
        refresh_token: &str,
    ) -> Result<Option<Session>, AuthServiceError> {
        let model = sessions::Entity::find()
            .filter(sessions::Column::RefreshToken.eq(refresh_token))
            .one(&self.db)
            .await
            .context("find session by refresh token")?;
        Ok(model.map(session_from_model))
    }

    async fn invalidate(&self, refresh_token: &str) -> Result<bool, AuthServiceError> {
        let result = sessions::Entity::update_many()
            .col_expr(
                sessions::Column::State,
                Expr::value(SessionState::Invalidated.as_i16()),
            )
            .col_expr(sessions::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(sessions::Column::RefreshToken.eq(refresh_token))
            .exec(&self.db)
            .await
            .context("invalidate session")?;
        Ok(result.rows_affected > 0)
    }
}

fn session_from_model(model: sessions::Model) -> Session {
    Session {
        id: model.id,
        user_id: model.user_id,
        refresh_token: model.refresh_token,
        device: DeviceInfo {
            browser: model.browser,
            browser_version: model.browser_version,
            os: model.os,
            os_version: model.os_version,
        },
        state: SessionState::from_i16(model.state),
        expires_at: model.expires_at,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Otp repository ───────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbOtpRepository {
    pub db: DatabaseConnection,
}

impl OtpRepository for DbOtpRepository {
    async fn create(&self, otp: &Otp) -> Result<(), AuthServiceError> {
        otps::ActiveModel {
            id: Set(otp.id),
            user_id: Set(otp.user_id),
            code: Set(otp.code.clone()),
            purpose: Set(otp.purpose.as_i16()),
            expires_at: Set(otp.expires_at),
            used_at: Set(None),
            created_at: Set(otp.created_at),
        }
        .insert(&self.db)
        .await
        .context("create otp")?;
        Ok(())
    }

    async fn find_valid(
        &self,
        user_id: Uuid,
        code: &str,
        purpose: OtpPurpose,
    ) -> Result<Option<Otp>, AuthServiceError> {
        let now = Utc::now();
        let model = otps::Entity::find()
            .filter(otps::Column::UserId.eq(user_id))
            .filter(otps::Column::Code.eq(code))
            .filter(otps::Column::Purpose.eq(purpose.as_i16()))
            .filter(otps::Column::UsedAt.is_null())
            .filter(otps::Column::ExpiresAt.gt(now))
            .one(&self.db)
            .await
            .context("find valid otp")?;
        Ok(model.map(otp_from_model))
    }

    async fn mark_used(&self, id: Uuid) -> Result<(), AuthServiceError> {
        otps::ActiveModel {
            id: Set(id),
            used_at: Set(Some(Utc::now())),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("mark otp used")?;
        Ok(())
    }
}

fn otp_from_model(model: otps::Model) -> Otp {
    Otp {
        id: model.id,
        user_id: model.user_id,
        code: model.code,
        purpose: OtpPurpose::from_i16(model.purpose),
        expires_at: model.expires_at,
        used_at: model.used_at,
        created_at: model.created_at,
    }
}
