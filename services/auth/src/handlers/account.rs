use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use tmtr_auth_types::cookie::set_auth_cookies;
use tmtr_core::device::DeviceInfo;
use tmtr_core::message::x_message;

use crate::error::AuthServiceError;
use crate::state::AppState;
use crate::usecase::signup::{
    SignupInput, SignupUseCase, VerifyEmailInput, VerifyEmailUseCase,
};

// ── POST /api/auth/signup ─────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub name: String,
    pub password: String,
}

pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<SignupRequest>,
) -> Result<impl IntoResponse, AuthServiceError> {
    let usecase = SignupUseCase {
        users: state.user_repo(),
        otps: state.otp_repo(),
        mail: state.mail.clone(),
    };
    usecase
        .execute(SignupInput {
            email: body.email,
            name: body.name,
            password: body.password,
        })
        .await?;

    Ok((StatusCode::CREATED, x_message("verification code sent")))
}

// ── POST /api/auth/verify-email ──────────────────────────────────────────────

#[derive(Deserialize)]
pub struct VerifyEmailRequest {
    pub email: String,
    pub code: String,
}

pub async fn verify_email(
    State(state): State<AppState>,
    device: DeviceInfo,
    jar: CookieJar,
    Json(body): Json<VerifyEmailRequest>,
) -> Result<impl IntoResponse, AuthServiceError> {
    let usecase = VerifyEmailUseCase {
        users: state.user_repo(),
        otps: state.otp_repo(),
        sessions: state.session_repo(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let out = usecase
        .execute(VerifyEmailInput {
            email: body.email,
            code: body.code,
            device,
        })
        .await?;

    let jar = set_auth_cookies(jar, out.access_token, out.refresh_token, &state.cookie);
    Ok((StatusCode::CREATED, jar, x_message("email verified")))
}
