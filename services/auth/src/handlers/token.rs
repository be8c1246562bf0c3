use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};

use tmtr_auth_types::cookie::{
    TMTR_REFRESH_TOKEN, clear_auth_cookies, set_access_token_cookie, set_auth_cookies,
};
use tmtr_core::device::DeviceInfo;
use tmtr_core::message::x_message;

use crate::error::AuthServiceError;
use crate::state::AppState;
use crate::usecase::login::{LoginInput, LoginUseCase};
use crate::usecase::token::{LogoutUseCase, RefreshTokenUseCase};

// ── POST /api/auth/login ─────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user_id: uuid::Uuid,
    pub access_token_exp: u64,
}

pub async fn login(
    State(state): State<AppState>,
    device: DeviceInfo,
    jar: CookieJar,
    Json(body): Json<LoginRequest>,
) -> Result<impl IntoResponse, AuthServiceError> {
    let usecase = LoginUseCase {
        users: state.user_repo(),
        sessions: state.session_repo(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let out = usecase
        .execute(LoginInput {
            email: body.email,
            password: body.password,
            device,
        })
        .await?;

    let jar = set_auth_cookies(jar, out.access_token, out.refresh_token, &state.cookie);
    let body = LoginResponse {
        user_id: out.user_id,
        access_token_exp: out.access_token_exp,
    };
    Ok((StatusCode::CREATED, jar, x_message("logged in"), Json(body)))
}

// ── POST /api/auth/refresh ───────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub access_token: String,
    pub access_token_exp: u64,
}

/// The refresh token comes from the request body when present, else from
/// the refresh cookie.
pub async fn refresh_token(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Option<Json<RefreshRequest>>,
) -> Result<impl IntoResponse, AuthServiceError> {
    let refresh_value = body
        .and_then(|Json(b)| b.refresh_token)
        .or_else(|| jar.get(TMTR_REFRESH_TOKEN).map(|c| c.value().to_owned()))
        .ok_or(AuthServiceError::InvalidRefreshToken)?;

    let usecase = RefreshTokenUseCase {
        sessions: state.session_repo(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let out = usecase.execute(&refresh_value).await?;

    let jar = set_access_token_cookie(jar, out.access_token.clone(), &state.cookie);
    let body = RefreshResponse {
        access_token: out.access_token,
        access_token_exp: out.access_token_exp,
    };
    Ok((StatusCode::OK, jar, x_message("token refreshed"), Json(body)))
}

// ── DELETE /api/auth/logout ──────────────────────────────────────────────────

pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AuthServiceError> {
    let refresh_value = jar
        .get(TMTR_REFRESH_TOKEN)
        .map(|c| c.value().to_owned())
        .ok_or(AuthServiceError::InvalidRefreshToken)?;

    let usecase = LogoutUseCase {
        sessions: state.session_repo(),
    };
    usecase.execute(&refresh_value).await?;

    let jar = clear_auth_cookies(jar, &state.cookie);
    Ok((StatusCode::NO_CONTENT, jar, x_message("logged out")))
}
