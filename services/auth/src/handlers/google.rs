use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use serde::Serialize;

use tmtr_auth_types::cookie::set_auth_cookies;
use tmtr_core::device::DeviceInfo;
use tmtr_core::message::x_message;

use crate::error::AuthServiceError;
use crate::state::AppState;
use crate::usecase::google::{GoogleSigninInput, GoogleSigninUseCase};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleSigninResponse {
    pub user_id: uuid::Uuid,
    pub is_signup: bool,
}

fn bearer_token(headers: &HeaderMap) -> Result<String, AuthServiceError> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::to_owned)
        .ok_or_else(|| AuthServiceError::InvalidInput("missing bearer token".to_owned()))
}

async fn signin(
    state: AppState,
    headers: HeaderMap,
    device: DeviceInfo,
    jar: CookieJar,
) -> Result<Response, AuthServiceError> {
    let bearer = bearer_token(&headers)?;

    let usecase = GoogleSigninUseCase {
        users: state.user_repo(),
        sessions: state.session_repo(),
        google: state.google.clone(),
        mail: state.mail.clone(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let out = usecase
        .execute(GoogleSigninInput {
            bearer_token: bearer,
            device,
        })
        .await?;

    let status = if out.is_signup {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    let message = if out.is_signup {
        "account created"
    } else {
        "logged in"
    };
    let jar = set_auth_cookies(jar, out.access_token, out.refresh_token, &state.cookie);
    let body = GoogleSigninResponse {
        user_id: out.user_id,
        is_signup: out.is_signup,
    };
    Ok((status, jar, x_message(message), Json(body)).into_response())
}

// ── GET /api/auth/google-login ───────────────────────────────────────────────

pub async fn google_login(
    State(state): State<AppState>,
    headers: HeaderMap,
    device: DeviceInfo,
    jar: CookieJar,
) -> Result<Response, AuthServiceError> {
    signin(state, headers, device, jar).await
}

// ── GET /api/auth/google-signup ──────────────────────────────────────────────

// Same pipeline as login: the lookup-by-email decides whether an account
// is created, so both routes stay idempotent for existing emails.
pub async fn google_signup(
    State(state): State<AppState>,
    headers: HeaderMap,
    device: DeviceInfo,
    jar: CookieJar,
) -> Result<Response, AuthServiceError> {
    signin(state, headers, device, jar).await
}
