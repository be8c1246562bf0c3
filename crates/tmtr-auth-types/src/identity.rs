//! Access-token cookie extractor.

use axum::extract::FromRequestParts;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::CookieJar;
use http::StatusCode;
use http::request::Parts;
use uuid::Uuid;

use crate::cookie::TMTR_ACCESS_TOKEN;
use crate::token::validate_access_token;

/// Provides the HMAC secret used to validate access tokens.
///
/// Implemented by each service's `AppState` so [`Identity`] can be used
/// as an axum extractor against that state.
pub trait JwtSecret {
    fn jwt_secret(&self) -> &str;
}

/// Request identity parsed from the access-token cookie.
///
/// Rejects with 401 (kind `authentication`) when the cookie is absent,
/// expired, malformed, or signed with the wrong secret.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: Uuid,
    pub profile_id: Option<Uuid>,
    pub access_token_exp: u64,
}

fn unauthorized(message: &str) -> Response {
    let headers = [(
        http::HeaderName::from_static("x-message"),
        http::HeaderValue::from_str(message)
            .unwrap_or_else(|_| http::HeaderValue::from_static("authentication failed")),
    )];
    let body = serde_json::json!({
        "kind": "authentication",
        "message": message,
    });
    (StatusCode::UNAUTHORIZED, headers, axum::Json(body)).into_response()
}

impl<S> FromRequestParts<S> for Identity
where
    S: JwtSecret + Send + Sync,
{
    type Rejection = Response;

    // axum-core defines this as `fn -> impl Future + Send` (not `async fn`);
    // extract synchronously and return a 'static async block.
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let jar = CookieJar::from_headers(&parts.headers);
        let result = jar
            .get(TMTR_ACCESS_TOKEN)
            .ok_or_else(|| unauthorized("access token cookie missing"))
            .and_then(|cookie| {
                validate_access_token(cookie.value(), state.jwt_secret())
                    .map_err(|e| unauthorized(&e.to_string()))
            });

        async move {
            let info = result?;
            Ok(Self {
                user_id: info.user_id,
                profile_id: info.profile_id,
                access_token_exp: info.access_token_exp,
            })
        }
    }
}
