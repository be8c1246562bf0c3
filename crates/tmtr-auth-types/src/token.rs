//! JWT access-token issue and validation.

use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::Deserialize;
#[cfg(any(feature = "token-issuer", test))]
use serde::Serialize;
use uuid::Uuid;

/// Access-token JWT lifetime in seconds (15 minutes).
pub const ACCESS_TOKEN_EXP: u64 = 900;

/// Lifetime used when a profile id is bound into the token (120 minutes).
pub const PROFILE_ACCESS_TOKEN_EXP: u64 = 7200;

/// User identity extracted from a validated access token.
#[derive(Debug, Clone)]
pub struct TokenInfo {
    pub user_id: Uuid,
    pub profile_id: Option<Uuid>,
    pub access_token_exp: u64,
}

/// Errors returned by token validation and issuing.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("invalid signature")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
    #[error("malformed token")]
    Malformed,
    #[error("signing secret is empty")]
    EmptySecret,
    #[error("signing failed")]
    Signing,
}

/// JWT claims payload.
///
/// `sub` carries the user id. `pid` is an optional profile id bound into
/// the token by the profile-scoped login variant; tokens carrying it get
/// the longer [`PROFILE_ACCESS_TOKEN_EXP`] window.
///
/// [`Serialize`] is gated behind the **`token-issuer`** cargo feature;
/// only the auth service issues tokens; everything else validates.
#[derive(Debug, Deserialize)]
#[cfg_attr(any(feature = "token-issuer", test), derive(Serialize))]
pub struct JwtClaims {
    /// User id (UUID string).
    pub sub: String,
    /// Optional profile id (UUID string).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pid: Option<String>,
    /// Expiration timestamp (seconds since UNIX epoch).
    pub exp: u64,
}

/// Decode and validate a JWT, returning raw claims.
///
/// Validation: HS256, exp checked, required claims: `exp` + `sub`.
/// Default leeway of 60s tolerates clock skew between services.
fn decode_jwt(token: &str, secret: &str) -> Result<JwtClaims, TokenError> {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = true;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<JwtClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        _ => TokenError::Malformed,
    })?;

    Ok(data.claims)
}

/// Validate an access-token cookie value, returning the parsed identity.
pub fn validate_access_token(cookie_value: &str, secret: &str) -> Result<TokenInfo, TokenError> {
    let claims = decode_jwt(cookie_value, secret)?;
    let user_id = claims
        .sub
        .parse::<Uuid>()
        .map_err(|_| TokenError::Malformed)?;
    let profile_id = match claims.pid {
        Some(pid) => Some(pid.parse::<Uuid>().map_err(|_| TokenError::Malformed)?),
        None => None,
    };
    Ok(TokenInfo {
        user_id,
        profile_id,
        access_token_exp: claims.exp,
    })
}

#[cfg(any(feature = "token-issuer", test))]
fn now_secs() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("system clock before UNIX epoch")
        .as_secs()
}

/// Issue a signed access token for a user, optionally bound to a profile.
///
/// Returns the token string and its expiry timestamp. Fails with
/// [`TokenError::EmptySecret`] when the signing secret is unset.
#[cfg(any(feature = "token-issuer", test))]
pub fn issue_access_token(
    user_id: Uuid,
    profile_id: Option<Uuid>,
    secret: &str,
) -> Result<(String, u64), TokenError> {
    if secret.is_empty() {
        return Err(TokenError::EmptySecret);
    }
    let window = if profile_id.is_some() {
        PROFILE_ACCESS_TOKEN_EXP
    } else {
        ACCESS_TOKEN_EXP
    };
    let exp = now_secs() + window;
    let claims = JwtClaims {
        sub: user_id.to_string(),
        pid: profile_id.map(|p| p.to_string()),
        exp,
    };
    let token = jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|_| TokenError::Signing)?;
    Ok((token, exp))
}
