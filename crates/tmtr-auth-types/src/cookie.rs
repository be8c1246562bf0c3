//! Cookie builders for the access/refresh token pair.
//!
//! The two cookies always travel together: one call sets both, one call
//! clears both. Lifetimes are independent; the access cookie expires with
//! the token (15 minutes), the refresh cookie lives 30 days.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

/// Cookie name for the access token.
pub const TMTR_ACCESS_TOKEN: &str = "tmtr_access_token";

/// Cookie name for the refresh token.
pub const TMTR_REFRESH_TOKEN: &str = "tmtr_refresh_token";

/// Access-token cookie Max-Age in seconds (15 minutes).
pub const ACCESS_COOKIE_MAX_AGE: i64 = 900;

/// Refresh-token cookie Max-Age in seconds (30 days).
pub const REFRESH_COOKIE_MAX_AGE: i64 = 2_592_000;

/// The refresh cookie is scoped to the auth routes only.
const REFRESH_COOKIE_PATH: &str = "/api/auth";

/// Cookie attributes that vary by deployment.
#[derive(Debug, Clone)]
pub struct CookieOptions {
    /// Cookie Domain attribute (root domain, e.g. "example.com").
    pub domain: String,
    /// Secure flag, on in production, off for plain-HTTP local runs.
    pub secure: bool,
}

fn build(name: &'static str, value: String, path: &'static str, max_age: i64, opts: &CookieOptions) -> Cookie<'static> {
    Cookie::build((name, value))
        .path(path)
        .domain(opts.domain.clone())
        .max_age(Duration::seconds(max_age))
        .http_only(true)
        .secure(opts.secure)
        .same_site(SameSite::Strict)
        .build()
}

/// Set both auth cookies on the jar.
///
/// ```
/// use axum_extra::extract::cookie::CookieJar;
/// use tmtr_auth_types::cookie::{
///     set_auth_cookies, CookieOptions, TMTR_ACCESS_TOKEN, TMTR_REFRESH_TOKEN,
/// };
///
/// let opts = CookieOptions { domain: "example.com".to_string(), secure: true };
/// let jar = set_auth_cookies(CookieJar::new(), "a".to_string(), "r".to_string(), &opts);
/// let access = jar.get(TMTR_ACCESS_TOKEN).unwrap();
/// let refresh = jar.get(TMTR_REFRESH_TOKEN).unwrap();
/// assert_eq!(access.path(), Some("/"));
/// assert_eq!(access.max_age(), Some(time::Duration::seconds(900)));
/// assert_eq!(refresh.path(), Some("/api/auth"));
/// assert_eq!(refresh.max_age(), Some(time::Duration::seconds(2_592_000)));
/// assert!(access.http_only().unwrap_or(false));
/// assert!(access.secure().unwrap_or(false));
/// ```
pub fn set_auth_cookies(
    jar: CookieJar,
    access_token: String,
    refresh_token: String,
    opts: &CookieOptions,
) -> CookieJar {
    let access = build(
        TMTR_ACCESS_TOKEN,
        access_token,
        "/",
        ACCESS_COOKIE_MAX_AGE,
        opts,
    );
    let refresh = build(
        TMTR_REFRESH_TOKEN,
        refresh_token,
        REFRESH_COOKIE_PATH,
        REFRESH_COOKIE_MAX_AGE,
        opts,
    );
    jar.add(access).add(refresh)
}

/// Re-set only the access-token cookie (used by the refresh flow).
pub fn set_access_token_cookie(jar: CookieJar, value: String, opts: &CookieOptions) -> CookieJar {
    jar.add(build(
        TMTR_ACCESS_TOKEN,
        value,
        "/",
        ACCESS_COOKIE_MAX_AGE,
        opts,
    ))
}

/// Clear both auth cookies by setting Max-Age to 0.
///
/// ```
/// use axum_extra::extract::cookie::CookieJar;
/// use tmtr_auth_types::cookie::{
///     clear_auth_cookies, set_auth_cookies, CookieOptions,
///     TMTR_ACCESS_TOKEN, TMTR_REFRESH_TOKEN,
/// };
///
/// let opts = CookieOptions { domain: "example.com".to_string(), secure: true };
/// let jar = set_auth_cookies(CookieJar::new(), "a".to_string(), "r".to_string(), &opts);
/// let jar = clear_auth_cookies(jar, &opts);
/// assert_eq!(jar.get(TMTR_ACCESS_TOKEN).unwrap().max_age(), Some(time::Duration::ZERO));
/// assert_eq!(jar.get(TMTR_REFRESH_TOKEN).unwrap().max_age(), Some(time::Duration::ZERO));
/// ```
pub fn clear_auth_cookies(jar: CookieJar, opts: &CookieOptions) -> CookieJar {
    let access = build(TMTR_ACCESS_TOKEN, String::new(), "/", 0, opts);
    let refresh = build(
        TMTR_REFRESH_TOKEN,
        String::new(),
        REFRESH_COOKIE_PATH,
        0,
        opts,
    );
    jar.add(access).add(refresh)
}
