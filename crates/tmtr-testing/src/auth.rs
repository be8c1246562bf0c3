//! Cookie helpers for authenticated test requests.

use axum::http::{HeaderMap, HeaderName, HeaderValue};
use uuid::Uuid;

use tmtr_auth_types::cookie::TMTR_ACCESS_TOKEN;
use tmtr_auth_types::token::issue_access_token;

use crate::fixture::TEST_JWT_SECRET;

/// Build a `Cookie` header carrying a freshly issued access token for
/// `user_id`, signed with [`TEST_JWT_SECRET`].
pub fn access_cookie_headers(user_id: Uuid) -> HeaderMap {
    let (token, _) =
        issue_access_token(user_id, None, TEST_JWT_SECRET).expect("issue test token");
    let mut map = HeaderMap::new();
    map.insert(
        HeaderName::from_static("cookie"),
        HeaderValue::from_str(&format!("{TMTR_ACCESS_TOKEN}={token}")).unwrap(),
    );
    map
}
