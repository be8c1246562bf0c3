//! The `X-Message` response header.
//!
//! Every response carries a short human-readable status next to the numeric
//! HTTP code. Error types insert it from their display string; success
//! handlers insert it explicitly.

use axum::http::{HeaderMap, HeaderName, HeaderValue};

pub const X_MESSAGE: &str = "x-message";

/// Build a header map carrying `X-Message: <message>`.
///
/// Header values must be visible ASCII; anything else is replaced so the
/// response is never dropped over an unprintable message.
pub fn x_message(message: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    let value = HeaderValue::from_str(message)
        .unwrap_or_else(|_| HeaderValue::from_static("(unprintable message)"));
    headers.insert(HeaderName::from_static(X_MESSAGE), value);
    headers
}
