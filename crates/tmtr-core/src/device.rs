//! Device descriptor parsed from the `User-Agent` request header.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

/// Browser/OS descriptor persisted with sessions and shortener visits.
///
/// All fields are best-effort: an absent or unrecognized `User-Agent`
/// yields `None`s, never a request failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceInfo {
    pub browser: Option<String>,
    pub browser_version: Option<String>,
    pub os: Option<String>,
    pub os_version: Option<String>,
}

impl DeviceInfo {
    /// Parse a raw `User-Agent` string.
    pub fn parse(user_agent: &str) -> Self {
        let (browser, browser_version) = parse_browser(user_agent);
        let (os, os_version) = parse_os(user_agent);
        Self {
            browser,
            browser_version,
            os,
            os_version,
        }
    }
}

/// Extract the version token following `product` in a UA string.
///
/// Accepts `_` as a separator since Apple platforms write versions as
/// `10_15_7`; callers normalize it to `.`.
fn product_version(ua: &str, product: &str) -> Option<String> {
    let start = ua.find(product)? + product.len();
    let rest = &ua[start..];
    let version: String = rest
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.' || *c == '_')
        .collect();
    (!version.is_empty()).then_some(version)
}

fn parse_browser(ua: &str) -> (Option<String>, Option<String>) {
    // Order matters: Chromium forks embed "Chrome/", and everything
    // embeds "Safari/".
    for (needle, name) in [
        ("Edg/", "Edge"),
        ("OPR/", "Opera"),
        ("Firefox/", "Firefox"),
        ("Chrome/", "Chrome"),
    ] {
        if ua.contains(needle) {
            return (Some(name.to_owned()), product_version(ua, needle));
        }
    }
    if ua.contains("Safari/") {
        return (Some("Safari".to_owned()), product_version(ua, "Version/"));
    }
    (None, None)
}

fn parse_os(ua: &str) -> (Option<String>, Option<String>) {
    if ua.contains("Windows NT ") {
        return (
            Some("Windows".to_owned()),
            product_version(ua, "Windows NT "),
        );
    }
    if ua.contains("Android ") {
        return (Some("Android".to_owned()), product_version(ua, "Android "));
    }
    if ua.contains("iPhone OS ") || ua.contains("CPU OS ") {
        let raw = product_version(ua, "iPhone OS ").or_else(|| product_version(ua, "CPU OS "));
        return (Some("iOS".to_owned()), raw.map(|v| v.replace('_', ".")));
    }
    if ua.contains("Mac OS X ") {
        let raw = product_version(ua, "Mac OS X ");
        return (Some("macOS".to_owned()), raw.map(|v| v.replace('_', ".")));
    }
    if ua.contains("Linux") {
        return (Some("Linux".to_owned()), None);
    }
    (None, None)
}

impl<S> FromRequestParts<S> for DeviceInfo
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let info = parts
            .headers
            .get(axum::http::header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .map(DeviceInfo::parse)
            .unwrap_or_default();
        async move { Ok(info) }
    }
}
