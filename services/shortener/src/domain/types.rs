use chrono::{DateTime, Utc};
use rand::RngExt;
use uuid::Uuid;

use tmtr_core::device::DeviceInfo;

use crate::error::ShortenerServiceError;

/// Short-code to original-URL mapping.
#[derive(Debug, Clone)]
pub struct Link {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub short_code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    pub fn new(owner_id: Uuid, original_url: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id,
            short_code: generate_short_code(),
            original_url,
            created_at: Utc::now(),
        }
    }
}

/// One recorded resolution of a short code.
#[derive(Debug, Clone)]
pub struct Visit {
    pub id: Uuid,
    pub link_id: Uuid,
    pub browser: Option<String>,
    pub os: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Visit {
    pub fn record(link_id: Uuid, device: &DeviceInfo) -> Self {
        Self {
            id: Uuid::new_v4(),
            link_id,
            browser: device.browser.clone(),
            os: device.os.clone(),
            created_at: Utc::now(),
        }
    }
}

/// Short-code length in characters.
pub const SHORT_CODE_LEN: usize = 6;

/// How many fresh codes to try when the store reports a collision.
pub const SHORT_CODE_ATTEMPTS: usize = 3;

/// How many recent visits the stats endpoint returns.
pub const RECENT_VISITS_LIMIT: u64 = 50;

const SHORT_CODE_ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

pub fn generate_short_code() -> String {
    let mut rng = rand::rng();
    (0..SHORT_CODE_LEN)
        .map(|_| char::from(SHORT_CODE_ALPHABET[rng.random_range(0..SHORT_CODE_ALPHABET.len())]))
        .collect()
}

/// Accept only absolute http(s) URLs as shorten targets.
pub fn validate_url(raw: &str) -> Result<url::Url, ShortenerServiceError> {
    let parsed = url::Url::parse(raw)
        .map_err(|_| ShortenerServiceError::InvalidUrl("url is malformed".to_owned()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(ShortenerServiceError::InvalidUrl(format!(
            "unsupported url scheme: {other}"
        ))),
    }
}
