use uuid::Uuid;

use crate::domain::repository::{InsertOutcome, LinkRepository};
use crate::domain::types::{Link, SHORT_CODE_ATTEMPTS, validate_url};
use crate::error::ShortenerServiceError;

pub struct ShortenInput {
    pub owner_id: Uuid,
    pub url: String,
}

#[derive(Debug)]
pub struct ShortenOutput {
    pub id: Uuid,
    pub short_code: String,
}

pub struct ShortenUseCase<L: LinkRepository> {
    pub links: L,
}

impl<L: LinkRepository> ShortenUseCase<L> {
    /// Validate the target URL and persist a mapping under a fresh code.
    ///
    /// A short-code collision gets a fresh code and another insert, up to
    /// [`SHORT_CODE_ATTEMPTS`] tries, then surfaces as a conflict.
    pub async fn execute(&self, input: ShortenInput) -> Result<ShortenOutput, ShortenerServiceError> {
        let url = validate_url(&input.url)?;

        for _ in 0..SHORT_CODE_ATTEMPTS {
            let link = Link::new(input.owner_id, url.to_string());
            match self.links.create(&link).await? {
                InsertOutcome::Inserted => {
                    return Ok(ShortenOutput {
                        id: link.id,
                        short_code: link.short_code,
                    });
                }
                InsertOutcome::CodeTaken => {
                    tracing::debug!(short_code = %link.short_code, "short code collision, retrying");
                }
            }
        }
        Err(ShortenerServiceError::ShortCodeExhausted)
    }
}
