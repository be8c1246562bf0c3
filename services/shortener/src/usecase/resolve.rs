use crate::domain::repository::LinkRepository;
use crate::domain::types::Link;
use crate::error::ShortenerServiceError;

pub struct ResolveUseCase<L: LinkRepository> {
    pub links: L,
}

impl<L: LinkRepository> ResolveUseCase<L> {
    /// Look up the link behind a short code. Visit recording is the
    /// handler's concern; resolution itself never writes.
    pub async fn execute(&self, short_code: &str) -> Result<Link, ShortenerServiceError> {
        self.links
            .find_by_code(short_code)
            .await?
            .ok_or(ShortenerServiceError::LinkNotFound)
    }
}
