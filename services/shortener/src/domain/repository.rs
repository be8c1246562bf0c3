#![allow(async_fn_in_trait)]

use uuid::Uuid;

use crate::domain::types::{Link, Visit};
use crate::error::ShortenerServiceError;

/// Collision outcome of a link insert, so the caller can retry with a
/// fresh code without matching on error variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    CodeTaken,
}

/// Repository for short-code mappings.
pub trait LinkRepository: Send + Sync {
    /// Insert a new link. Reports `CodeTaken` when the store's unique
    /// constraint on short_code is violated.
    async fn create(&self, link: &Link) -> Result<InsertOutcome, ShortenerServiceError>;

    async fn find_by_code(&self, short_code: &str) -> Result<Option<Link>, ShortenerServiceError>;
}

/// Repository for visit records.
pub trait VisitRepository: Send + Sync {
    async fn create(&self, visit: &Visit) -> Result<(), ShortenerServiceError>;

    async fn count_for_link(&self, link_id: Uuid) -> Result<u64, ShortenerServiceError>;

    /// Most recent visits first.
    async fn recent_for_link(
        &self,
        link_id: Uuid,
        limit: u64,
    ) -> Result<Vec<Visit>, ShortenerServiceError>;
}
