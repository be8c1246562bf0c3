use uuid::Uuid;

use crate::domain::repository::{LinkRepository, VisitRepository};
use crate::domain::types::{RECENT_VISITS_LIMIT, Visit};
use crate::error::ShortenerServiceError;

pub struct ListVisitsInput {
    pub short_code: String,
    pub requester_id: Uuid,
}

#[derive(Debug)]
pub struct ListVisitsOutput {
    pub count: u64,
    pub recent: Vec<Visit>,
}

pub struct ListVisitsUseCase<L, V>
where
    L: LinkRepository,
    V: VisitRepository,
{
    pub links: L,
    pub visits: V,
}

impl<L, V> ListVisitsUseCase<L, V>
where
    L: LinkRepository,
    V: VisitRepository,
{
    /// Per-link visit stats, visible to the link's owner only.
    pub async fn execute(
        &self,
        input: ListVisitsInput,
    ) -> Result<ListVisitsOutput, ShortenerServiceError> {
        let link = self
            .links
            .find_by_code(&input.short_code)
            .await?
            .ok_or(ShortenerServiceError::LinkNotFound)?;

        if link.owner_id != input.requester_id {
            return Err(ShortenerServiceError::NotOwner);
        }

        let count = self.visits.count_for_link(link.id).await?;
        let recent = self
            .visits
            .recent_for_link(link.id, RECENT_VISITS_LIMIT)
            .await?;

        Ok(ListVisitsOutput { count, recent })
    }
}
