use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, SqlErr,
};
use uuid::Uuid;

use tmtr_shortener_schema::{links, visits};

use crate::domain::repository::{InsertOutcome, LinkRepository, VisitRepository};
use crate::domain::types::{Link, Visit};
use crate::error::ShortenerServiceError;

// ── Link repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbLinkRepository {
    pub db: DatabaseConnection,
}

impl LinkRepository for DbLinkRepository {
    async fn create(&self, link: &Link) -> Result<InsertOutcome, ShortenerServiceError> {
        let result = links::ActiveModel {
            id: Set(link.id),
            owner_id: Set(link.owner_id),
            short_code: Set(link.short_code.clone()),
            original_url: Set(link.original_url.clone()),
            created_at: Set(link.created_at),
        }
        .insert(&self.db)
        .await;

        match result {
            Ok(_) => Ok(InsertOutcome::Inserted),
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Ok(InsertOutcome::CodeTaken)
            }
            Err(e) => Err(anyhow::Error::new(e).context("create link").into()),
        }
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<Link>, ShortenerServiceError> {
        let model = links::Entity::find()
            .filter(links::Column::ShortCode.eq(short_code))
            .one(&self.db)
            .await
            .context("find link by short code")?;
        Ok(model.map(link_from_model))
    }
}

fn link_from_model(model: links::Model) -> Link {
    Link {
        id: model.id,
        owner_id: model.owner_id,
        short_code: model.short_code,
        original_url: model.original_url,
        created_at: model.created_at,
    }
}

// ── Visit repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbVisitRepository {
    pub db: DatabaseConnection,
}

impl VisitRepository for DbVisitRepository {
    async fn create(&self, visit: &Visit) -> Result<(), ShortenerServiceError> {
        visits::ActiveModel {
            id: Set(visit.id),
            link_id: Set(visit.link_id),
            browser: Set(visit.browser.clone()),
            os: Set(visit.os.clone()),
            created_at: Set(visit.created_at),
        }
        .insert(&self.db)
        .await
        .context("create visit")?;
        Ok(())
    }

    async fn count_for_link(&self, link_id: Uuid) -> Result<u64, ShortenerServiceError> {
        let count = visits::Entity::find()
            .filter(visits::Column::LinkId.eq(link_id))
            .count(&self.db)
            .await
            .context("count visits")?;
        Ok(count)
    }

    async fn recent_for_link(
        &self,
        link_id: Uuid,
        limit: u64,
    ) -> Result<Vec<Visit>, ShortenerServiceError> {
        let models = visits::Entity::find()
            .filter(visits::Column::LinkId.eq(link_id))
            .order_by_desc(visits::Column::CreatedAt)
            .limit(limit)
            .all(&self.db)
            .await
            .context("list recent visits")?;
        Ok(models.into_iter().map(visit_from_model).collect())
    }
}

fn visit_from_model(model: visits::Model) -> Visit {
    Visit {
        id: model.id,
        link_id: model.link_id,
        browser: model.browser,
        os: model.os,
        created_at: model.created_at,
    }
}
