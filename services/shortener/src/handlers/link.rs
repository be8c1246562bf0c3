use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header::LOCATION},
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tmtr_auth_types::identity::Identity;
use tmtr_core::device::DeviceInfo;
use tmtr_core::message::x_message;
use tmtr_core::serde::to_rfc3339_ms;

use crate::domain::repository::VisitRepository;
use crate::domain::types::Visit;
use crate::error::ShortenerServiceError;
use crate::state::AppState;
use crate::usecase::resolve::ResolveUseCase;
use crate::usecase::shorten::{ShortenInput, ShortenUseCase};
use crate::usecase::visits::{ListVisitsInput, ListVisitsUseCase};

// ── POST /api/tmtr ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ShortenRequest {
    pub url: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub id: uuid::Uuid,
    pub short_code: String,
}

pub async fn shorten(
    State(state): State<AppState>,
    identity: Identity,
    Json(body): Json<ShortenRequest>,
) -> Result<impl IntoResponse, ShortenerServiceError> {
    let usecase = ShortenUseCase {
        links: state.link_repo(),
    };
    let out = usecase
        .execute(ShortenInput {
            owner_id: identity.user_id,
            url: body.url,
        })
        .await?;

    let body = ShortenResponse {
        id: out.id,
        short_code: out.short_code,
    };
    Ok((StatusCode::CREATED, x_message("link created"), Json(body)))
}

// ── GET /api/tmtr/{code} ─────────────────────────────────────────────────────

/// Redirect to the original URL, recording the visit as a spawned task so
/// a slow or failed insert never delays the redirect.
pub async fn resolve(
    State(state): State<AppState>,
    device: DeviceInfo,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, ShortenerServiceError> {
    let usecase = ResolveUseCase {
        links: state.link_repo(),
    };
    let link = usecase.execute(&code).await?;

    let visits = state.visit_repo();
    let visit = Visit::record(link.id, &device);
    tokio::spawn(async move {
        if let Err(e) = visits.create(&visit).await {
            tracing::warn!(error = %e, link_id = %visit.link_id, "visit record failed");
        }
    });

    Ok((
        StatusCode::FOUND,
        [(LOCATION, link.original_url)],
        x_message("redirecting"),
    ))
}

// ── GET /api/tmtr/{code}/visits ──────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitResponse {
    pub browser: Option<String>,
    pub os: Option<String>,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub visited_at: DateTime<Utc>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListVisitsResponse {
    pub count: u64,
    pub visits: Vec<VisitResponse>,
}

pub async fn list_visits(
    State(state): State<AppState>,
    identity: Identity,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, ShortenerServiceError> {
    let usecase = ListVisitsUseCase {
        links: state.link_repo(),
        visits: state.visit_repo(),
    };
    let out = usecase
        .execute(ListVisitsInput {
            short_code: code,
            requester_id: identity.user_id,
        })
        .await?;

    let body = ListVisitsResponse {
        count: out.count,
        visits: out
            .recent
            .into_iter()
            .map(|v| VisitResponse {
                browser: v.browser,
                os: v.os,
                visited_at: v.created_at,
            })
            .collect(),
    };
    Ok((StatusCode::OK, x_message("visits listed"), Json(body)))
}
