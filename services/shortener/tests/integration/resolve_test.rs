use tmtr_shortener::domain::repository::VisitRepository;
use tmtr_shortener::domain::types::Visit;
use tmtr_shortener::error::ShortenerServiceError;
use tmtr_shortener::usecase::resolve::ResolveUseCase;
use tmtr_shortener::usecase::shorten::{ShortenInput, ShortenUseCase};

use crate::helpers::{MockLinkRepo, MockVisitRepo, test_device, test_user_id};

#[tokio::test]
async fn resolving_a_shortened_url_returns_the_original() {
    let links = MockLinkRepo::empty();
    let links_handle = links.links_handle();

    let shorten = ShortenUseCase { links };
    let out = shorten
        .execute(ShortenInput {
            owner_id: test_user_id(),
            url: "https://example.com/landing".to_owned(),
        })
        .await
        .unwrap();

    let resolve = ResolveUseCase {
        links: MockLinkRepo::sharing(links_handle),
    };
    let link = resolve.execute(&out.short_code).await.unwrap();
    assert_eq!(link.original_url, "https://example.com/landing");
    assert_eq!(link.id, out.id);
}

#[tokio::test]
async fn unknown_code_is_not_found() {
    let resolve = ResolveUseCase {
        links: MockLinkRepo::empty(),
    };
    let result = resolve.execute("zzzzzz").await;
    assert!(
        matches!(result, Err(ShortenerServiceError::LinkNotFound)),
        "expected LinkNotFound, got {result:?}"
    );
}

#[tokio::test]
async fn recording_a_resolution_adds_exactly_one_visit_row() {
    let link = crate::helpers::owned_link(test_user_id(), "https://example.com");
    let visits = MockVisitRepo::empty();
    let visits_handle = visits.visits_handle();

    let visit = Visit::record(link.id, &test_device());
    visits.create(&visit).await.unwrap();

    let visits = visits_handle.lock().unwrap();
    assert_eq!(visits.len(), 1);
    assert_eq!(visits[0].link_id, link.id);
    assert_eq!(visits[0].browser.as_deref(), Some("Chrome"));
    assert_eq!(visits[0].os.as_deref(), Some("macOS"));
}
