use tmtr_shortener::domain::types::SHORT_CODE_LEN;
use tmtr_shortener::error::ShortenerServiceError;
use tmtr_shortener::usecase::shorten::{ShortenInput, ShortenUseCase};

use crate::helpers::{MockLinkRepo, test_user_id};

fn shorten_input(url: &str) -> ShortenInput {
    ShortenInput {
        owner_id: test_user_id(),
        url: url.to_owned(),
    }
}

#[tokio::test]
async fn shorten_persists_a_mapping_under_a_six_char_code() {
    let links = MockLinkRepo::empty();
    let links_handle = links.links_handle();

    let usecase = ShortenUseCase { links };
    let out = usecase
        .execute(shorten_input("https://example.com/some/page"))
        .await
        .unwrap();

    assert_eq!(out.short_code.len(), SHORT_CODE_LEN);

    let links = links_handle.lock().unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].id, out.id);
    assert_eq!(links[0].short_code, out.short_code);
    assert_eq!(links[0].owner_id, test_user_id());
    assert_eq!(links[0].original_url, "https://example.com/some/page");
}

#[tokio::test]
async fn shorten_rejects_a_malformed_url() {
    let usecase = ShortenUseCase {
        links: MockLinkRepo::empty(),
    };
    let result = usecase.execute(shorten_input("not-a-url")).await;
    assert!(
        matches!(result, Err(ShortenerServiceError::InvalidUrl(_))),
        "expected InvalidUrl, got {result:?}"
    );
}

#[tokio::test]
async fn shorten_rejects_non_http_schemes() {
    let usecase = ShortenUseCase {
        links: MockLinkRepo::empty(),
    };
    let result = usecase.execute(shorten_input("ftp://example.com/f")).await;
    assert!(matches!(result, Err(ShortenerServiceError::InvalidUrl(_))));
}

#[tokio::test]
async fn shorten_retries_past_collisions_with_a_fresh_code() {
    let links = MockLinkRepo::colliding(2);
    let links_handle = links.links_handle();

    let usecase = ShortenUseCase { links };
    let out = usecase
        .execute(shorten_input("https://example.com"))
        .await
        .unwrap();

    // Two collisions consumed, third attempt landed.
    let links = links_handle.lock().unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].short_code, out.short_code);
}

#[tokio::test]
async fn shorten_gives_up_after_exhausting_its_attempts() {
    let links = MockLinkRepo::colliding(3);
    let links_handle = links.links_handle();

    let usecase = ShortenUseCase { links };
    let result = usecase.execute(shorten_input("https://example.com")).await;

    assert!(
        matches!(result, Err(ShortenerServiceError::ShortCodeExhausted)),
        "expected ShortCodeExhausted, got {result:?}"
    );
    assert!(links_handle.lock().unwrap().is_empty());
}
