use axum::extract::FromRequestParts;
use axum::http::Request;
use sea_orm::DatabaseConnection;

use tmtr_auth_types::identity::Identity;
use tmtr_shortener::state::AppState;
use tmtr_testing::auth::access_cookie_headers;
use tmtr_testing::fixture::{TEST_JWT_SECRET, test_user_id};

fn test_state() -> AppState {
    AppState {
        db: DatabaseConnection::Disconnected,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    }
}

#[tokio::test]
async fn app_state_accepts_a_valid_access_cookie() {
    let mut builder = Request::builder().method("POST").uri("/api/tmtr");
    for (name, value) in access_cookie_headers(test_user_id()).iter() {
        builder = builder.header(name, value);
    }
    let (mut parts, _body) = builder.body(()).unwrap().into_parts();

    let identity = Identity::from_request_parts(&mut parts, &test_state())
        .await
        .unwrap();
    assert_eq!(identity.user_id, test_user_id());
}

#[tokio::test]
async fn app_state_rejects_a_cookieless_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/tmtr")
        .body(())
        .unwrap();
    let (mut parts, _body) = request.into_parts();

    let response = Identity::from_request_parts(&mut parts, &test_state())
        .await
        .unwrap_err();
    assert_eq!(response.status(), axum::http::StatusCode::UNAUTHORIZED);
}
