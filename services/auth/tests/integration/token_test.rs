use chrono::{Duration, Utc};
use uuid::Uuid;

use tmtr_auth::domain::types::{Session, SessionState};
use tmtr_auth::error::AuthServiceError;
use tmtr_auth::usecase::token::{LogoutUseCase, RefreshTokenUseCase};
use tmtr_auth_types::token::validate_access_token;

use crate::helpers::{MockSessionRepo, TEST_JWT_SECRET, test_device, test_user_id};

fn active_session() -> Session {
    Session::open(test_user_id(), test_device())
}

#[tokio::test]
async fn refresh_returns_fresh_token_for_active_session() {
    let session = active_session();
    let usecase = RefreshTokenUseCase {
        sessions: MockSessionRepo::new(vec![session.clone()]),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let out = usecase.execute(&session.refresh_token).await.unwrap();
    assert_eq!(out.user_id, session.user_id);

    let info = validate_access_token(&out.access_token, TEST_JWT_SECRET).unwrap();
    assert_eq!(info.user_id, session.user_id);
}

#[tokio::test]
async fn refresh_rejects_unknown_token() {
    let usecase = RefreshTokenUseCase {
        sessions: MockSessionRepo::empty(),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };
    let result = usecase.execute(&Uuid::new_v4().to_string()).await;
    assert!(
        matches!(result, Err(AuthServiceError::InvalidRefreshToken)),
        "expected InvalidRefreshToken, got {result:?}"
    );
}

#[tokio::test]
async fn refresh_rejects_invalidated_session() {
    let mut session = active_session();
    session.state = SessionState::Invalidated;

    let usecase = RefreshTokenUseCase {
        sessions: MockSessionRepo::new(vec![session.clone()]),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };
    let result = usecase.execute(&session.refresh_token).await;
    assert!(
        matches!(result, Err(AuthServiceError::InvalidSession)),
        "expected InvalidSession, got {result:?}"
    );
}

#[tokio::test]
async fn refresh_rejects_expired_session() {
    let mut session = active_session();
    session.expires_at = Utc::now() - Duration::seconds(1);

    let usecase = RefreshTokenUseCase {
        sessions: MockSessionRepo::new(vec![session.clone()]),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };
    let result = usecase.execute(&session.refresh_token).await;
    assert!(matches!(result, Err(AuthServiceError::InvalidSession)));
}

#[tokio::test]
async fn logout_keeps_the_row_and_flips_its_state() {
    let session = active_session();
    let sessions = MockSessionRepo::new(vec![session.clone()]);
    let sessions_handle = sessions.sessions_handle();

    let usecase = LogoutUseCase { sessions };
    usecase.execute(&session.refresh_token).await.unwrap();

    let sessions = sessions_handle.lock().unwrap();
    assert_eq!(sessions.len(), 1, "logout must not delete the session row");
    assert_eq!(sessions[0].state, SessionState::Invalidated);
}

#[tokio::test]
async fn logout_with_unknown_token_fails() {
    let usecase = LogoutUseCase {
        sessions: MockSessionRepo::empty(),
    };
    let result = usecase.execute("no-such-token").await;
    assert!(matches!(result, Err(AuthServiceError::InvalidRefreshToken)));
}

#[tokio::test]
async fn logged_out_session_cannot_refresh() {
    let session = active_session();
    let sessions = MockSessionRepo::new(vec![session.clone()]);

    let logout = LogoutUseCase {
        sessions: MockSessionRepo {
            sessions: sessions.sessions_handle(),
        },
    };
    logout.execute(&session.refresh_token).await.unwrap();

    let refresh = RefreshTokenUseCase {
        sessions,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };
    let result = refresh.execute(&session.refresh_token).await;
    assert!(
        matches!(result, Err(AuthServiceError::InvalidSession)),
        "expected InvalidSession after logout, got {result:?}"
    );
}
