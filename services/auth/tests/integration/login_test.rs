use tmtr_auth::domain::types::SessionState;
use tmtr_auth::error::AuthServiceError;
use tmtr_auth::usecase::login::{LoginInput, LoginUseCase};
use tmtr_auth_types::token::validate_access_token;

use crate::helpers::{
    MockSessionRepo, MockUserRepo, TEST_JWT_SECRET, TEST_PASSWORD, oauth_user, password_user,
    test_device,
};

fn login_input(email: &str, password: &str) -> LoginInput {
    LoginInput {
        email: email.to_owned(),
        password: password.to_owned(),
        device: test_device(),
    }
}

#[tokio::test]
async fn login_opens_session_and_issues_validating_token() {
    let user = password_user("a@b.com");
    let sessions = MockSessionRepo::empty();
    let sessions_handle = sessions.sessions_handle();

    let usecase = LoginUseCase {
        users: MockUserRepo::new(vec![user.clone()]),
        sessions,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };
    let out = usecase
        .execute(login_input("a@b.com", TEST_PASSWORD))
        .await
        .unwrap();

    assert_eq!(out.user_id, user.id);
    let info = validate_access_token(&out.access_token, TEST_JWT_SECRET).unwrap();
    assert_eq!(info.user_id, user.id);
    assert_eq!(info.profile_id, None);

    let sessions = sessions_handle.lock().unwrap();
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].user_id, user.id);
    assert_eq!(sessions[0].refresh_token, out.refresh_token);
    assert_eq!(sessions[0].state, SessionState::Active);
}

#[tokio::test]
async fn each_login_gets_its_own_refresh_token() {
    let user = password_user("a@b.com");
    let usecase = LoginUseCase {
        users: MockUserRepo::new(vec![user]),
        sessions: MockSessionRepo::empty(),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let first = usecase
        .execute(login_input("a@b.com", TEST_PASSWORD))
        .await
        .unwrap();
    let second = usecase
        .execute(login_input("a@b.com", TEST_PASSWORD))
        .await
        .unwrap();

    assert_ne!(first.refresh_token, second.refresh_token);
    assert_eq!(usecase.sessions.sessions_handle().lock().unwrap().len(), 2);
}

#[tokio::test]
async fn login_with_wrong_password_fails_and_opens_no_session() {
    let user = password_user("a@b.com");
    let sessions = MockSessionRepo::empty();
    let sessions_handle = sessions.sessions_handle();

    let usecase = LoginUseCase {
        users: MockUserRepo::new(vec![user]),
        sessions,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };
    let result = usecase.execute(login_input("a@b.com", "WrongPass1!")).await;

    assert!(
        matches!(result, Err(AuthServiceError::InvalidCredential)),
        "expected InvalidCredential, got {result:?}"
    );
    assert!(sessions_handle.lock().unwrap().is_empty());
}

#[tokio::test]
async fn login_with_unknown_email_fails() {
    let usecase = LoginUseCase {
        users: MockUserRepo::empty(),
        sessions: MockSessionRepo::empty(),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };
    let result = usecase
        .execute(login_input("nobody@b.com", TEST_PASSWORD))
        .await;
    assert!(matches!(result, Err(AuthServiceError::UserNotFound)));
}

#[tokio::test]
async fn oauth_only_account_cannot_log_in_with_a_password() {
    let user = oauth_user("bob@b.com");
    let usecase = LoginUseCase {
        users: MockUserRepo::new(vec![user]),
        sessions: MockSessionRepo::empty(),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };
    let result = usecase
        .execute(login_input("bob@b.com", TEST_PASSWORD))
        .await;
    assert!(
        matches!(result, Err(AuthServiceError::InvalidCredential)),
        "expected InvalidCredential, got {result:?}"
    );
}
