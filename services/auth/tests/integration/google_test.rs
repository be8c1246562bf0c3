use tmtr_auth::error::AuthServiceError;
use tmtr_auth::usecase::google::{GoogleSigninInput, GoogleSigninUseCase};
use tmtr_auth_types::token::validate_access_token;

use crate::helpers::{
    MockGoogle, MockMail, MockSessionRepo, MockUserRepo, TEST_JWT_SECRET, google_profile,
    oauth_user, test_device,
};

fn signin_input() -> GoogleSigninInput {
    GoogleSigninInput {
        bearer_token: "ya29.test-bearer".to_owned(),
        device: test_device(),
    }
}

#[tokio::test]
async fn first_signin_creates_account_session_and_welcome_mail() {
    let users = MockUserRepo::empty();
    let sessions = MockSessionRepo::empty();
    let mail = MockMail::working();
    let (users_handle, sessions_handle, sent_handle) = (
        users.users_handle(),
        sessions.sessions_handle(),
        mail.sent_handle(),
    );

    let usecase = GoogleSigninUseCase {
        users,
        sessions,
        google: MockGoogle::with_profile(google_profile("bob@b.com")),
        mail,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };
    let out = usecase.execute(signin_input()).await.unwrap();

    assert!(out.is_signup);
    let info = validate_access_token(&out.access_token, TEST_JWT_SECRET).unwrap();
    assert_eq!(info.user_id, out.user_id);

    let users = users_handle.lock().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].email, "bob@b.com");
    assert!(users[0].password_hash.is_none());
    assert!(users[0].email_verified);

    assert_eq!(sessions_handle.lock().unwrap().len(), 1);

    let sent = sent_handle.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "bob@b.com");
}

#[tokio::test]
async fn signin_for_existing_email_reuses_the_account() {
    let existing = oauth_user("bob@b.com");
    let users = MockUserRepo::new(vec![existing.clone()]);
    let mail = MockMail::working();
    let (users_handle, sent_handle) = (users.users_handle(), mail.sent_handle());

    let usecase = GoogleSigninUseCase {
        users,
        sessions: MockSessionRepo::empty(),
        google: MockGoogle::with_profile(google_profile("bob@b.com")),
        mail,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };
    let out = usecase.execute(signin_input()).await.unwrap();

    assert!(!out.is_signup);
    assert_eq!(out.user_id, existing.id);
    assert_eq!(users_handle.lock().unwrap().len(), 1);
    // No welcome mail for a returning account.
    assert!(sent_handle.lock().unwrap().is_empty());
}

#[tokio::test]
async fn repeated_signins_never_duplicate_the_account() {
    let users = MockUserRepo::empty();
    let users_handle = users.users_handle();

    let usecase = GoogleSigninUseCase {
        users,
        sessions: MockSessionRepo::empty(),
        google: MockGoogle::with_profile(google_profile("bob@b.com")),
        mail: MockMail::working(),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let first = usecase.execute(signin_input()).await.unwrap();
    let second = usecase.execute(signin_input()).await.unwrap();

    assert!(first.is_signup);
    assert!(!second.is_signup);
    assert_eq!(first.user_id, second.user_id);
    assert_eq!(users_handle.lock().unwrap().len(), 1);
    // Each signin still opens its own session.
    assert_ne!(first.refresh_token, second.refresh_token);
}

#[tokio::test]
async fn rejected_bearer_token_creates_nothing() {
    let users = MockUserRepo::empty();
    let sessions = MockSessionRepo::empty();
    let (users_handle, sessions_handle) = (users.users_handle(), sessions.sessions_handle());

    let usecase = GoogleSigninUseCase {
        users,
        sessions,
        google: MockGoogle::rejecting(),
        mail: MockMail::working(),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };
    let result = usecase.execute(signin_input()).await;

    assert!(
        matches!(result, Err(AuthServiceError::GoogleRejected)),
        "expected GoogleRejected, got {result:?}"
    );
    assert!(users_handle.lock().unwrap().is_empty());
    assert!(sessions_handle.lock().unwrap().is_empty());
}

#[tokio::test]
async fn signup_succeeds_even_when_welcome_mail_fails() {
    let users = MockUserRepo::empty();
    let users_handle = users.users_handle();

    let usecase = GoogleSigninUseCase {
        users,
        sessions: MockSessionRepo::empty(),
        google: MockGoogle::with_profile(google_profile("bob@b.com")),
        mail: MockMail::failing(),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };
    let out = usecase.execute(signin_input()).await.unwrap();

    assert!(out.is_signup);
    assert_eq!(users_handle.lock().unwrap().len(), 1);
}
