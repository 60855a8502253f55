use server::auth::cookies::Credentials;
use shared_types::{AppErrorKind, SessionState, UserRole};

use crate::common::{self, SESSION_COOKIE};

const VALID_SESSION: &str = r#"{
    "session": { "id": "sess_1", "userId": "u_1" },
    "user": { "id": "u_1", "name": "Ada Lovelace", "email": "ada@example.com", "role": "Student" }
}"#;

#[tokio::test]
async fn valid_session_resolves_user() {
    let upstream = common::canned(200, VALID_SESSION).await;
    let state = common::resolver(&upstream.base)
        .resolve(&common::signed_in())
        .await;

    assert!(state.authenticated);
    let user = state.user.unwrap();
    assert_eq!(user.id, "u_1");
    assert_eq!(user.role(), UserRole::Student);

    let seen = upstream.last();
    assert_eq!(seen.path, "/get-session");
    assert_eq!(seen.cookie.as_deref(), Some(SESSION_COOKIE));
}

#[tokio::test]
async fn null_session_is_anonymous() {
    let upstream = common::canned(200, "null").await;
    let state = common::resolver(&upstream.base)
        .resolve(&common::signed_in())
        .await;
    assert_eq!(state, SessionState::anonymous());
}

#[tokio::test]
async fn error_payload_is_anonymous() {
    let upstream = common::canned(
        200,
        r#"{"error":{"message":"Session expired"},"user":{"id":"u_1","name":"A","email":"a@b.c"}}"#,
    )
    .await;
    let state = common::resolver(&upstream.base)
        .resolve(&common::signed_in())
        .await;
    assert!(!state.authenticated);
    assert!(state.user.is_none());
}

#[tokio::test]
async fn auth_service_failure_is_anonymous() {
    let upstream = common::canned(500, "").await;
    let state = common::resolver(&upstream.base)
        .resolve(&common::signed_in())
        .await;
    assert_eq!(state, SessionState::anonymous());

    let state = common::resolver(&common::unreachable_base())
        .resolve(&common::signed_in())
        .await;
    assert_eq!(state, SessionState::anonymous());
}

#[tokio::test]
async fn no_cookies_makes_no_call() {
    let upstream = common::canned(200, VALID_SESSION).await;
    let state = common::resolver(&upstream.base)
        .resolve(&Credentials::none())
        .await;

    assert_eq!(state, SessionState::anonymous());
    assert!(upstream.requests().is_empty());
}

#[tokio::test]
async fn anonymous_state_serializes_without_user() {
    let upstream = common::canned(401, r#"{"message":"Unauthorized"}"#).await;
    let state = common::resolver(&upstream.base)
        .resolve(&common::signed_in())
        .await;
    assert_eq!(
        serde_json::to_string(&state).unwrap(),
        r#"{"authenticated":false}"#
    );
}

#[tokio::test]
async fn require_user_rejects_anonymous_request() {
    let upstream = common::canned(200, "null").await;
    let err = common::resolver(&upstream.base)
        .require_user(&common::signed_in())
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
}

#[tokio::test]
async fn require_role_accepts_matching_role() {
    let upstream = common::canned(200, VALID_SESSION).await;
    let user = common::resolver(&upstream.base)
        .require_role(&common::signed_in(), UserRole::Student)
        .await
        .unwrap();
    assert_eq!(user.id, "u_1");
}
