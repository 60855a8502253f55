use pretty_assertions::assert_eq;
use server::auth::cookies::Credentials;
use server::services::admin;
use server::state::AppState;
use shared_types::{AppErrorKind, SetRoleRequest, UserRole};
use std::time::Duration;

use crate::common;

fn session_for(role: &str) -> String {
    format!(
        r#"{{"session":{{"id":"sess_1","userId":"u_1"}},"user":{{"id":"u_1","name":"Ada","email":"ada@example.com","role":"{role}"}}}}"#
    )
}

fn state(base: &str) -> AppState {
    AppState::new(base, base, Duration::from_secs(5)).unwrap()
}

fn promote_to_tutor() -> SetRoleRequest {
    SetRoleRequest {
        user_id: "u_2".to_string(),
        role: UserRole::Tutor,
    }
}

fn paths(upstream: &common::Upstream) -> Vec<String> {
    upstream.requests().into_iter().map(|r| r.path).collect()
}

#[tokio::test]
async fn student_cannot_change_roles() {
    let upstream = common::canned(200, &session_for("student")).await;

    let err = admin::set_role(&state(&upstream.base), &common::signed_in(), &promote_to_tutor())
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Forbidden);
    assert_eq!(paths(&upstream), vec!["/get-session".to_string()]);
}

#[tokio::test]
async fn tutor_cannot_list_users() {
    let upstream = common::canned(200, &session_for("tutor")).await;

    let err = admin::list_users(&state(&upstream.base), &common::signed_in())
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Forbidden);
    assert_eq!(paths(&upstream), vec!["/get-session".to_string()]);
}

#[tokio::test]
async fn anonymous_caller_is_unauthorized_without_upstream_calls() {
    let upstream = common::canned(200, &session_for("admin")).await;

    let err = admin::set_role(&state(&upstream.base), &Credentials::none(), &promote_to_tutor())
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert!(upstream.requests().is_empty());
}

#[tokio::test]
async fn admin_role_change_reaches_auth_service() {
    let upstream = common::canned(200, &session_for("admin")).await;

    let result = admin::set_role(&state(&upstream.base), &common::signed_in(), &promote_to_tutor())
        .await
        .unwrap();

    assert!(result.success);
    assert_eq!(
        paths(&upstream),
        vec!["/get-session".to_string(), "/admin/set-role".to_string()]
    );
}

#[tokio::test]
async fn blank_user_id_is_rejected_before_session_check() {
    let upstream = common::canned(200, &session_for("admin")).await;
    let request = SetRoleRequest {
        user_id: "  ".to_string(),
        role: UserRole::Tutor,
    };

    let err = admin::set_role(&state(&upstream.base), &common::signed_in(), &request)
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::BadRequest);
    assert!(upstream.requests().is_empty());
}
