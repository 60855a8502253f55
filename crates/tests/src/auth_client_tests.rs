use axum::http::Method;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use shared_types::{SetRoleRequest, SignInRequest, SignUpRequest, UserRole};

use crate::common::{self, SESSION_COOKIE};

const ISSUED_COOKIE: &str = "better-auth.session_token=tok_new; Path=/; HttpOnly; SameSite=Lax";

fn sign_in_request() -> SignInRequest {
    SignInRequest {
        email: "ada@example.com".to_string(),
        password: "correct-horse".to_string(),
    }
}

#[tokio::test]
async fn sign_in_collects_set_cookie() {
    let upstream = common::canned_with_cookie(
        200,
        r#"{"token":"tok_new","user":{"id":"u_1","name":"Ada","email":"ada@example.com","role":"student"}}"#,
        ISSUED_COOKIE,
    )
    .await;

    let outcome = common::auth_client(&upstream.base)
        .sign_in_email(&sign_in_request())
        .await;

    assert!(outcome.result.success);
    assert_eq!(outcome.set_cookies, vec![ISSUED_COOKIE.to_string()]);
    assert_eq!(outcome.result.data.unwrap()["user"]["id"], "u_1");

    let seen = upstream.last();
    assert_eq!(seen.method, Method::POST);
    assert_eq!(seen.path, "/sign-in/email");
    assert_eq!(seen.cookie, None);
    let body: Value = serde_json::from_str(&seen.body).unwrap();
    assert_eq!(body, json!({ "email": "ada@example.com", "password": "correct-horse" }));
}

#[tokio::test]
async fn sign_in_rejection_surfaces_message() {
    let upstream = common::canned(
        401,
        r#"{"code":"INVALID_EMAIL_OR_PASSWORD","message":"Invalid email or password"}"#,
    )
    .await;

    let outcome = common::auth_client(&upstream.base)
        .sign_in_email(&sign_in_request())
        .await;

    assert!(!outcome.result.success);
    assert_eq!(outcome.result.message.as_deref(), Some("Invalid email or password"));
    assert!(outcome.set_cookies.is_empty());
}

#[tokio::test]
async fn sign_up_posts_to_sign_up_endpoint() {
    let upstream = common::canned(200, r#"{"user":{"id":"u_2","name":"Bo","email":"bo@example.com"}}"#).await;
    let outcome = common::auth_client(&upstream.base)
        .sign_up_email(&SignUpRequest {
            name: "Bo".to_string(),
            email: "bo@example.com".to_string(),
            password: "long enough".to_string(),
        })
        .await;

    assert!(outcome.result.success);
    assert_eq!(upstream.last().path, "/sign-up/email");
}

#[tokio::test]
async fn sign_out_forwards_cookie_and_relays_clearing_cookie() {
    let cleared = "better-auth.session_token=; Max-Age=0; Path=/";
    let upstream = common::canned_with_cookie(200, r#"{"success":true}"#, cleared).await;

    let outcome = common::auth_client(&upstream.base)
        .sign_out(&common::signed_in())
        .await;

    assert!(outcome.result.success);
    assert_eq!(outcome.set_cookies, vec![cleared.to_string()]);

    let seen = upstream.last();
    assert_eq!(seen.path, "/sign-out");
    assert_eq!(seen.cookie.as_deref(), Some(SESSION_COOKIE));
}

#[tokio::test]
async fn sign_out_without_auth_service_fails_softly() {
    let outcome = common::auth_client(&common::unreachable_base())
        .sign_out(&common::signed_in())
        .await;
    assert!(!outcome.result.success);
    assert!(outcome.result.message.is_some());
}

#[tokio::test]
async fn list_users_parses_listing() {
    let upstream = common::canned(
        200,
        r#"{"users":[
            {"id":"u_1","name":"Ada","email":"ada@example.com","role":"admin"},
            {"id":"u_2","name":"Bo","email":"bo@example.com","role":null}
        ],"total":2}"#,
    )
    .await;

    let result = common::auth_client(&upstream.base)
        .list_users(&common::signed_in())
        .await;

    let list = result.data.unwrap();
    assert_eq!(list.total, 2);
    assert_eq!(list.users[0].role(), UserRole::Admin);
    assert_eq!(list.users[1].role(), UserRole::Unknown);
    assert_eq!(upstream.last().path, "/admin/list-users");
}

#[tokio::test]
async fn set_role_sends_lowercase_role() {
    let upstream = common::canned(200, r#"{"user":{"id":"u_2"}}"#).await;

    let result = common::auth_client(&upstream.base)
        .set_role(
            &common::signed_in(),
            &SetRoleRequest {
                user_id: "u_2".to_string(),
                role: UserRole::Tutor,
            },
        )
        .await;

    assert!(result.success);
    let body: Value = serde_json::from_str(&upstream.last().body).unwrap();
    assert_eq!(body["role"], "tutor");
}

#[tokio::test]
async fn set_role_forbidden_reports_failure() {
    let upstream = common::canned(403, "").await;
    let result = common::auth_client(&upstream.base)
        .set_role(
            &common::signed_in(),
            &SetRoleRequest {
                user_id: "u_2".to_string(),
                role: UserRole::Tutor,
            },
        )
        .await;

    assert!(!result.success);
    assert_eq!(
        result.message.as_deref(),
        Some("Failed to update user role: 403 Forbidden")
    );
}
