use axum::{body::Body, http::Request, http::StatusCode, middleware, Router};
use pretty_assertions::assert_eq;
use serde_json::Value;
use server::state::AppState;
use shared_types::{routes_for_role, FeatureFlags};
use std::time::Duration;
use tower::ServiceExt;

use crate::common::{self, SESSION_COOKIE};

const TUTOR_SESSION: &str = r#"{
    "session": { "id": "sess_9", "userId": "u_9" },
    "user": { "id": "u_9", "name": "Alan Turing", "email": "alan@example.com", "role": "tutor" }
}"#;

fn app(base: &str, auth_proxy: bool) -> Router {
    let state = AppState::new(base, base, Duration::from_secs(5)).unwrap();
    let flags = FeatureFlags {
        telemetry: false,
        auth_proxy,
    };
    server::openapi::api_router_with_flags(state, &flags)
        .layer(middleware::from_fn(server::auth::middleware::session_middleware))
}

/// Serve `router` on an ephemeral port for real HTTP clients.
async fn listen(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn session_endpoint_reports_signed_in_user_over_http() {
    let upstream = common::canned(200, TUTOR_SESSION).await;
    let base = listen(app(&upstream.base, false)).await;

    let body: Value = reqwest::Client::new()
        .get(format!("{base}/api/v1/session"))
        .header(reqwest::header::COOKIE, SESSION_COOKIE)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["authenticated"], true);
    assert_eq!(body["user"]["email"], "alan@example.com");
    assert_eq!(upstream.last().cookie.as_deref(), Some(SESSION_COOKIE));
}

#[tokio::test]
async fn session_navigation_follows_resolved_role() {
    let upstream = common::canned(200, TUTOR_SESSION).await;
    let base = listen(app(&upstream.base, false)).await;

    let groups: Value = reqwest::Client::new()
        .get(format!("{base}/api/v1/navigation"))
        .header(reqwest::header::COOKIE, SESSION_COOKIE)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(groups, serde_json::to_value(routes_for_role("tutor")).unwrap());
}

#[tokio::test]
async fn health_reports_degraded_when_upstream_is_down() {
    let router = app(&common::unreachable_base(), false);
    let response = router
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "degraded");
    assert!(body["auth"].as_str().unwrap().starts_with("unreachable"));
}

#[tokio::test]
async fn auth_proxy_is_absent_when_flag_is_off() {
    let upstream = common::canned(200, "{}").await;
    let response = app(&upstream.base, false)
        .oneshot(
            Request::builder()
                .uri("/api/auth/get-session")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(upstream.requests().is_empty());
}
