use axum::{
    body::Body,
    extract::Query,
    http::{header, HeaderMap, Request, StatusCode},
    middleware,
    response::IntoResponse,
    routing::{self, post},
    Json, Router,
};
use serde_json::{json, Value};
use server::state::AppState;
use shared_types::FeatureFlags;
use std::collections::HashMap;
use std::time::Duration;
use tower::ServiceExt;

/// Cookie the mock auth service accepts, one per role.
#[allow(dead_code)]
pub fn session_cookie(role: &str) -> String {
    format!("better-auth.session_token=valid-{role}")
}

fn role_from_cookie(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    raw.split(';')
        .filter_map(|p| p.trim().strip_prefix("better-auth.session_token=valid-"))
        .next()
        .map(str::to_string)
}

async fn mock_get_session(headers: HeaderMap) -> impl IntoResponse {
    match role_from_cookie(&headers) {
        Some(role) if role == "broken" => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
        Some(role) => Json(json!({
            "session": { "id": "sess_1", "expiresAt": "2030-01-01T00:00:00Z" },
            "user": {
                "id": format!("user_{role}"),
                "name": "Grace Hopper",
                "email": "grace@example.com",
                "role": role
            }
        }))
        .into_response(),
        None => Json(Value::Null).into_response(),
    }
}

async fn mock_sign_in(
    Query(query): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    if body["password"] != "correct-horse" {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "code": "INVALID_EMAIL_OR_PASSWORD", "message": "Invalid email or password" })),
        )
            .into_response();
    }
    let echo = query.get("echo").cloned().unwrap_or_default();
    (
        [(header::SET_COOKIE, "better-auth.session_token=valid-student; Path=/; HttpOnly")],
        Json(json!({
            "token": "t",
            "echo": echo,
            "user": { "id": "user_student", "name": "Grace Hopper", "email": body["email"], "role": "student" }
        })),
    )
        .into_response()
}

/// Mock of the auth service, mounted under `/api/auth`.
fn mock_auth() -> Router {
    Router::new()
        .route("/api/auth/get-session", routing::get(mock_get_session))
        .route("/api/auth/sign-in/email", post(mock_sign_in))
}

/// Spawn the mock on an ephemeral port and return its base URL.
pub async fn spawn_mock_upstream() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, mock_auth()).await.unwrap();
    });
    format!("http://{addr}")
}

/// A base URL nothing listens on.
#[allow(dead_code)]
pub async fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

#[allow(dead_code)]
pub fn state_for(base: &str) -> AppState {
    AppState::new(
        &format!("{base}/api/auth"),
        &format!("{base}/api/v1"),
        Duration::from_secs(5),
    )
    .unwrap()
}

/// Build the REST router against the given upstream, with the session
/// middleware and the auth proxy enabled.
#[allow(dead_code)]
pub fn test_app(base: &str) -> Router {
    let flags = FeatureFlags {
        telemetry: false,
        auth_proxy: true,
    };
    server::openapi::api_router_with_flags(state_for(base), &flags)
        .layer(middleware::from_fn(server::auth::middleware::session_middleware))
}

#[allow(dead_code)]
/// Helper to make a GET request and return (status, body).
pub async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    get_with_cookie(app, uri, None).await
}

#[allow(dead_code)]
/// Helper to make a GET request carrying a Cookie header.
pub async fn get_with_cookie(app: &Router, uri: &str, cookie: Option<&str>) -> (StatusCode, String) {
    let mut builder = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let response = app
        .clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[allow(dead_code)]
/// Helper to make a POST request with JSON body, returning the raw response.
pub async fn post_json(app: &Router, uri: &str, json: &str) -> axum::response::Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}
