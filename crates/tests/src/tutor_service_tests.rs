use axum::http::Method;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use server::services::tutors;
use shared_types::{CreateTutorProfileRequest, ServiceResult, UpdateTutorProfileRequest};

use crate::common::{self, SESSION_COOKIE};

fn create_request() -> CreateTutorProfileRequest {
    CreateTutorProfileRequest {
        bio: "Ten years of teaching algebra and calculus.".to_string(),
        hourly_rate: 40.0,
        experience_years: 10,
        education: Some("MSc Mathematics".to_string()),
        category_ids: vec!["math".to_string()],
    }
}

fn update_request() -> UpdateTutorProfileRequest {
    UpdateTutorProfileRequest {
        hourly_rate: Some(45.0),
        ..Default::default()
    }
}

/// Run every tutor service function against `base` and collect the
/// outcomes as `(operation, success, message)`.
async fn call_all(base: &str) -> Vec<(&'static str, bool, Option<String>)> {
    let api = common::client(base);
    let creds = common::signed_in();

    fn flat<T>(name: &'static str, r: ServiceResult<T>) -> (&'static str, bool, Option<String>) {
        (name, r.success, r.message)
    }

    vec![
        flat("check_eligibility", tutors::check_eligibility(&api, &creds).await),
        flat("get_categories", tutors::get_categories(&api, &creds).await),
        flat("create_profile", tutors::create_profile(&api, &creds, &create_request()).await),
        flat("get_profile", tutors::get_profile(&api, &creds).await),
        flat("update_profile", tutors::update_profile(&api, &creds, &update_request()).await),
        flat("get_dashboard_stats", tutors::get_dashboard_stats(&api, &creds).await),
    ]
}

#[tokio::test]
async fn every_function_reports_non_2xx_as_failure() {
    for status in [400, 401, 404, 500, 503] {
        let upstream = common::canned(status, "").await;
        for (name, success, message) in call_all(&upstream.base).await {
            assert!(!success, "{name} succeeded on {status}");
            let message = message.unwrap_or_default();
            assert!(!message.is_empty(), "{name} gave no message on {status}");
            assert!(message.starts_with("Failed to "), "{name}: {message}");
        }
    }
}

#[tokio::test]
async fn every_function_reports_network_failure() {
    for (name, success, message) in call_all(&common::unreachable_base()).await {
        assert!(!success, "{name} succeeded without an upstream");
        assert!(message.is_some_and(|m| !m.is_empty()), "{name} gave no message");
    }
}

#[tokio::test]
async fn upstream_error_message_is_preferred() {
    let upstream = common::canned(422, r#"{"success":false,"message":"Bio is too short"}"#).await;
    for (name, success, message) in call_all(&upstream.base).await {
        assert!(!success);
        assert_eq!(message.as_deref(), Some("Bio is too short"), "{name}");
    }
}

#[tokio::test]
async fn dashboard_stats_500_uses_status_fallback() {
    let upstream = common::canned(500, "<html>oops</html>").await;
    let result =
        tutors::get_dashboard_stats(&common::client(&upstream.base), &common::signed_in()).await;

    assert!(!result.success);
    assert_eq!(result.data, None);
    assert_eq!(
        result.message.as_deref(),
        Some("Failed to fetch dashboard stats: 500 Internal Server Error")
    );
}

#[tokio::test]
async fn create_profile_passes_enveloped_201_through() {
    let payload = json!({
        "success": true,
        "data": {
            "id": "tp_1",
            "userId": "u_1",
            "bio": "Ten years of teaching algebra and calculus.",
            "hourlyRate": 40.0,
            "experienceYears": 10,
            "categories": [{ "id": "math", "name": "Mathematics" }],
            "isAvailable": true,
            "updatedAt": "2026-03-01T09:30:00Z"
        },
        "message": "Tutor profile created"
    });
    let upstream = common::canned(201, &payload.to_string()).await;

    let result = tutors::create_profile(
        &common::client(&upstream.base),
        &common::signed_in(),
        &create_request(),
    )
    .await;

    assert_eq!(serde_json::to_value(&result).unwrap(), payload);
}

#[tokio::test]
async fn create_profile_keeps_sparse_payload_as_success() {
    let payload = json!({
        "success": true,
        "data": { "id": "tp_1", "bio": "Algebra", "hourlyRate": 40 }
    });
    let upstream = common::canned(201, &payload.to_string()).await;

    let result = tutors::create_profile(
        &common::client(&upstream.base),
        &common::signed_in(),
        &create_request(),
    )
    .await;

    assert!(result.success);
    assert_eq!(result.data, Some(payload["data"].clone()));
}

#[tokio::test]
async fn bare_payload_is_wrapped_as_success() {
    let upstream = common::canned(200, r#"[{"id":"math","name":"Mathematics"}]"#).await;
    let result =
        tutors::get_categories(&common::client(&upstream.base), &common::signed_in()).await;

    assert!(result.success);
    let categories = result.data.unwrap();
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].name, "Mathematics");
}

#[tokio::test]
async fn enveloped_failure_without_message_gets_generic_one() {
    let upstream = common::canned(200, r#"{"success":false}"#).await;
    let result =
        tutors::check_eligibility(&common::client(&upstream.base), &common::signed_in()).await;

    assert!(!result.success);
    assert!(result.message.is_some_and(|m| !m.trim().is_empty()));
}

#[tokio::test]
async fn empty_2xx_body_is_success_without_data() {
    let upstream = common::canned(204, "").await;
    let result = tutors::update_profile(
        &common::client(&upstream.base),
        &common::signed_in(),
        &update_request(),
    )
    .await;

    assert!(result.success);
    assert!(result.data.is_none());
}

#[tokio::test]
async fn malformed_2xx_body_is_failure() {
    let upstream = common::canned(200, "not json").await;
    let result = tutors::get_profile(&common::client(&upstream.base), &common::signed_in()).await;

    assert!(!result.success);
    assert!(result
        .message
        .unwrap()
        .starts_with("Failed to fetch tutor profile: invalid response"));
}

#[tokio::test]
async fn each_function_hits_its_endpoint_with_credentials() {
    let upstream = common::canned(200, "{}").await;
    call_all(&upstream.base).await;

    let seen: Vec<(Method, String)> = upstream
        .requests()
        .into_iter()
        .map(|r| {
            assert_eq!(r.cookie.as_deref(), Some(SESSION_COOKIE));
            (r.method, r.path)
        })
        .collect();

    assert_eq!(
        seen,
        vec![
            (Method::GET, "/tutors/check-eligibility".to_string()),
            (Method::GET, "/tutors/categories".to_string()),
            (Method::POST, "/tutors/create-profile".to_string()),
            (Method::GET, "/tutors/profile".to_string()),
            (Method::PUT, "/tutors/profile".to_string()),
            (Method::GET, "/tutors/dashboard/stats".to_string()),
        ]
    );
}

#[tokio::test]
async fn request_bodies_are_camel_case_json() {
    let upstream = common::canned(200, "{}").await;
    let api = common::client(&upstream.base);

    tutors::update_profile(&api, &common::signed_in(), &update_request()).await;

    let body: Value = serde_json::from_str(&upstream.last().body).unwrap();
    assert_eq!(body, json!({ "hourlyRate": 45.0 }));
}

#[tokio::test]
async fn base_path_is_preserved() {
    let upstream = common::canned(200, "[]").await;
    let api = common::client(&format!("{}/api/v1/", upstream.base));

    tutors::get_categories(&api, &common::signed_in()).await;

    assert_eq!(upstream.last().path, "/api/v1/tutors/categories");
}
