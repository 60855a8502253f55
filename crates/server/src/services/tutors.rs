//! Backend API calls for the tutor resource.
//!
//! Each function performs one request against `INTERNAL_API_URL` and returns a
//! normalized [`ServiceResult`]; none of them retry or fail.

use reqwest::Method;
use serde_json::Value;
use shared_types::{
    Category, CreateTutorProfileRequest, Eligibility, ServiceResult, TutorProfile, TutorStats,
    UpdateTutorProfileRequest,
};

use super::ApiClient;
use crate::auth::cookies::Credentials;

const NO_BODY: Option<&()> = None;

pub async fn check_eligibility(api: &ApiClient, credentials: &Credentials) -> ServiceResult<Eligibility> {
    api.call(
        "check tutor eligibility",
        Method::GET,
        "/tutors/check-eligibility",
        NO_BODY,
        credentials,
    )
    .await
}

pub async fn get_categories(api: &ApiClient, credentials: &Credentials) -> ServiceResult<Vec<Category>> {
    api.call("fetch categories", Method::GET, "/tutors/categories", NO_BODY, credentials)
        .await
}

/// The created record comes back exactly as the backend sent it.
pub async fn create_profile(
    api: &ApiClient,
    credentials: &Credentials,
    request: &CreateTutorProfileRequest,
) -> ServiceResult<Value> {
    api.call(
        "create tutor profile",
        Method::POST,
        "/tutors/create-profile",
        Some(request),
        credentials,
    )
    .await
}

pub async fn get_profile(api: &ApiClient, credentials: &Credentials) -> ServiceResult<TutorProfile> {
    api.call("fetch tutor profile", Method::GET, "/tutors/profile", NO_BODY, credentials)
        .await
}

pub async fn update_profile(
    api: &ApiClient,
    credentials: &Credentials,
    request: &UpdateTutorProfileRequest,
) -> ServiceResult<TutorProfile> {
    api.call(
        "update tutor profile",
        Method::PUT,
        "/tutors/profile",
        Some(request),
        credentials,
    )
    .await
}

pub async fn get_dashboard_stats(api: &ApiClient, credentials: &Credentials) -> ServiceResult<TutorStats> {
    api.call(
        "fetch dashboard stats",
        Method::GET,
        "/tutors/dashboard/stats",
        NO_BODY,
        credentials,
    )
    .await
}
