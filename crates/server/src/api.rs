use dioxus::prelude::*;
use shared_types::{
    Category, CreateTutorProfileRequest, Eligibility, FeatureFlags, ServiceResult, SessionState,
    SessionUser, TutorProfile, TutorStats, UpdateTutorProfileRequest, UserList, UserRole,
};

#[cfg(feature = "server")]
use crate::auth::cookies::{current_credentials, schedule_set_cookies};

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, ValidateRequest};

#[cfg(feature = "server")]
use crate::state::app_state;

// ── Helpers for server functions ──────────────────

#[cfg(feature = "server")]
fn state() -> Result<&'static crate::state::AppState, ServerFnError> {
    app_state().map_err(|e| e.into_server_fn_error())
}

/// Credentials for the current call, rejected with 401 unless they carry a
/// live session.
#[cfg(feature = "server")]
async fn signed_in_credentials() -> Result<crate::auth::cookies::Credentials, ServerFnError> {
    let credentials = current_credentials();
    state()?
        .sessions
        .require_user(&credentials)
        .await
        .map_err(|e| e.into_server_fn_error())?;
    Ok(credentials)
}

/// Turn an auth-service sign-in/up payload into the signed-in user.
#[cfg(feature = "server")]
fn signed_in_user(result: ServiceResult<serde_json::Value>) -> ServiceResult<SessionUser> {
    let ServiceResult {
        success,
        data,
        message,
    } = result;
    ServiceResult {
        success,
        data: data
            .as_ref()
            .and_then(crate::auth::session::parse_session_payload),
        message,
    }
}

// ── Session & flags ──────────────────

/// Get the current feature flags. No auth required; flags are not sensitive.
#[server]
pub async fn get_feature_flags() -> Result<FeatureFlags, ServerFnError> {
    Ok(crate::config::feature_flags().clone())
}

/// Resolve the caller's session against the auth service.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_session() -> Result<SessionState, ServerFnError> {
    let credentials = current_credentials();
    Ok(state()?.sessions.resolve(&credentials).await)
}

/// The signed-in user, or `None` when the session is missing or invalid.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_current_user() -> Result<Option<SessionUser>, ServerFnError> {
    let credentials = current_credentials();
    Ok(state()?.sessions.resolve(&credentials).await.into_user())
}

// ── Authentication ──────────────────

/// Sign in with email and password. Relays the auth service's session
/// cookies to the browser on success.
#[cfg_attr(feature = "server", tracing::instrument(skip(password)))]
#[server]
pub async fn sign_in(email: String, password: String) -> Result<ServiceResult<SessionUser>, ServerFnError> {
    use shared_types::SignInRequest;

    let req = SignInRequest { email, password };
    req.validate_request().map_err(|e| e.into_server_fn_error())?;

    let upstream = state()?.auth.sign_in_email(&req).await;
    schedule_set_cookies(upstream.set_cookies);
    Ok(signed_in_user(upstream.result))
}

/// Create an account. The auth service signs the new user in directly.
#[cfg_attr(feature = "server", tracing::instrument(skip(password)))]
#[server]
pub async fn sign_up(
    name: String,
    email: String,
    password: String,
) -> Result<ServiceResult<SessionUser>, ServerFnError> {
    use shared_types::SignUpRequest;

    let req = SignUpRequest {
        name,
        email,
        password,
    };
    req.validate_request().map_err(|e| e.into_server_fn_error())?;

    let upstream = state()?.auth.sign_up_email(&req).await;
    schedule_set_cookies(upstream.set_cookies);
    Ok(signed_in_user(upstream.result))
}

/// End the caller's session and clear its cookies.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn sign_out() -> Result<ServiceResult<()>, ServerFnError> {
    let credentials = current_credentials();
    let upstream = state()?.auth.sign_out(&credentials).await;
    schedule_set_cookies(upstream.set_cookies);
    Ok(upstream.result)
}

// ── Tutor resource ──────────────────

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn check_tutor_eligibility() -> Result<ServiceResult<Eligibility>, ServerFnError> {
    let credentials = signed_in_credentials().await?;
    Ok(crate::services::tutors::check_eligibility(&state()?.api, &credentials).await)
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_tutor_categories() -> Result<ServiceResult<Vec<Category>>, ServerFnError> {
    let credentials = signed_in_credentials().await?;
    Ok(crate::services::tutors::get_categories(&state()?.api, &credentials).await)
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn create_tutor_profile(
    request: CreateTutorProfileRequest,
) -> Result<ServiceResult<serde_json::Value>, ServerFnError> {
    request.validate_request().map_err(|e| e.into_server_fn_error())?;
    let credentials = signed_in_credentials().await?;
    Ok(crate::services::tutors::create_profile(&state()?.api, &credentials, &request).await)
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_tutor_profile() -> Result<ServiceResult<TutorProfile>, ServerFnError> {
    let credentials = signed_in_credentials().await?;
    Ok(crate::services::tutors::get_profile(&state()?.api, &credentials).await)
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn update_tutor_profile(
    request: UpdateTutorProfileRequest,
) -> Result<ServiceResult<TutorProfile>, ServerFnError> {
    use shared_types::AppError;

    if request.is_empty() {
        return Err(AppError::bad_request("Nothing to update").into_server_fn_error());
    }
    request.validate_request().map_err(|e| e.into_server_fn_error())?;
    let credentials = signed_in_credentials().await?;
    Ok(crate::services::tutors::update_profile(&state()?.api, &credentials, &request).await)
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_tutor_dashboard_stats() -> Result<ServiceResult<TutorStats>, ServerFnError> {
    let credentials = signed_in_credentials().await?;
    Ok(crate::services::tutors::get_dashboard_stats(&state()?.api, &credentials).await)
}

// ── Admin ──────────────────

/// List users known to the auth service. Admin only.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_users() -> Result<ServiceResult<UserList>, ServerFnError> {
    let credentials = current_credentials();
    crate::services::admin::list_users(state()?, &credentials)
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// Change a user's role. Admin only; used by the update-user and
/// make-tutor pages.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn set_user_role(user_id: String, role: UserRole) -> Result<ServiceResult<()>, ServerFnError> {
    let credentials = current_credentials();
    let request = shared_types::SetRoleRequest { user_id, role };
    crate::services::admin::set_role(state()?, &credentials, &request)
        .await
        .map_err(|e| e.into_server_fn_error())
}
