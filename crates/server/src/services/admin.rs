//! Admin-only user management. The role gate runs before any call to the
//! auth service's admin endpoints.

use shared_types::{AppError, ServiceResult, SetRoleRequest, UserList, UserRole};

use crate::auth::cookies::Credentials;
use crate::state::AppState;

pub async fn list_users(
    state: &AppState,
    credentials: &Credentials,
) -> Result<ServiceResult<UserList>, AppError> {
    state.sessions.require_role(credentials, UserRole::Admin).await?;
    Ok(state.auth.list_users(credentials).await)
}

pub async fn set_role(
    state: &AppState,
    credentials: &Credentials,
    request: &SetRoleRequest,
) -> Result<ServiceResult<()>, AppError> {
    if request.user_id.trim().is_empty() {
        return Err(AppError::bad_request("User id is required"));
    }
    if request.role == UserRole::Unknown {
        return Err(AppError::bad_request("Pick a role"));
    }

    let admin = state.sessions.require_role(credentials, UserRole::Admin).await?;
    tracing::info!(
        admin_id = %admin.id,
        user_id = %request.user_id,
        role = request.role.as_str(),
        "Changing user role"
    );
    Ok(state.auth.set_role(credentials, request).await)
}
