use reqwest::Method;
use serde_json::Value;
use shared_types::{AppError, SessionState, SessionUser, UserRole};

use super::cookies::Credentials;
use crate::services::ApiClient;

const SESSION_PATH: &str = "/get-session";

/// Asks the auth service whether the forwarded cookies carry a live session.
#[derive(Debug, Clone)]
pub struct SessionResolver {
    auth: ApiClient,
}

impl SessionResolver {
    pub fn new(auth: ApiClient) -> Self {
        Self { auth }
    }

    /// Resolve the session for one request. Never fails: every problem
    /// degrades to an anonymous session. Makes no call without cookies.
    #[tracing::instrument(skip_all)]
    pub async fn resolve(&self, credentials: &Credentials) -> SessionState {
        if credentials.is_empty() {
            return SessionState::anonymous();
        }

        let result = self
            .auth
            .call::<Value, ()>("check session", Method::GET, SESSION_PATH, None, credentials)
            .await;

        if !result.success {
            tracing::warn!(error = result.error_message(), "Session check failed");
            return SessionState::anonymous();
        }

        match result.data.as_ref().and_then(parse_session_payload) {
            Some(user) => {
                tracing::debug!(user_id = %user.id, role = %user.role, "Session resolved");
                SessionState::authenticated(user)
            }
            None => {
                tracing::info!("No valid session in auth response");
                SessionState::anonymous()
            }
        }
    }

    /// The signed-in user, or `Unauthorized` when the request is anonymous.
    pub async fn require_user(&self, credentials: &Credentials) -> Result<SessionUser, AppError> {
        self.resolve(credentials)
            .await
            .into_user()
            .ok_or_else(|| AppError::unauthorized("Authentication required"))
    }

    /// Like [`SessionResolver::require_user`], and the user must hold `role`.
    pub async fn require_role(
        &self,
        credentials: &Credentials,
        role: UserRole,
    ) -> Result<SessionUser, AppError> {
        let user = self.require_user(credentials).await?;
        if user.role() != role {
            tracing::warn!(user_id = %user.id, required = role.as_str(), "Role check failed");
            return Err(AppError::forbidden(format!("{} role required", role.label())));
        }
        Ok(user)
    }
}

/// Extract the user from a session-check payload.
///
/// Accepts `{user: {...}}` or `{data: {user: {...}}}`. Any `error` field,
/// a `null` body or a user without an id yields `None`.
pub fn parse_session_payload(payload: &Value) -> Option<SessionUser> {
    if payload.get("error").is_some_and(|e| !e.is_null()) {
        return None;
    }
    let user = payload
        .get("user")
        .or_else(|| payload.get("data").and_then(|d| d.get("user")))?;
    let user: SessionUser = serde_json::from_value(user.clone()).ok()?;
    (!user.id.is_empty()).then_some(user)
}
