use axum::extract::FromRef;
use shared_types::AppError;
use std::sync::OnceLock;
use std::time::Duration;

use crate::auth::client::AuthClient;
use crate::auth::session::SessionResolver;
use crate::config::{self, EnvConfig};
use crate::services::ApiClient;

/// Shared application state passed to Axum handlers via `State`.
///
/// Holds only immutable clients; nothing here changes between requests.
#[derive(Debug, Clone)]
pub struct AppState {
    pub sessions: SessionResolver,
    pub auth: AuthClient,
    /// Backend API client rooted at `INTERNAL_API_URL`.
    pub api: ApiClient,
}

impl FromRef<AppState> for SessionResolver {
    fn from_ref(state: &AppState) -> Self {
        state.sessions.clone()
    }
}

impl FromRef<AppState> for AuthClient {
    fn from_ref(state: &AppState) -> Self {
        state.auth.clone()
    }
}

impl FromRef<AppState> for ApiClient {
    fn from_ref(state: &AppState) -> Self {
        state.api.clone()
    }
}

impl AppState {
    /// Build clients for the given auth and backend base URLs.
    ///
    /// # Errors
    ///
    /// Returns an error when a reqwest client cannot be constructed.
    pub fn new(auth_url: &str, api_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let auth = ApiClient::new(auth_url, timeout)?;
        let api = ApiClient::new(api_url, timeout)?;
        Ok(Self {
            sessions: SessionResolver::new(auth.clone()),
            auth: AuthClient::new(auth),
            api,
        })
    }

    pub fn from_config(config: &EnvConfig) -> Result<Self, reqwest::Error> {
        Self::new(&config.auth_url, &config.internal_api_url, config.upstream_timeout)
    }
}

static STATE: OnceLock<AppState> = OnceLock::new();

/// Make `state` the process-wide state used by server functions. Only the
/// first call has effect.
pub fn install(state: AppState) -> &'static AppState {
    STATE.get_or_init(|| state)
}

/// Get or initialize the process-wide state.
///
/// Used by Dioxus server functions (`api.rs`), which have no axum `State`.
/// REST handlers receive the same clients through `State<AppState>`.
pub fn app_state() -> Result<&'static AppState, AppError> {
    if let Some(state) = STATE.get() {
        return Ok(state);
    }
    let env = config::load_env_config().map_err(|e| {
        tracing::error!(error = %e, "Environment is not configured");
        AppError::internal("Server is not configured")
    })?;
    let state = AppState::from_config(env).map_err(|e| {
        tracing::error!(error = %e, "Failed to build HTTP clients");
        AppError::internal("Server is not configured")
    })?;
    Ok(install(state))
}
