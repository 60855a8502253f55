use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use shared_types::{AppError, SessionState, SessionUser};

use super::cookies::Credentials;
use crate::state::AppState;

fn credentials(parts: &Parts) -> Credentials {
    parts
        .extensions
        .get::<Credentials>()
        .cloned()
        .unwrap_or_else(|| Credentials::from_headers(&parts.headers))
}

/// Resolved session for the request. Never fails; anonymous when the auth
/// service rejects or is unreachable.
pub struct CurrentSession(pub SessionState);

impl<S> FromRequestParts<S> for CurrentSession
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(resolved) = parts.extensions.get::<SessionState>() {
            return Ok(CurrentSession(resolved.clone()));
        }
        let app = AppState::from_ref(state);
        let session = app.sessions.resolve(&credentials(parts)).await;
        parts.extensions.insert(session.clone());
        Ok(CurrentSession(session))
    }
}

/// Extractor that requires a valid session. Returns 401 otherwise.
pub struct SessionRequired(pub SessionUser, pub Credentials);

impl<S> FromRequestParts<S> for SessionRequired
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let CurrentSession(session) = match CurrentSession::from_request_parts(parts, state).await {
            Ok(session) => session,
            Err(never) => match never {},
        };
        session
            .into_user()
            .map(|user| SessionRequired(user, credentials(parts)))
            .ok_or_else(|| AppError::unauthorized("Authentication required"))
    }
}
