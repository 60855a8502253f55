use axum::Json;

use shared_types::SessionState;
use crate::auth::extractors::CurrentSession;

// ---------------------------------------------------------------------------
// GET /api/v1/session
// ---------------------------------------------------------------------------

/// The session resolved from the request's cookies. Always 200; an invalid
/// or missing session reads `{"authenticated": false}`.
#[utoipa::path(
    get,
    path = "/api/v1/session",
    responses(
        (status = 200, description = "Resolved session", body = SessionState)
    ),
    tag = "session"
)]
pub async fn current_session(CurrentSession(session): CurrentSession) -> Json<SessionState> {
    Json(session)
}
