pub mod navigation;
pub mod session;

use axum::{routing::get, Router};
use crate::state::AppState;

/// Build the REST API router.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/navigation", get(navigation::navigation_for_session))
        .route("/api/v1/navigation/{role}", get(navigation::navigation_for_role))
        .route("/api/v1/session", get(session::current_session))
}
