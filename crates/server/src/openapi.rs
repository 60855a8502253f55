use axum::Router;
use shared_types::{AppError, AppErrorKind, FeatureFlags, SessionState, SessionUser, UserRole};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::health;
use crate::rest;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        rest::navigation::navigation_for_role,
        rest::navigation::navigation_for_session,
        rest::session::current_session,
    ),
    components(schemas(
        AppError,
        AppErrorKind,
        SessionState,
        SessionUser,
        UserRole,
        health::HealthResponse,
        rest::navigation::NavigationGroup,
        rest::navigation::NavigationLink,
    )),
    tags(
        (name = "navigation", description = "Role-based dashboard navigation"),
        (name = "session", description = "Session resolution against the auth service"),
        (name = "health", description = "Health check endpoint")
    ),
    info(
        title = "TutorHub API",
        description = "Tutoring marketplace web application API",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

/// Build an Axum router that serves the API docs at `/docs`, the REST API
/// at `/api/v1/*`, and the auth proxy at `/api/auth/*` when enabled.
pub fn api_router(state: AppState) -> Router {
    api_router_with_flags(state, crate::config::feature_flags())
}

/// [`api_router`] with explicit feature flags instead of `config.toml`.
pub fn api_router_with_flags(state: AppState, flags: &FeatureFlags) -> Router {
    let mut router = Router::new()
        .merge(rest::api_router())
        .route("/health", axum::routing::get(health::health_check));

    if flags.auth_proxy {
        router = router.route(
            "/api/auth/{*path}",
            axum::routing::any(crate::auth::proxy::auth_proxy),
        );
    }

    router
        .with_state(state)
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
}
