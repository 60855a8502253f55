use axum::extract::State;
use axum::Json;
use serde::Serialize;
use std::sync::OnceLock;
use std::time::Instant;

use crate::services::ApiClient;
use crate::state::AppState;

static START_TIME: OnceLock<Instant> = OnceLock::new();

/// Record the application start time. Call once during startup.
pub fn record_start_time() {
    START_TIME.get_or_init(Instant::now);
}

/// Health check response.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub auth: String,
    pub backend: String,
    pub uptime_seconds: u64,
    pub version: String,
}

/// Any HTTP answer counts as reachable; only transport failures do not.
async fn probe(client: &ApiClient) -> String {
    match client.http().get(client.base_url()).send().await {
        Ok(_) => "reachable".to_string(),
        Err(e) => format!("unreachable: {}", e.without_url()),
    }
}

/// Health check handler.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up; upstream reachability reported per collaborator", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let (auth, backend) = tokio::join!(probe(state.auth.api()), probe(&state.api));
    let status = if auth == "reachable" && backend == "reachable" {
        "ok"
    } else {
        "degraded"
    };

    let uptime = START_TIME.get().map(|t| t.elapsed().as_secs()).unwrap_or(0);

    Json(HealthResponse {
        status: status.to_string(),
        auth,
        backend,
        uptime_seconds: uptime,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
