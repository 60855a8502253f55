use axum::{extract::Path, Json};
use serde::Serialize;

use shared_types::{routes_for, routes_for_role, AppError, NavItem, RouteGroup};
use crate::auth::extractors::SessionRequired;

// ---------------------------------------------------------------------------
// Response shapes
// ---------------------------------------------------------------------------

/// One sidebar link.
#[derive(Debug, Clone, Serialize, PartialEq, utoipa::ToSchema)]
pub struct NavigationLink {
    pub title: String,
    pub url: String,
}

/// A titled, ordered group of sidebar links.
#[derive(Debug, Clone, Serialize, PartialEq, utoipa::ToSchema)]
pub struct NavigationGroup {
    pub title: String,
    pub items: Vec<NavigationLink>,
}

impl From<&NavItem> for NavigationLink {
    fn from(item: &NavItem) -> Self {
        Self {
            title: item.title.to_string(),
            url: item.url.to_string(),
        }
    }
}

impl From<&RouteGroup> for NavigationGroup {
    fn from(group: &RouteGroup) -> Self {
        Self {
            title: group.title.to_string(),
            items: group.items.iter().map(NavigationLink::from).collect(),
        }
    }
}

fn to_response(groups: &[RouteGroup]) -> Json<Vec<NavigationGroup>> {
    Json(groups.iter().map(NavigationGroup::from).collect())
}

// ---------------------------------------------------------------------------
// GET /api/v1/navigation/{role}
// ---------------------------------------------------------------------------

/// Navigation groups for a role. Unknown roles get an empty list.
#[utoipa::path(
    get,
    path = "/api/v1/navigation/{role}",
    params(
        ("role" = String, Path, description = "Role name, case-insensitive")
    ),
    responses(
        (status = 200, description = "Ordered navigation groups", body = Vec<NavigationGroup>)
    ),
    tag = "navigation"
)]
pub async fn navigation_for_role(Path(role): Path<String>) -> Json<Vec<NavigationGroup>> {
    to_response(routes_for_role(&role))
}

// ---------------------------------------------------------------------------
// GET /api/v1/navigation
// ---------------------------------------------------------------------------

/// Navigation groups for the signed-in user's role.
#[utoipa::path(
    get,
    path = "/api/v1/navigation",
    responses(
        (status = 200, description = "Ordered navigation groups", body = Vec<NavigationGroup>),
        (status = 401, description = "No valid session", body = AppError)
    ),
    tag = "navigation"
)]
pub async fn navigation_for_session(
    SessionRequired(user, _): SessionRequired,
) -> Result<Json<Vec<NavigationGroup>>, AppError> {
    Ok(to_response(routes_for(user.role())))
}
