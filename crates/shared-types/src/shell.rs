use crate::navigation::{routes_for, RouteGroup};
use crate::{SessionUser, UserRole};

/// Landing route of every signed-in user's dashboard.
pub const DASHBOARD_HOME: &str = "/dashboard";

/// What the dashboard layout needs to render its chrome for the current user.
///
/// Built from the resolved session only. No user means no navigation; a
/// guest role is never fabricated.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardShell {
    pub role: Option<UserRole>,
    pub display_name: String,
    pub initials: String,
    pub image: Option<String>,
    pub groups: &'static [RouteGroup],
}

impl DashboardShell {
    pub fn compose(user: Option<&SessionUser>) -> Self {
        match user {
            Some(user) => {
                let role = user.role();
                Self {
                    role: Some(role),
                    display_name: user.name.clone(),
                    initials: user.initials(),
                    image: user.image.clone(),
                    groups: routes_for(role),
                }
            }
            None => Self {
                role: None,
                display_name: String::new(),
                initials: String::new(),
                image: None,
                groups: &[],
            },
        }
    }

    /// Whether a dashboard sub-route may be shown to this user.
    ///
    /// The dashboard home is open to any signed-in user; every other path
    /// must appear in the role's navigation table.
    pub fn can_access(&self, path: &str) -> bool {
        if self.role.is_none() {
            return false;
        }
        let path = normalize_path(path);
        path == DASHBOARD_HOME || self.groups.iter().any(|g| g.contains_url(path))
    }

    /// Title of the navigation entry matching `path`, if any.
    pub fn title_for(&self, path: &str) -> Option<&'static str> {
        let path = normalize_path(path);
        self.groups
            .iter()
            .flat_map(|g| g.items.iter())
            .find(|item| item.url == path)
            .map(|item| item.title)
    }
}

fn normalize_path(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}
