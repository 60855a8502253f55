use serde::Serialize;

use crate::UserRole;

/// A single sidebar link.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct NavItem {
    pub title: &'static str,
    pub url: &'static str,
}

/// A labeled, ordered group of sidebar links.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct RouteGroup {
    pub title: &'static str,
    pub items: &'static [NavItem],
}

impl RouteGroup {
    pub fn contains_url(&self, url: &str) -> bool {
        self.items.iter().any(|item| item.url == url)
    }
}

pub const ADMIN_ROUTES: &[RouteGroup] = &[RouteGroup {
    title: "User Management",
    items: &[
        NavItem {
            title: "Update User",
            url: "/update-user",
        },
        NavItem {
            title: "make-tutor",
            url: "/make-tutor",
        },
    ],
}];

pub const STUDENT_ROUTES: &[RouteGroup] = &[RouteGroup {
    title: "Student Management",
    items: &[
        NavItem {
            title: "Student Profile",
            url: "/dashboard",
        },
        NavItem {
            title: "Find Tutors",
            url: "/find-tutor",
        },
        NavItem {
            title: "Be a Tutor",
            url: "/be-tutor",
        },
    ],
}];

pub const TUTOR_ROUTES: &[RouteGroup] = &[RouteGroup {
    title: "Tutor Management",
    items: &[
        NavItem {
            title: "Tutor Dashboard",
            url: "/dashboard",
        },
        NavItem {
            title: "Create Profile",
            url: "/create-profile",
        },
        NavItem {
            title: "Update Profile",
            url: "/update-profile",
        },
    ],
}];

/// Navigation groups for a parsed role. `Unknown` gets nothing.
pub fn routes_for(role: UserRole) -> &'static [RouteGroup] {
    match role {
        UserRole::Admin => ADMIN_ROUTES,
        UserRole::Student => STUDENT_ROUTES,
        UserRole::Tutor => TUTOR_ROUTES,
        UserRole::Unknown => &[],
    }
}

/// Navigation groups for a raw role string, matched case-insensitively.
/// Empty or unrecognized input yields an empty slice.
pub fn routes_for_role(role: &str) -> &'static [RouteGroup] {
    routes_for(UserRole::from_str_or_default(role))
}
