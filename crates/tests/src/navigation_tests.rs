use pretty_assertions::assert_eq;
use shared_types::{routes_for_role, DashboardShell, SessionUser, UserRole};
use std::collections::HashSet;

fn user(role: &str) -> SessionUser {
    SessionUser {
        id: "u_1".to_string(),
        name: "Grace Brewster Hopper".to_string(),
        email: "grace@example.com".to_string(),
        role: role.to_string(),
        image: None,
    }
}

fn urls(role: &str) -> Vec<&'static str> {
    routes_for_role(role)
        .iter()
        .flat_map(|g| g.items.iter().map(|i| i.url))
        .collect()
}

#[test]
fn only_known_roles_get_navigation() {
    for role in ["", " ", "guest", "superadmin", "students", "tutor ", "root"] {
        let groups = routes_for_role(role);
        if UserRole::from_str_or_default(role) == UserRole::Unknown {
            assert!(groups.is_empty(), "{role:?} should get no navigation");
        }
    }
    for role in ["admin", "student", "tutor"] {
        assert!(!routes_for_role(role).is_empty(), "{role} has navigation");
    }
}

#[test]
fn role_matching_ignores_case() {
    for (upper, lower) in [("ADMIN", "admin"), ("Student", "student"), ("tUtOr", "tutor")] {
        assert_eq!(routes_for_role(upper), routes_for_role(lower));
    }
}

#[test]
fn student_navigation_is_exact_and_ordered() {
    let groups = routes_for_role("student");
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].title, "Student Management");
    let items: Vec<(&str, &str)> = groups[0].items.iter().map(|i| (i.title, i.url)).collect();
    assert_eq!(
        items,
        vec![
            ("Student Profile", "/dashboard"),
            ("Find Tutors", "/find-tutor"),
            ("Be a Tutor", "/be-tutor"),
        ]
    );
}

#[test]
fn urls_are_absolute_and_unique_per_role() {
    for role in ["admin", "student", "tutor"] {
        let all = urls(role);
        let unique: HashSet<_> = all.iter().collect();
        assert_eq!(unique.len(), all.len(), "{role} repeats a url");
        assert!(all.iter().all(|u| u.starts_with('/')), "{role}: {all:?}");
    }
}

#[test]
fn shell_follows_session_role() {
    let shell = DashboardShell::compose(Some(&user("tutor")));
    assert_eq!(shell.role, Some(UserRole::Tutor));
    assert_eq!(shell.initials, "GB");
    assert_eq!(shell.groups, routes_for_role("tutor"));

    assert!(shell.can_access("/dashboard"));
    assert!(shell.can_access("/update-profile/"));
    assert!(!shell.can_access("/make-tutor"));
    assert!(!shell.can_access("/find-tutor"));
}

#[test]
fn shell_without_session_grants_nothing() {
    let shell = DashboardShell::compose(None);
    assert!(shell.groups.is_empty());
    assert!(!shell.can_access("/dashboard"));
}

#[test]
fn unknown_role_only_reaches_dashboard_home() {
    let shell = DashboardShell::compose(Some(&user("moderator")));
    assert!(shell.groups.is_empty());
    assert!(shell.can_access("/dashboard"));
    assert!(!shell.can_access("/be-tutor"));
}

#[test]
fn every_linked_page_is_reachable_by_its_role() {
    for role in ["admin", "student", "tutor"] {
        let shell = DashboardShell::compose(Some(&user(role)));
        for url in urls(role) {
            assert!(shell.can_access(url), "{role} cannot open {url}");
        }
    }
}
