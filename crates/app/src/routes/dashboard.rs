use crate::auth::use_auth;
use crate::format_helpers::{display_outcome, format_money, format_rating};
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::{SessionUser, UserRole};
use shared_ui::{
    Alert, AlertVariant, Avatar, Card, CardContent, CardDescription,
    CardHeader, CardTitle, PageHeader, RoleBadge, SkeletonCard, StatCard, StatGrid,
};

/// Dashboard home. What it shows depends on the signed-in role.
#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let Some(user) = auth.current_user.read().clone() else {
        return rsx! {};
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "page",
            match user.role() {
                UserRole::Tutor => rsx! { TutorOverview { user: user.clone() } },
                UserRole::Admin => rsx! { AdminOverview { user: user.clone() } },
                UserRole::Student => rsx! { StudentProfile { user: user.clone() } },
                UserRole::Unknown => rsx! {
                    PageHeader { title: format!("Welcome, {}", user.name) }
                    Alert { variant: AlertVariant::Info,
                        "Your account does not have a role yet. Contact an administrator to get access."
                    }
                },
            }
        }
    }
}

#[component]
fn ProfileCard(user: SessionUser) -> Element {
    let role = user.role();
    rsx! {
        Card {
            CardContent {
                div { class: "profile-card",
                    Avatar {
                        initials: user.initials(),
                        image: user.image.clone(),
                        alt: user.name.clone(),
                    }
                    div { class: "profile-card-body",
                        h2 { class: "profile-card-name", "{user.name}" }
                        p { class: "profile-card-email", "{user.email}" }
                    }
                    RoleBadge { role }
                }
            }
        }
    }
}

#[component]
fn StudentProfile(user: SessionUser) -> Element {
    rsx! {
        PageHeader {
            title: "Student Profile".to_string(),
            subtitle: "Your account at a glance".to_string(),
        }
        ProfileCard { user }
        div { class: "dashboard-actions",
            Card {
                CardHeader {
                    CardTitle { "Find a tutor" }
                    CardDescription { "Browse tutors by subject." }
                }
                CardContent {
                    Link { to: Route::FindTutor {}, class: "dashboard-action-link", "Browse subjects" }
                }
            }
            Card {
                CardHeader {
                    CardTitle { "Teach on TutorHub" }
                    CardDescription { "See whether you can apply as a tutor." }
                }
                CardContent {
                    Link { to: Route::BeTutor {}, class: "dashboard-action-link", "Check eligibility" }
                }
            }
        }
    }
}

#[component]
fn TutorOverview(user: SessionUser) -> Element {
    let stats = use_resource(move || async move {
        display_outcome(server::api::get_tutor_dashboard_stats().await)
    });

    rsx! {
        PageHeader {
            title: format!("Welcome back, {}", user.name),
            subtitle: "Your teaching at a glance".to_string(),
            actions: rsx! {
                Link { to: Route::UpdateProfile {}, class: "dashboard-action-link", "Edit profile" }
            },
        }

        match &*stats.read() {
            Some(Ok(Some(stats))) => rsx! {
                StatGrid {
                    StatCard {
                        label: "Total sessions".to_string(),
                        value: stats.total_sessions.to_string(),
                        hint: format!("{}% completed", stats.completion_rate()),
                    }
                    StatCard {
                        label: "Upcoming".to_string(),
                        value: stats.upcoming_sessions.to_string(),
                    }
                    StatCard {
                        label: "Students".to_string(),
                        value: stats.total_students.to_string(),
                    }
                    StatCard {
                        label: "Earnings".to_string(),
                        value: format_money(stats.total_earnings),
                    }
                    StatCard {
                        label: "Rating".to_string(),
                        value: format_rating(Some(stats.average_rating)),
                        hint: format!("{} reviews", stats.total_reviews),
                    }
                }
            },
            Some(Ok(None)) => rsx! {
                Alert { variant: AlertVariant::Info,
                    "No teaching activity yet. Stats appear after your first session."
                }
            },
            Some(Err(msg)) => rsx! {
                Alert {
                    variant: AlertVariant::Error,
                    title: "Could not load your stats".to_string(),
                    "{msg}"
                }
            },
            None => rsx! {
                SkeletonCard { lines: 4 }
            },
        }
    }
}

#[component]
fn AdminOverview(user: SessionUser) -> Element {
    let users = use_resource(move || async move {
        display_outcome(server::api::list_users().await)
    });

    rsx! {
        PageHeader {
            title: "Admin Dashboard".to_string(),
            subtitle: format!("Signed in as {}", user.email),
        }

        match &*users.read() {
            Some(Ok(list)) => {
                let list = list.clone().unwrap_or_default();
                let count = |role: UserRole| list.users.iter().filter(|u| u.role() == role).count();
                rsx! {
                    StatGrid {
                        StatCard { label: "Users".to_string(), value: list.total.to_string() }
                        StatCard { label: "Students".to_string(), value: count(UserRole::Student).to_string() }
                        StatCard { label: "Tutors".to_string(), value: count(UserRole::Tutor).to_string() }
                        StatCard { label: "Admins".to_string(), value: count(UserRole::Admin).to_string() }
                    }
                }
            }
            Some(Err(msg)) => rsx! {
                Alert {
                    variant: AlertVariant::Error,
                    title: "Could not load users".to_string(),
                    "{msg}"
                }
            },
            None => rsx! {
                SkeletonCard { lines: 2 }
            },
        }

        div { class: "dashboard-actions",
            Card {
                CardHeader {
                    CardTitle { "Manage users" }
                    CardDescription { "Change any user's role." }
                }
                CardContent {
                    Link { to: Route::UpdateUser {}, class: "dashboard-action-link", "Update users" }
                }
            }
            Card {
                CardHeader {
                    CardTitle { "Promote students" }
                    CardDescription { "Turn approved students into tutors." }
                }
                CardContent {
                    Link { to: Route::MakeTutor {}, class: "dashboard-action-link", "Make tutor" }
                }
            }
        }
    }
}
