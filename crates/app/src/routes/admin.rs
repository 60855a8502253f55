use crate::auth::use_auth;
use crate::format_helpers::display_outcome;
use dioxus::prelude::*;
use shared_types::{AppError, SessionUser, UserRole};
use shared_ui::{
    use_toast, Alert, AlertVariant, Avatar, Button, ButtonVariant, Card,
    CardContent, FormSelect, Input, PageHeader, RoleBadge, SkeletonCard, ToastOptions,
};

const ASSIGNABLE_ROLES: [UserRole; 3] = [UserRole::Student, UserRole::Tutor, UserRole::Admin];

/// Users matching `query` by name or email, case-insensitively.
fn filter_users<'a>(users: &'a [SessionUser], query: &str) -> Vec<&'a SessionUser> {
    let query = query.trim().to_lowercase();
    users
        .iter()
        .filter(|u| {
            query.is_empty()
                || u.name.to_lowercase().contains(&query)
                || u.email.to_lowercase().contains(&query)
        })
        .collect()
}

/// Change a user's role. Either way the result is a message for a toast.
async fn change_role(user: SessionUser, role: UserRole) -> Result<String, String> {
    match server::api::set_user_role(user.id.clone(), role).await {
        Ok(result) if result.success => Ok(format!("{} is now {}", user.name, role.label())),
        Ok(result) => Err(result
            .error_message()
            .unwrap_or("Role change failed")
            .to_string()),
        Err(e) => Err(AppError::friendly_message(&e.to_string())),
    }
}

/// Admin view of every account with an editable role.
#[component]
pub fn UpdateUser() -> Element {
    let toast = use_toast();
    let mut query = use_signal(String::new);
    let mut users = use_resource(move || async move { display_outcome(server::api::list_users().await) });

    let on_change = move |(user, role): (SessionUser, UserRole)| {
        spawn(async move {
            match change_role(user, role).await {
                Ok(msg) => {
                    toast.success(msg, ToastOptions::new());
                    users.restart();
                }
                Err(msg) => toast.error(msg, ToastOptions::new()),
            }
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./admin.css") }

        div { class: "page",
            PageHeader {
                title: "Update User".to_string(),
                subtitle: "Change the role of any account".to_string(),
            }

            Input {
                label: "Search",
                name: "user-search",
                placeholder: "Name or email",
                value: query(),
                on_input: move |e: FormEvent| query.set(e.value()),
            }

            match &*users.read() {
                Some(Ok(list)) => {
                    let list = list.clone().unwrap_or_default();
                    let shown: Vec<SessionUser> = filter_users(&list.users, &query.read())
                        .into_iter()
                        .cloned()
                        .collect();
                    rsx! {
                        if shown.is_empty() {
                            Alert { variant: AlertVariant::Info, "No users found." }
                        }
                        div { class: "admin-user-list",
                            for user in shown {
                                UserRoleRow {
                                    key: "{user.id}",
                                    user: user.clone(),
                                    on_change,
                                }
                            }
                        }
                    }
                }
                Some(Err(msg)) => rsx! {
                    Alert { variant: AlertVariant::Error, title: "Could not load users".to_string(), "{msg}" }
                },
                None => rsx! { SkeletonCard { lines: 4 } },
            }
        }
    }
}

#[component]
fn UserRoleRow(user: SessionUser, on_change: EventHandler<(SessionUser, UserRole)>) -> Element {
    let current = user.role();
    let mut selected = use_signal(move || current);
    let me = use_auth()
        .current_user
        .read()
        .as_ref()
        .is_some_and(|u| u.id == user.id);

    rsx! {
        Card {
            CardContent {
                div { class: "admin-user-row",
                    Avatar { initials: user.initials(), image: user.image.clone(), alt: user.name.clone() }
                    div { class: "admin-user-info",
                        span { class: "admin-user-name", "{user.name}" }
                        span { class: "admin-user-email", "{user.email}" }
                    }
                    RoleBadge { role: current }
                    FormSelect {
                        name: "role-{user.id}",
                        value: selected().as_str().to_string(),
                        disabled: me,
                        onchange: move |e: Event<FormData>| selected.set(UserRole::from_str_or_default(&e.value())),
                        for role in ASSIGNABLE_ROLES {
                            option { value: role.as_str(), selected: selected() == role, "{role.label()}" }
                        }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: me || selected() == current,
                        onclick: {
                            let user = user.clone();
                            move |_| on_change.call((user.clone(), selected()))
                        },
                        "Save"
                    }
                }
            }
        }
    }
}

/// Admin shortcut to promote students to tutors.
#[component]
pub fn MakeTutor() -> Element {
    let toast = use_toast();
    let mut users = use_resource(move || async move { display_outcome(server::api::list_users().await) });

    let promote = move |user: SessionUser| {
        spawn(async move {
            match change_role(user, UserRole::Tutor).await {
                Ok(msg) => {
                    toast.success(msg, ToastOptions::new());
                    users.restart();
                }
                Err(msg) => toast.error(msg, ToastOptions::new()),
            }
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./admin.css") }

        div { class: "page",
            PageHeader {
                title: "Make Tutor".to_string(),
                subtitle: "Students who can be promoted to tutor".to_string(),
            }

            match &*users.read() {
                Some(Ok(list)) => {
                    let students: Vec<SessionUser> = list
                        .as_ref()
                        .map(|l| l.users.iter().filter(|u| u.role() == UserRole::Student).cloned().collect())
                        .unwrap_or_default();
                    rsx! {
                        if students.is_empty() {
                            Alert { variant: AlertVariant::Info, "There are no students to promote." }
                        }
                        div { class: "admin-user-list",
                            for student in students {
                                Card { key: "{student.id}",
                                    CardContent {
                                        div { class: "admin-user-row",
                                            Avatar { initials: student.initials(), image: student.image.clone(), alt: student.name.clone() }
                                            div { class: "admin-user-info",
                                                span { class: "admin-user-name", "{student.name}" }
                                                span { class: "admin-user-email", "{student.email}" }
                                            }
                                            Button {
                                                onclick: {
                                                    let student = student.clone();
                                                    move |_| promote(student.clone())
                                                },
                                                "Make tutor"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                Some(Err(msg)) => rsx! {
                    Alert { variant: AlertVariant::Error, title: "Could not load users".to_string(), "{msg}" }
                },
                None => rsx! { SkeletonCard { lines: 4 } },
            }
        }
    }
}
