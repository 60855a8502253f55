use crate::auth::{use_auth, use_shell};
use dioxus::prelude::*;
use shared_ui::{Alert, AlertVariant, NavSidebar, SidebarUser};

pub mod admin;
pub mod be_tutor;
pub mod dashboard;
pub mod find_tutor;
pub mod home;
pub mod login;
pub mod not_found;
pub mod register;
pub mod tutor_profile;

use admin::{MakeTutor, UpdateUser};
use be_tutor::BeTutor;
use dashboard::Dashboard;
use find_tutor::FindTutor;
use home::Home;
use login::Login;
use not_found::NotFound;
use register::Register;
use tutor_profile::{CreateProfile, UpdateProfile};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
#[allow(clippy::enum_variant_names)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},

    #[layout(AuthGuard)]
        #[layout(DashboardLayout)]
            #[route("/dashboard")]
            Dashboard {},
            #[route("/find-tutor")]
            FindTutor {},
            #[route("/be-tutor")]
            BeTutor {},
            #[route("/create-profile")]
            CreateProfile {},
            #[route("/update-profile")]
            UpdateProfile {},
            #[route("/update-user")]
            UpdateUser {},
            #[route("/make-tutor")]
            MakeTutor {},
        #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Auth guard layout. Redirects to /login when the session does not resolve
/// to a user.
///
/// `use_server_future` with `?` suspends during SSR until the session check
/// completes; the resolved user is embedded in the HTML for hydration.
#[component]
fn AuthGuard() -> Element {
    let mut auth = use_auth();

    let resource = use_server_future(move || async move { server::api::get_current_user().await })?;

    let result = resource.read().as_ref().cloned();

    match result {
        Some(Ok(Some(user))) => {
            if auth.current_user.peek().as_ref() != Some(&user) {
                auth.set_user(user);
            }
            rsx! { Outlet::<Route> {} }
        }
        Some(Ok(None)) | Some(Err(_)) => {
            auth.clear_auth();
            navigator().push(Route::Login {});
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting to login..." }
                }
            }
        }
        None => {
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Loading..." }
                }
            }
        }
    }
}

/// Dashboard chrome: role-specific sidebar plus the routed page.
///
/// Pages outside the user's navigation table are replaced by a notice
/// instead of rendering.
#[component]
fn DashboardLayout() -> Element {
    let route: Route = use_route();
    let shell = use_shell();
    let mut auth = use_auth();
    let toast = shared_ui::use_toast();

    let path = route.to_string();
    let shell = shell.read().clone();
    let allowed = shell.can_access(&path);
    let title = match shell.title_for(&path) {
        Some(page) => format!("{page} | TutorHub"),
        None => "TutorHub".to_string(),
    };
    let user = shell.role.map(|role| SidebarUser {
        display_name: shell.display_name.clone(),
        role_label: role.label().to_string(),
        initials: shell.initials.clone(),
        image: shell.image.clone(),
    });

    let on_navigate = move |url: &'static str| match url.parse::<Route>() {
        Ok(target) => {
            navigator().push(target);
        }
        Err(_) => {
            navigator().push(NavigationTarget::<Route>::External(url.to_string()));
        }
    };

    let on_sign_out = move |_| {
        spawn(async move {
            match server::api::sign_out().await {
                Ok(result) if !result.success => {
                    let msg = result
                        .message
                        .unwrap_or_else(|| "Sign out failed".to_string());
                    toast.error(msg, shared_ui::ToastOptions::new());
                }
                Ok(_) => {
                    auth.clear_auth();
                    navigator().push(Route::Login {});
                }
                Err(e) => {
                    toast.error(
                        shared_types::AppError::friendly_message(&e.to_string()),
                        shared_ui::ToastOptions::new(),
                    );
                }
            }
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }
        document::Title { "{title}" }

        div { class: "dashboard-layout",
            NavSidebar {
                brand: "TutorHub".to_string(),
                groups: shell.groups,
                active_url: path.clone(),
                user,
                on_navigate,
                on_sign_out,
            }

            main { class: "dashboard-main",
                if allowed {
                    Outlet::<Route> {}
                } else {
                    div { class: "dashboard-denied",
                        Alert {
                            variant: AlertVariant::Error,
                            title: "Not available".to_string(),
                            "This page is not available for your role."
                        }
                        Link { to: Route::Dashboard {}, class: "dashboard-denied-link",
                            "Back to your dashboard"
                        }
                    }
                }
            }
        }
    }
}
