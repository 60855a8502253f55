use crate::format_helpers::display_outcome;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::Eligibility;
use shared_ui::{
    Alert, AlertVariant, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
    PageHeader, SkeletonCard,
};

/// Eligibility check before a student applies to teach.
#[component]
pub fn BeTutor() -> Element {
    let eligibility = use_resource(move || async move {
        display_outcome(server::api::check_tutor_eligibility().await)
    });

    rsx! {
        div { class: "page",
            PageHeader {
                title: "Be a Tutor".to_string(),
                subtitle: "Share what you know with students on TutorHub".to_string(),
            }

            match &*eligibility.read() {
                Some(Ok(status)) => rsx! {
                    EligibilityCard { status: status.clone().unwrap_or_default() }
                },
                Some(Err(msg)) => rsx! {
                    Alert {
                        variant: AlertVariant::Error,
                        title: "Could not check eligibility".to_string(),
                        "{msg}"
                    }
                },
                None => rsx! {
                    SkeletonCard { lines: 2 }
                },
            }
        }
    }
}

#[component]
fn EligibilityCard(status: Eligibility) -> Element {
    if status.has_profile {
        return rsx! {
            Alert { variant: AlertVariant::Success, title: "You already have a tutor profile".to_string(),
                "An administrator will review it and update your role."
            }
        };
    }

    if !status.eligible {
        let reason = status
            .reason
            .unwrap_or_else(|| "Your account does not meet the requirements yet.".to_string());
        return rsx! {
            Alert { variant: AlertVariant::Info, title: "Not eligible yet".to_string(), "{reason}" }
        };
    }

    rsx! {
        Card {
            CardHeader {
                CardTitle { "You can apply" }
                CardDescription {
                    "An administrator will upgrade your account to tutor. Once that happens, "
                    "Create Profile appears in your menu."
                }
            }
            CardContent {
                p { class: "muted", "Have these ready for your profile:" }
                ul { class: "muted",
                    li { "A short bio (at least 20 characters)" }
                    li { "Your hourly rate" }
                    li { "At least one subject" }
                }
            }
            CardFooter {
                Link { to: Route::FindTutor {}, class: "dashboard-action-link", "See the subjects on offer" }
            }
        }
    }
}
