use crate::auth::use_auth;
use crate::routes::Route;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBookOpen, FaChalkboardUser, FaMagnifyingGlass};
use dioxus_free_icons::Icon;

/// Public landing page.
#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let signed_in = auth.is_authenticated();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./home.css") }

        div { class: "home-page",
            header { class: "home-nav",
                span { class: "home-brand", "TutorHub" }
                nav { class: "home-nav-links",
                    if signed_in {
                        Link { to: Route::Dashboard {}, class: "home-cta", "Go to dashboard" }
                    } else {
                        Link { to: Route::Login {}, class: "home-nav-link", "Sign in" }
                        Link { to: Route::Register {}, class: "home-cta", "Get started" }
                    }
                }
            }

            section { class: "home-hero",
                h1 { "Learn anything with a tutor who fits you" }
                p { class: "home-hero-sub",
                    "Browse subjects, book experienced tutors, or share what you know by teaching."
                }
                div { class: "home-hero-actions",
                    Link { to: Route::Register {}, class: "home-cta", "Create a free account" }
                    Link { to: Route::Login {}, class: "home-secondary", "I already have an account" }
                }
            }

            section { class: "home-features",
                div { class: "home-feature",
                    Icon { icon: FaMagnifyingGlass, width: 22, height: 22 }
                    h3 { "Find tutors" }
                    p { "Search by subject and compare rates, experience and ratings." }
                }
                div { class: "home-feature",
                    Icon { icon: FaChalkboardUser, width: 22, height: 22 }
                    h3 { "Become a tutor" }
                    p { "Check your eligibility and publish a profile in minutes." }
                }
                div { class: "home-feature",
                    Icon { icon: FaBookOpen, width: 22, height: 22 }
                    h3 { "Track progress" }
                    p { "Tutors see sessions, students and earnings at a glance." }
                }
            }
        }
    }
}
