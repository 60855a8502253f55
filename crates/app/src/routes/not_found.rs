use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::routes::Route;

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));
    let signed_in = use_auth().is_authenticated();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "Nothing here" }
                p { class: "not-found-message",
                    code { "{path}" }
                    " is not a TutorHub page."
                }
                if signed_in {
                    Link { to: Route::Dashboard {}, class: "not-found-link", "Back to your dashboard" }
                } else {
                    Link { to: Route::Home {}, class: "not-found-link", "Back to TutorHub" }
                }
            }
        }
    }
}
