use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCircleCheck, FaCircleInfo, FaTriangleExclamation};
use dioxus_free_icons::Icon;

/// Tone of an inline alert.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AlertVariant {
    #[default]
    Info,
    Success,
    Error,
}

impl AlertVariant {
    fn class(&self) -> &'static str {
        match self {
            AlertVariant::Info => "info",
            AlertVariant::Success => "success",
            AlertVariant::Error => "error",
        }
    }
}

/// Inline message box. Failed service calls render through this.
#[component]
pub fn Alert(
    #[props(default)] variant: AlertVariant,
    #[props(default)] title: Option<String>,
    children: Element,
) -> Element {
    let role = if variant == AlertVariant::Error { "alert" } else { "status" };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "alert", "data-style": variant.class(), role: role,
            span { class: "alert-icon",
                match variant {
                    AlertVariant::Info => rsx! { Icon { icon: FaCircleInfo, width: 16, height: 16 } },
                    AlertVariant::Success => rsx! { Icon { icon: FaCircleCheck, width: 16, height: 16 } },
                    AlertVariant::Error => rsx! { Icon { icon: FaTriangleExclamation, width: 16, height: 16 } },
                }
            }
            div { class: "alert-body",
                if let Some(title) = title {
                    p { class: "alert-title", "{title}" }
                }
                div { class: "alert-message", {children} }
            }
        }
    }
}
