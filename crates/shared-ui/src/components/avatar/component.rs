use dioxus::prelude::*;

/// Round user picture, falling back to initials when there is no image.
#[component]
pub fn Avatar(
    initials: String,
    #[props(default)] image: Option<String>,
    #[props(default)] alt: String,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span { class: "avatar",
            match image {
                Some(src) => rsx! {
                    img { class: "avatar-image", src: "{src}", alt: "{alt}" }
                },
                None => rsx! {
                    span { class: "avatar-fallback", "{initials}" }
                },
            }
        }
    }
}
