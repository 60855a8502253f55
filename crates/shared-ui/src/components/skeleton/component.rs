use dioxus::prelude::*;

/// Pulsing placeholder shown while a server function is pending.
#[component]
pub fn Skeleton(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let base = vec![Attribute::new("class", "skeleton", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
        }
    }
}

/// A stack of skeleton lines sized like a card body.
#[component]
pub fn SkeletonCard(#[props(default = 3)] lines: usize) -> Element {
    rsx! {
        div { class: "skeleton-card",
            Skeleton { class: "skeleton-title" }
            for i in 0..lines {
                Skeleton { key: "{i}", class: "skeleton-line" }
            }
        }
    }
}
