use dioxus::prelude::*;

/// Multi-line input used for tutor bios.
#[component]
pub fn Textarea(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default)] name: String,
    #[props(default = 5)] rows: u32,
    /// Shows a live character count against this limit.
    #[props(default)]
    max_length: Option<usize>,
    #[props(default)] error: Option<String>,
    #[props(default = false)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "textarea", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let count = value.chars().count();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "textarea-wrapper",
            if !label.is_empty() {
                label { class: "textarea-label", r#for: "{name}", "{label}" }
            }
            textarea {
                id: "{name}",
                name: "{name}",
                rows: "{rows}",
                value: value,
                placeholder: placeholder,
                disabled: disabled,
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
            div { class: "textarea-meta",
                if let Some(message) = error {
                    span { class: "textarea-error", "{message}" }
                }
                if let Some(max) = max_length {
                    span {
                        class: "textarea-count",
                        "data-over": if count > max { "true" } else { "false" },
                        "{count}/{max}"
                    }
                }
            }
        }
    }
}
