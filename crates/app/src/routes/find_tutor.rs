use crate::format_helpers::display_outcome;
use dioxus::prelude::*;
use shared_types::Category;
use shared_ui::{
    Alert, AlertVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, Input,
    PageHeader, SkeletonCard,
};

/// Subject browser for students looking for a tutor.
#[component]
pub fn FindTutor() -> Element {
    let mut filter = use_signal(String::new);

    let categories = use_resource(move || async move {
        display_outcome(server::api::get_tutor_categories().await)
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./find_tutor.css") }

        div { class: "page",
            PageHeader {
                title: "Find Tutors".to_string(),
                subtitle: "Pick a subject to see who teaches it".to_string(),
            }

            Input {
                label: "Search subjects",
                name: "subject-filter",
                placeholder: "e.g. Mathematics",
                value: filter(),
                on_input: move |e: FormEvent| filter.set(e.value()),
            }

            match &*categories.read() {
                Some(Ok(list)) => {
                    let shown = matching_categories(list.as_deref().unwrap_or_default(), &filter.read());
                    rsx! {
                        if shown.is_empty() {
                            Alert { variant: AlertVariant::Info, "No subjects match your search." }
                        } else {
                            div { class: "category-grid",
                                for category in shown {
                                    Card { key: "{category.id}",
                                        CardHeader {
                                            CardTitle { "{category.name}" }
                                            if let Some(desc) = &category.description {
                                                CardDescription { "{desc}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                Some(Err(msg)) => rsx! {
                    Alert {
                        variant: AlertVariant::Error,
                        title: "Could not load subjects".to_string(),
                        "{msg}"
                    }
                },
                None => rsx! {
                    SkeletonCard { lines: 3 }
                },
            }

            Card {
                CardContent {
                    p { class: "muted",
                        "Tutor matching is rolling out subject by subject. Check back soon for bookable tutors."
                    }
                }
            }
        }
    }
}

/// Categories whose name contains `query`, case-insensitively. An empty
/// query keeps everything.
fn matching_categories(categories: &[Category], query: &str) -> Vec<Category> {
    let query = query.trim().to_lowercase();
    categories
        .iter()
        .filter(|c| query.is_empty() || c.name.to_lowercase().contains(&query))
        .cloned()
        .collect()
}
