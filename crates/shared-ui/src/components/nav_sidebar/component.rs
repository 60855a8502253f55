use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaRightFromBracket;
use dioxus_free_icons::Icon;
use shared_types::RouteGroup;

use crate::components::avatar::Avatar;

/// Who the sidebar belongs to, shown in its footer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SidebarUser {
    pub display_name: String,
    pub role_label: String,
    pub initials: String,
    pub image: Option<String>,
}

/// Role-based dashboard sidebar.
///
/// Renders `groups` in order, marks the link whose url equals `active_url`,
/// and reports clicks through `on_navigate` so the host router can handle
/// them. An empty `groups` slice renders a notice instead of links.
#[component]
pub fn NavSidebar(
    brand: String,
    groups: &'static [RouteGroup],
    active_url: String,
    #[props(default)] user: Option<SidebarUser>,
    on_navigate: EventHandler<&'static str>,
    #[props(default)] on_sign_out: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        aside { class: "nav-sidebar",
            div { class: "nav-sidebar-brand", "{brand}" }
            nav { class: "nav-sidebar-groups",
                if groups.is_empty() {
                    p { class: "nav-sidebar-empty", "No navigation is available for your account yet." }
                }
                for group in groups.iter() {
                    section { key: "{group.title}", class: "nav-group",
                        h4 { class: "nav-group-title", "{group.title}" }
                        ul { class: "nav-group-items",
                            for item in group.items.iter() {
                                li { key: "{item.url}",
                                    a {
                                        class: "nav-link",
                                        href: item.url,
                                        "data-active": if item.url == active_url { "true" } else { "false" },
                                        onclick: move |evt: MouseEvent| {
                                            evt.prevent_default();
                                            on_navigate.call(item.url);
                                        },
                                        "{item.title}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
            if let Some(user) = user {
                div { class: "nav-sidebar-user",
                    Avatar {
                        initials: user.initials.clone(),
                        image: user.image.clone(),
                        alt: user.display_name.clone(),
                    }
                    div { class: "nav-sidebar-user-text",
                        span { class: "nav-sidebar-user-name", "{user.display_name}" }
                        span { class: "nav-sidebar-user-role", "{user.role_label}" }
                    }
                    if let Some(handler) = on_sign_out {
                        button {
                            class: "nav-sidebar-sign-out",
                            r#type: "button",
                            title: "Sign out",
                            onclick: move |_| handler.call(()),
                            Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                        }
                    }
                }
            }
        }
    }
}
