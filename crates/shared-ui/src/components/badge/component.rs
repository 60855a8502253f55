use dioxus::prelude::*;
use shared_types::UserRole;

/// Visual variant for badges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    #[default]
    Primary,
    Secondary,
    Success,
    Outline,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "primary",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Success => "success",
            BadgeVariant::Outline => "outline",
        }
    }

    /// Colour used for a marketplace role wherever it is shown.
    pub fn for_role(role: UserRole) -> Self {
        match role {
            UserRole::Admin => BadgeVariant::Primary,
            UserRole::Tutor => BadgeVariant::Success,
            UserRole::Student => BadgeVariant::Secondary,
            UserRole::Unknown => BadgeVariant::Outline,
        }
    }
}

/// Inline pill for roles and availability.
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-style", variant.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            {children}
        }
    }
}

/// A user's role label, coloured by role.
#[component]
pub fn RoleBadge(role: UserRole) -> Element {
    rsx! {
        Badge {
            variant: BadgeVariant::for_role(role),
            "{role.label()}"
        }
    }
}
