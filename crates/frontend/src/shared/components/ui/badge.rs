use leptos::prelude::*;

/// Visual weight of a badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Success,
    Info,
    Warning,
    Neutral,
}

impl BadgeVariant {
    pub fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Success => "badge--success",
            BadgeVariant::Info => "badge--info",
            BadgeVariant::Warning => "badge--warning",
            BadgeVariant::Neutral => "badge--neutral",
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn Badge(
    #[prop(into)] variant: Signal<BadgeVariant>,
    children: Children,
) -> impl IntoView {
    view! {
        <span class=move || format!("badge {}", variant.get().class())>
            {children()}
        </span>
    }
}
