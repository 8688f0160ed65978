use leptos::prelude::*;

/// Top-level pages reachable from the nav bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Personnel,
    Schedules,
    Build,
}

impl Page {
    pub fn label(&self) -> &'static str {
        match self {
            Page::Personnel => "Personnel",
            Page::Schedules => "Schedules",
            Page::Build => "Build Schedule",
        }
    }

    pub fn all() -> [Page; 3] {
        [Page::Personnel, Page::Schedules, Page::Build]
    }
}

#[component]
#[allow(non_snake_case)]
pub fn NavBar(
    page: ReadSignal<Page>,
    on_navigate: Callback<Page>,
) -> impl IntoView {
    view! {
        <nav class="navbar">
            <span class="navbar__brand">{"Squadron Scheduling"}</span>
            <div class="navbar__links">
                {Page::all().into_iter().map(|p| {
                    view! {
                        <button
                            class="navbar__link"
                            class:navbar__link--active=move || page.get() == p
                            on:click=move |_| on_navigate.run(p)
                        >
                            {p.label()}
                        </button>
                    }
                }).collect_view()}
            </div>
        </nav>
    }
}
