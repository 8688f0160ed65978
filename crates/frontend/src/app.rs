use leptos::prelude::*;

use crate::domain::personnel::ui::list::PersonnelList;
use crate::domain::schedule::ui::build::ScheduleBuildPage;
use crate::domain::schedule::ui::list::ScheduleList;
use crate::layout::{NavBar, Page};

#[component]
pub fn App() -> impl IntoView {
    let (page, set_page) = signal(Page::Personnel);

    view! {
        <NavBar page=page on_navigate=Callback::new(move |p| set_page.set(p)) />
        <main class="content">
            {move || match page.get() {
                Page::Personnel => view! { <PersonnelList /> }.into_any(),
                Page::Schedules => view! { <ScheduleList /> }.into_any(),
                Page::Build => view! { <ScheduleBuildPage /> }.into_any(),
            }}
        </main>
    }
}
