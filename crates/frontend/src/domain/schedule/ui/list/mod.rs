use contracts::domain::schedule::aggregate::Schedule;
use leptos::prelude::*;

use crate::shared::components::ui::{Badge, BadgeVariant};
use crate::shared::date_utils::{format_date, format_datetime};
use crate::shared::http;

/// Visual affordance for a schedule status. Anything the scheduler emits
/// outside the two known states renders as a warning.
pub fn status_variant(status: &str) -> BadgeVariant {
    match status {
        "Completed" => BadgeVariant::Success,
        "Pending" => BadgeVariant::Info,
        _ => BadgeVariant::Warning,
    }
}

#[derive(Clone, Debug)]
pub struct ScheduleRow {
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub submitted: String,
    pub status: String,
    pub variant: BadgeVariant,
}

impl From<Schedule> for ScheduleRow {
    fn from(s: Schedule) -> Self {
        let variant = status_variant(&s.status);
        Self {
            name: s.name,
            start_date: format_date(s.start_date.date()),
            end_date: format_date(s.end_date.date()),
            submitted: format_datetime(s.submission_date_time),
            status: s.status,
            variant,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ScheduleList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<ScheduleRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match http::get_json::<Vec<Schedule>>("/api/schedules").await {
                Ok(v) => {
                    set_items.set(v.into_iter().map(Into::into).collect());
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Schedules"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {"Refresh"}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Name"}</th>
                            <th class="table__header-cell">{"Start"}</th>
                            <th class="table__header-cell">{"End"}</th>
                            <th class="table__header-cell">{"Submitted"}</th>
                            <th class="table__header-cell">{"Status"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|row| {
                            let variant = row.variant;
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{row.name}</td>
                                    <td class="table__cell">{row.start_date}</td>
                                    <td class="table__cell">{row.end_date}</td>
                                    <td class="table__cell">{row.submitted}</td>
                                    <td class="table__cell">
                                        <Badge variant=Signal::derive(move || variant)>
                                            {row.status}
                                        </Badge>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_statuses_map_to_their_affordance() {
        assert_eq!(status_variant("Completed"), BadgeVariant::Success);
        assert_eq!(status_variant("Pending"), BadgeVariant::Info);
    }

    #[test]
    fn unknown_status_is_warning() {
        assert_eq!(status_variant("Rejected"), BadgeVariant::Warning);
        assert_eq!(status_variant(""), BadgeVariant::Warning);
    }
}
