pub mod wizard;

use chrono::{Duration, NaiveDate};
use contracts::domain::schedule::aggregate::{ShellDuty, ShellFlyingLine};
use leptos::prelude::*;

use crate::shared::date_utils::{format_date, format_time};
use crate::shared::http;
use wizard::{RequestGate, StepData, Wizard};

/// Today in the browser's local time zone.
fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .expect("js Date is a valid date")
}

#[component]
#[allow(non_snake_case)]
pub fn ScheduleBuildPage() -> impl IntoView {
    let (wizard, set_wizard) = signal(Wizard::build_page());
    let (error, set_error) = signal::<Option<String>>(None);
    let (build_message, set_build_message) = signal::<Option<String>>(None);

    let (flying_date, set_flying_date) = signal(today());
    let (duty_date, set_duty_date) = signal(today());
    let (flying_lines, set_flying_lines) = signal::<Vec<ShellFlyingLine>>(Vec::new());
    let (duties, set_duties) = signal::<Vec<ShellDuty>>(Vec::new());

    // One gate per scope: a shell response is applied only while it is
    // still the latest request issued for that scope.
    let flying_gate = StoredValue::new(RequestGate::new());
    let duty_gate = StoredValue::new(RequestGate::new());

    let load_flying = move |date: NaiveDate| {
        let token = flying_gate.try_update_value(|g| g.begin()).unwrap_or_default();
        wasm_bindgen_futures::spawn_local(async move {
            let path = format!("/api/flying_shell?date={}", date.format("%Y-%m-%d"));
            let result = http::get_json::<Vec<ShellFlyingLine>>(&path).await;
            if !flying_gate.with_value(|g| g.accepts(token)) {
                log::debug!("dropping stale flying shell response for {date}");
                return;
            }
            match result {
                Ok(lines) => {
                    set_flying_lines.set(lines);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let load_duties = move |date: NaiveDate| {
        let token = duty_gate.try_update_value(|g| g.begin()).unwrap_or_default();
        wasm_bindgen_futures::spawn_local(async move {
            let path = format!("/api/duty_shell?date={}", date.format("%Y-%m-%d"));
            let result = http::get_json::<Vec<ShellDuty>>(&path).await;
            if !duty_gate.with_value(|g| g.accepts(token)) {
                log::debug!("dropping stale duty shell response for {date}");
                return;
            }
            match result {
                Ok(blocks) => {
                    set_duties.set(blocks);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let load_step = move |data: StepData| match data {
        StepData::FlyingShell => load_flying(flying_date.get_untracked()),
        StepData::DutyShell => load_duties(duty_date.get_untracked()),
        StepData::None => {}
    };

    let prev_next = move |delta: i32| {
        let mut transition = None;
        set_wizard.update(|w| transition = w.prev_next(delta));
        if let Some(t) = transition {
            load_step(t.load);
        }
    };

    // Shift a shell step's reference day and reload it; works no matter
    // which step is currently shown.
    let advance_date = move |scope: StepData, delta_days: i64| match scope {
        StepData::FlyingShell => {
            set_flying_date.update(|d| *d += Duration::days(delta_days));
            load_flying(flying_date.get_untracked());
        }
        StepData::DutyShell => {
            set_duty_date.update(|d| *d += Duration::days(delta_days));
            load_duties(duty_date.get_untracked());
        }
        StepData::None => {}
    };

    let request_build = move || {
        log::info!("schedule build requested");
        set_build_message.set(Some("Build requested.".to_string()));
    };

    let step_menu = move || {
        let current = wizard.get().current();
        wizard
            .get()
            .steps()
            .iter()
            .enumerate()
            .map(|(i, step)| {
                view! {
                    <span
                        class="wizard__menu-item"
                        class:wizard__menu-item--active=move || i == current
                    >
                        {step.label}
                    </span>
                }
            })
            .collect_view()
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Build Schedule"}</h1>
                </div>
            </div>

            <div class="wizard__menu">{step_menu}</div>

            {move || error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="wizard__content">
                {move || match wizard.get().current() {
                    0 => view! {
                        <div class="tab">
                            <p>{"Walk through the shell for the selected days, then build the schedule."}</p>
                        </div>
                    }.into_any(),
                    1 => view! {
                        <div class="tab">
                            <div class="wizard__date-bar">
                                <button class="button button--secondary" on:click=move |_| advance_date(StepData::FlyingShell, -1)>{"<"}</button>
                                <span class="wizard__date">{move || format_date(flying_date.get())}</span>
                                <button class="button button--secondary" on:click=move |_| advance_date(StepData::FlyingShell, 1)>{">"}</button>
                            </div>
                            <table class="table__data table--striped">
                                <thead class="table__head">
                                    <tr>
                                        <th class="table__header-cell">{"Line"}</th>
                                        <th class="table__header-cell">{"Takeoff"}</th>
                                        <th class="table__header-cell">{"Go"}</th>
                                        <th class="table__header-cell">{"Org"}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {move || flying_lines.get().into_iter().map(|line| view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{line.num}</td>
                                            <td class="table__cell">{format_time(line.start_date_time)}</td>
                                            <td class="table__cell">{line.fly_go}</td>
                                            <td class="table__cell">{line.org.name}</td>
                                        </tr>
                                    }).collect_view()}
                                </tbody>
                            </table>
                        </div>
                    }.into_any(),
                    2 => view! {
                        <div class="tab">
                            <div class="wizard__date-bar">
                                <button class="button button--secondary" on:click=move |_| advance_date(StepData::DutyShell, -1)>{"<"}</button>
                                <span class="wizard__date">{move || format_date(duty_date.get())}</span>
                                <button class="button button--secondary" on:click=move |_| advance_date(StepData::DutyShell, 1)>{">"}</button>
                            </div>
                            <table class="table__data table--striped">
                                <thead class="table__head">
                                    <tr>
                                        <th class="table__header-cell">{"Duty"}</th>
                                        <th class="table__header-cell">{"Start"}</th>
                                        <th class="table__header-cell">{"End"}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {move || duties.get().into_iter().map(|block| view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{block.duty.name}</td>
                                            <td class="table__cell">{format_time(block.start_date_time)}</td>
                                            <td class="table__cell">{format_time(block.end_date_time)}</td>
                                        </tr>
                                    }).collect_view()}
                                </tbody>
                            </table>
                        </div>
                    }.into_any(),
                    _ => view! {
                        <div class="tab">
                            <p>{"Review the shell, then submit the build."}</p>
                            {move || build_message.get().map(|m| view! {
                                <p class="wizard__build-message">{m}</p>
                            })}
                        </div>
                    }.into_any(),
                }}
            </div>

            <div class="wizard__nav">
                <Show when=move || wizard.get().chrome().show_prev>
                    <button class="button button--secondary" on:click=move |_| prev_next(-1)>
                        {"Previous"}
                    </button>
                </Show>
                <Show when=move || wizard.get().chrome().show_next>
                    <button class="button button--primary" on:click=move |_| prev_next(1)>
                        {"Next"}
                    </button>
                </Show>
                <Show when=move || wizard.get().chrome().show_build>
                    <button class="button button--primary" on:click=move |_| request_build()>
                        {"Build"}
                    </button>
                </Show>
            </div>
        </div>
    }
}
