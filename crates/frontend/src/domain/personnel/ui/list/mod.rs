pub mod row;

use contracts::domain::personnel::aggregate::Person;
use contracts::domain::personnel::catalog::QualCatalog;
use leptos::prelude::*;

use crate::shared::components::ui::Select;
use crate::shared::http;
use row::PersonRow;

/// Org options offered by the assignment selector; the leading empty
/// entry clears the assignment.
const ORG_OPTIONS: [&str; 6] = ["", "M", "N", "O", "P", "X"];

#[component]
#[allow(non_snake_case)]
pub fn PersonnelList() -> impl IntoView {
    let catalog = QualCatalog::standard();
    let (rows, set_rows) = signal::<Vec<PersonRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = {
        let catalog = catalog.clone();
        move || {
            let catalog = catalog.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match http::get_json::<Vec<Person>>("/api/personnel").await {
                    Ok(persons) => {
                        let rows = persons
                            .into_iter()
                            .map(|p| PersonRow::from_person(p, &catalog))
                            .collect();
                        set_rows.set(rows);
                        set_error.set(None);
                    }
                    Err(e) => set_error.set(Some(e)),
                }
            });
        }
    };

    let handle_edit = move |id: i32| {
        set_rows.update(|rows| {
            if let Some(row) = rows.iter_mut().find(|r| r.id() == id) {
                row.enter_edit();
            }
        });
    };

    // Optimistic save: the row shows the new values immediately; a rejected
    // request rolls them back and surfaces the error.
    let handle_save = move |id: i32| {
        let mut dispatch = None;
        set_rows.update(|rows| {
            if let Some(row) = rows.iter_mut().find(|r| r.id() == id) {
                dispatch = row.save();
            }
        });
        let Some((update, snapshot)) = dispatch else {
            return;
        };
        wasm_bindgen_futures::spawn_local(async move {
            let path = format!("/api/personnel/{}", update.id);
            if let Err(e) = http::put_json(&path, &update).await {
                log::error!("save failed for person {}: {}", update.id, e);
                set_error.set(Some(format!("Save failed: {e}")));
                set_rows.update(|rows| {
                    if let Some(row) = rows.iter_mut().find(|r| r.id() == update.id) {
                        row.rollback(snapshot);
                    }
                });
            }
        });
    };

    let set_org = move |id: i32, org: String| {
        set_rows.update(|rows| {
            if let Some(row) = rows.iter_mut().find(|r| r.id() == id) {
                row.set_edit_org(org);
            }
        });
    };

    let set_mark = move |id: i32, qual: String, marker: String| {
        set_rows.update(|rows| {
            if let Some(row) = rows.iter_mut().find(|r| r.id() == id) {
                row.set_edit_mark(&qual, marker);
            }
        });
    };

    fetch();

    let header_catalog = catalog.clone();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Personnel"}</h1>
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
                            <th class="table__header-cell">{"Assigned Org"}</th>
                            {header_catalog.names().iter().map(|name| view! {
                                <th class="table__header-cell table__header-cell--qual">{name.clone()}</th>
                            }).collect_view()}
                            <th class="table__header-cell">{""}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows.get().into_iter().map(|row| {
                            let id = row.id();
                            let editing = row.is_editing();
                            let org_cell = if editing {
                                let value = row.edit_org().unwrap_or_default().to_string();
                                view! {
                                    <Select
                                        value=Signal::derive(move || value.clone())
                                        options=Signal::derive(|| ORG_OPTIONS.iter().map(|s| s.to_string()).collect::<Vec<_>>())
                                        on_change=Callback::new(move |org| set_org(id, org))
                                    />
                                }.into_any()
                            } else {
                                view! { <span class="table__value">{row.org.clone()}</span> }.into_any()
                            };

                            let qual_cells = if editing {
                                row.edit_marks().unwrap_or_default().iter().cloned().map(|mark| {
                                    let qual_name = mark.name.clone();
                                    let marker = mark.marker.clone();
                                    view! {
                                        <td class="table__cell table__cell--qual">
                                            <Select
                                                value=Signal::derive(move || marker.clone())
                                                options=Signal::derive(|| QualCatalog::marker_options().iter().map(|s| s.to_string()).collect::<Vec<_>>())
                                                on_change=Callback::new(move |m| set_mark(id, qual_name.clone(), m))
                                            />
                                        </td>
                                    }
                                }).collect_view().into_any()
                            } else {
                                row.marks.iter().map(|mark| view! {
                                    <td class="table__cell table__cell--qual">
                                        <span class="table__value">{mark.marker.clone()}</span>
                                    </td>
                                }).collect_view().into_any()
                            };

                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{row.name.clone()}</td>
                                    <td class="table__cell">{org_cell}</td>
                                    {qual_cells}
                                    <td class="table__cell table__cell--actions">
                                        {if editing {
                                            view! {
                                                <button class="button button--primary" on:click=move |_| handle_save(id)>
                                                    {"Save"}
                                                </button>
                                            }.into_any()
                                        } else {
                                            view! {
                                                <button class="button button--secondary" on:click=move |_| handle_edit(id)>
                                                    {"Edit"}
                                                </button>
                                            }.into_any()
                                        }}
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
