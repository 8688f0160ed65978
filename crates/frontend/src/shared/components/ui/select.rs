use leptos::prelude::*;

/// Plain select used inside editable table cells.
/// Options are the displayed values themselves.
#[component]
#[allow(non_snake_case)]
pub fn Select(
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    on_change: Callback<String>,
    /// Option values, shown as-is
    #[prop(into)]
    options: Signal<Vec<String>>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <select
            class=move || format!("form__select {}", additional_class())
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            <For
                each=move || options.get()
                key=|val| val.clone()
                children=move |val| {
                    let val_clone = val.clone();
                    let is_selected = move || value.get() == val_clone;
                    view! {
                        <option value=val.clone() selected=is_selected>
                            {val.clone()}
                        </option>
                    }
                }
            />
        </select>
    }
}
