use crate::shared::list_state::FILTER_ALL;
use leptos::prelude::*;

/// Toolbar select for one categorical filter; the first option is always
/// "all" with `all_label`
#[component]
pub fn FilterSelect(
    #[prop(into)]
    label: String,
    #[prop(into)]
    all_label: String,
    #[prop(into)]
    value: Signal<String>,
    /// (value, label) pairs
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="filter-select">
            <span class="filter-select__label">{label}</span>
            <select
                class="form__select"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value=FILTER_ALL>{all_label}</option>
                {move || {
                    let current = value.get();
                    options
                        .get()
                        .into_iter()
                        .map(|(option_value, text)| {
                            let selected = option_value == current;
                            view! { <option value=option_value selected=selected>{text}</option> }
                        })
                        .collect_view()
                }}
            </select>
        </label>
    }
}

/// Options of the standard status filter
pub fn status_options(feminine: bool) -> Vec<(String, String)> {
    use crate::shared::list_state::{STATUS_ACTIVE, STATUS_INACTIVE};
    let (active, inactive) = if feminine {
        ("Activas", "Inactivas")
    } else {
        ("Activos", "Inactivos")
    };
    vec![
        (STATUS_ACTIVE.to_string(), active.to_string()),
        (STATUS_INACTIVE.to_string(), inactive.to_string()),
    ]
}
