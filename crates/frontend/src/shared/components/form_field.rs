//! Labelled inputs used by the details forms

use contracts::domain::common::entity::NONE_OPTION;
use leptos::prelude::*;

fn field_error(error: Signal<Option<String>>) -> impl IntoView {
    move || error.get().map(|e| view! { <span class="form__error">{e}</span> })
}

#[component]
pub fn TextField(
    #[prop(into)]
    id: String,
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)]
    error: Signal<Option<String>>,
    #[prop(optional, into)]
    placeholder: String,
    /// "text" unless given
    #[prop(optional, into)]
    input_type: Option<String>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label" for=id.clone()>{label}</label>
            <input
                class="form__input"
                class:form__input--invalid=move || error.with(Option::is_some)
                type=input_type.unwrap_or_else(|| "text".to_string())
                id=id
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {field_error(error)}
        </div>
    }
}

#[component]
pub fn TextAreaField(
    #[prop(into)]
    id: String,
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)]
    error: Signal<Option<String>>,
    #[prop(optional, into)]
    placeholder: String,
    #[prop(default = 3)]
    rows: u32,
    /// Extra class for the textarea, e.g. monospace for JSON
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label" for=id.clone()>{label}</label>
            <textarea
                class=format!("form__textarea {}", class)
                id=id
                rows=rows
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {field_error(error)}
        </div>
    }
}

#[component]
pub fn CheckboxField(
    #[prop(into)]
    label: String,
    #[prop(into)]
    checked: Signal<bool>,
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <div class="form__group form__group--checkbox">
            <label class="form__checkbox-wrapper">
                <input
                    type="checkbox"
                    prop:checked=move || checked.get()
                    on:change=move |ev| on_change.run(event_target_checked(&ev))
                />
                <span class="form__checkbox-label">{label}</span>
            </label>
        </div>
    }
}

/// Foreign-key picker. The first option is the "none" sentinel, which maps
/// to `None`.
#[component]
pub fn PickerField(
    #[prop(into)]
    id: String,
    #[prop(into)]
    label: String,
    #[prop(into)]
    none_label: String,
    /// Selected id, or the "none" sentinel
    #[prop(into)]
    value: Signal<String>,
    /// (id, label) pairs
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label" for=id.clone()>{label}</label>
            <select
                class="form__select"
                id=id
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value=NONE_OPTION>{none_label}</option>
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
        </div>
    }
}
