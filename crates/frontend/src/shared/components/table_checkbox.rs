use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

/// Row selection checkbox
///
/// Clicking the checkbox does not trigger the row click (stop_propagation).
///
/// ```ignore
/// <TableCheckbox
///     checked=Signal::derive(move || state.with(|s| s.is_selected(&id)))
///     on_change=Callback::new(move |_| state.update(|s| s.toggle(&id)))
/// />
/// ```
#[component]
pub fn TableCheckbox(
    checked: Signal<bool>,
    on_change: Callback<bool>,
    #[prop(optional)]
    disabled: bool,
) -> impl IntoView {
    view! {
        <TableCell class="fixed-checkbox-column">
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=checked
                prop:disabled=disabled
                on:click=|e| e.stop_propagation()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </TableCell>
    }
}

/// "Select all" checkbox for the table header
///
/// `checked` must be derived from the current selection and the current
/// filtered rows; the component never stores it. A partial selection of the
/// visible rows shows as indeterminate.
#[component]
pub fn TableHeaderCheckbox(
    #[prop(into)]
    checked: Signal<bool>,
    #[prop(into)]
    indeterminate: Signal<bool>,
    on_change: Callback<bool>,
) -> impl IntoView {
    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    Effect::new(move |_| {
        let partial = indeterminate.get() && !checked.get();
        if let Some(input) = checkbox_ref.get() {
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(partial);
            }
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </TableHeaderCell>
    }
}
