use crate::shared::icons::icon;
use leptos::prelude::*;

/// Edit / delete buttons at the end of a table row
#[component]
pub fn RowActions(on_edit: Callback<()>, on_delete: Callback<()>) -> impl IntoView {
    view! {
        <div class="row-actions">
            <button
                class="button button--icon"
                title="Editar"
                on:click=move |e| {
                    e.stop_propagation();
                    on_edit.run(());
                }
            >
                {icon("edit")}
            </button>
            <button
                class="button button--icon button--danger"
                title="Eliminar"
                on:click=move |e| {
                    e.stop_propagation();
                    on_delete.run(());
                }
            >
                {icon("delete")}
            </button>
        </div>
    }
}
