//! Confirmation dialog driven by a `DeleteGate`

use crate::shared::components::modal::Modal;
use crate::shared::delete_gate::DeleteGate;
use contracts::domain::common::Entity;
use leptos::prelude::*;
use thaw::*;

/// Renders while the gate is confirming. Records with dependents get a
/// warning and a disabled confirm button; `blocked_message` builds the
/// warning text from the dependents count.
#[component]
pub fn DeleteConfirm<T>(
    gate: RwSignal<DeleteGate<T>>,
    /// Running while the delete call is in flight
    #[prop(into)]
    busy: Signal<bool>,
    on_confirm: Callback<()>,
    #[prop(optional)]
    blocked_message: Option<fn(u32) -> String>,
    /// Extra line shown under the question, e.g. for subcategories
    #[prop(optional)]
    note: Option<fn(&T) -> Option<String>>,
) -> impl IntoView
where
    T: Entity + Clone + Send + Sync + 'static,
{
    let on_cancel = Callback::new(move |_| {
        if !busy.get_untracked() {
            gate.update(|g| g.cancel());
        }
    });

    move || {
        let record = gate.with(|g| g.pending().cloned())?;
        let blocked = record.dependent_count();
        let extra = note.and_then(|f| f(&record));
        let title = format!("Eliminar {}", T::element_name().to_lowercase());

        Some(view! {
            <Modal title=title on_close=on_cancel>
                <p class="delete-confirm__question">
                    {format!("¿Estás seguro de que deseas eliminar \"{}\"? Esta acción no se puede deshacer.", record.name())}
                </p>
                {extra.map(|text| view! { <p class="delete-confirm__note">{text}</p> })}
                {(blocked > 0).then(|| {
                    let text = blocked_message
                        .map(|f| f(blocked))
                        .unwrap_or_else(|| format!("Tiene {} elementos asociados y no se puede eliminar.", blocked));
                    view! {
                        <div class="warning-box warning-box--warning">
                            <span class="warning-box__icon">"⚠"</span>
                            <span class="warning-box__text">{text}</span>
                        </div>
                    }
                })}
                <div class="modal-actions">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_cancel.run(())
                        disabled=busy
                    >
                        "Cancelar"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| on_confirm.run(())
                        disabled=Signal::derive(move || busy.get() || blocked > 0)
                    >
                        {move || if busy.get() { "Eliminando..." } else { "Eliminar" }}
                    </Button>
                </div>
            </Modal>
        })
    }
}

/// Confirmation for deleting the current selection
#[component]
pub fn BulkDeleteConfirm(
    open: RwSignal<bool>,
    #[prop(into)]
    count: Signal<usize>,
    /// Selected records that will be skipped because they have dependents
    #[prop(into)]
    blocked: Signal<usize>,
    #[prop(into)]
    busy: Signal<bool>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    let on_cancel = Callback::new(move |_| open.set(false));

    move || {
        open.get().then(|| {
            let selected = count.get();
            let skipped = blocked.get();
            view! {
                <Modal title="Eliminar seleccionados" on_close=on_cancel>
                    <p class="delete-confirm__question">
                        {format!("¿Eliminar {} registro(s) seleccionados? Esta acción no se puede deshacer.", selected)}
                    </p>
                    {(skipped > 0).then(|| view! {
                        <div class="warning-box warning-box--warning">
                            <span class="warning-box__icon">"⚠"</span>
                            <span class="warning-box__text">
                                {format!("{} registro(s) tienen elementos asociados y se omitirán.", skipped)}
                            </span>
                        </div>
                    })}
                    <div class="modal-actions">
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                            "Cancelar"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| {
                                open.set(false);
                                on_confirm.run(());
                            }
                            disabled=Signal::derive(move || busy.get() || selected == skipped)
                        >
                            "Eliminar"
                        </Button>
                    </div>
                </Modal>
            }
        })
    }
}
