use super::view_model::StoreDetailsViewModel;
use crate::shared::components::modal::Modal;
use contracts::domain::a004_store::aggregate::Store;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn StoreDetails(
    /// None creates a new store
    record: Option<Store>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = StoreDetailsViewModel::new(record);
    let (title, subtitle) = if vm.is_edit_mode() {
        ("Editar Tienda", "Modifica la información de la tienda.")
    } else {
        ("Crear Tienda", "Registra una nueva tienda para el scraping de precios.")
    };
    let submitting = Signal::derive(move || vm.submit.with(|s| s.submitting));

    view! {
        <Modal title=title subtitle=subtitle on_close=on_cancel>
            {move || vm.submit.with(|s| s.error.clone()).map(|e| view! {
                <div class="warning-box warning-box--error">{e}</div>
            })}

            <div class="detail-form">
                <div class="form__group">
                    <label class="form__label" for="store-name">"Nombre *"</label>
                    <input
                        class="form__input"
                        type="text"
                        id="store-name"
                        placeholder="Ej: Falabella"
                        prop:value=move || vm.form.with(|f| f.name.clone())
                        on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                    />
                    {move || vm.field_error("name").map(|e| view! { <span class="form__error">{e}</span> })}
                </div>

                <div class="form__group">
                    <label class="form__label" for="store-url">"URL Base *"</label>
                    <input
                        class="form__input"
                        type="url"
                        id="store-url"
                        placeholder="https://www.tienda.cl"
                        prop:value=move || vm.form.with(|f| f.base_url.clone())
                        on:input=move |ev| vm.form.update(|f| f.base_url = event_target_value(&ev))
                    />
                    {move || vm.field_error("base_url").map(|e| view! { <span class="form__error">{e}</span> })}
                </div>

                <div class="form__group form__group--checkbox">
                    <label class="form__checkbox-wrapper">
                        <input
                            type="checkbox"
                            prop:checked=move || vm.form.with(|f| f.active)
                            on:change=move |ev| vm.form.update(|f| f.active = event_target_checked(&ev))
                        />
                        <span class="form__checkbox-label">"Tienda activa"</span>
                    </label>
                </div>
            </div>

            <div class="modal-actions">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_cancel.run(())
                    disabled=submitting
                >
                    "Cancelar"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.save_command(on_saved)
                    disabled=submitting
                >
                    {move || match (submitting.get(), vm.is_edit_mode()) {
                        (true, _) => "Guardando...",
                        (false, true) => "Actualizar",
                        (false, false) => "Crear",
                    }}
                </Button>
            </div>
        </Modal>
    }
}
