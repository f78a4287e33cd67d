use super::view_model::BrandDetailsViewModel;
use crate::shared::components::form_field::{CheckboxField, PickerField, TextField};
use crate::shared::components::modal::Modal;
use contracts::domain::a003_brand::aggregate::Brand;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn BrandDetails(
    record: Option<Brand>,
    /// (id, name) of every manufacturer; empty when they could not be loaded
    #[prop(into)]
    manufacturers: Signal<Vec<(String, String)>>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = BrandDetailsViewModel::new(record);
    let (title, subtitle) = if vm.is_edit_mode() {
        ("Editar Marca", "Modifica la información de la marca.")
    } else {
        ("Crear Marca", "Registra una nueva marca de productos.")
    };
    let submitting = Signal::derive(move || vm.submit.with(|s| s.submitting));

    view! {
        <Modal title=title subtitle=subtitle on_close=on_cancel>
            {move || vm.submit.with(|s| s.error.clone()).map(|e| view! {
                <div class="warning-box warning-box--error">{e}</div>
            })}

            <div class="detail-form">
                <TextField
                    id="brand-name"
                    label="Nombre *"
                    placeholder="Ej: Nike"
                    value=Signal::derive(move || vm.form.with(|f| f.name.clone()))
                    on_input=Callback::new(move |v: String| vm.form.update(|f| f.name = v))
                    error=Signal::derive(move || vm.field_error("name"))
                />
                <PickerField
                    id="brand-manufacturer"
                    label="Fabricante"
                    none_label="Sin fabricante"
                    value=Signal::derive(move || vm.manufacturer_value())
                    options=manufacturers
                    on_change=Callback::new(move |v: String| vm.set_manufacturer(v))
                />
                <CheckboxField
                    label="Marca activa"
                    checked=Signal::derive(move || vm.form.with(|f| f.active))
                    on_change=Callback::new(move |v: bool| vm.form.update(|f| f.active = v))
                />
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
