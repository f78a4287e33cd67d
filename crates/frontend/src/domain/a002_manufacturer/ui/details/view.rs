use super::view_model::ManufacturerDetailsViewModel;
use crate::shared::components::form_field::TextField;
use crate::shared::components::modal::Modal;
use contracts::domain::a002_manufacturer::aggregate::Manufacturer;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ManufacturerDetails(
    record: Option<Manufacturer>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ManufacturerDetailsViewModel::new(record);
    let (title, subtitle) = if vm.is_edit_mode() {
        ("Editar Fabricante", "Modifica la información del fabricante.")
    } else {
        ("Crear Fabricante", "Registra un nuevo fabricante de productos.")
    };
    let submitting = Signal::derive(move || vm.submit.with(|s| s.submitting));

    let (name, set_name) = vm.bind(|f| &f.name, |f| &mut f.name);
    let (tax_id, set_tax_id) = vm.bind(|f| &f.tax_id, |f| &mut f.tax_id);
    let (country, set_country) = vm.bind(|f| &f.country, |f| &mut f.country);
    let (website, set_website) = vm.bind(|f| &f.website, |f| &mut f.website);
    let (business, set_business) = vm.bind(|f| &f.main_business_line, |f| &mut f.main_business_line);

    view! {
        <Modal title=title subtitle=subtitle on_close=on_cancel>
            {move || vm.submit.with(|s| s.error.clone()).map(|e| view! {
                <div class="warning-box warning-box--error">{e}</div>
            })}

            <div class="detail-form">
                <TextField
                    id="manufacturer-name"
                    label="Nombre *"
                    placeholder="Ej: Nike Inc."
                    value=name
                    on_input=set_name
                    error=Signal::derive(move || vm.field_error("name"))
                />
                <div class="form__row">
                    <TextField
                        id="manufacturer-tax-id"
                        label="ID Fiscal"
                        placeholder="Ej: 76.123.456-7"
                        value=tax_id
                        on_input=set_tax_id
                        error=Signal::derive(move || vm.field_error("tax_id"))
                    />
                    <TextField
                        id="manufacturer-country"
                        label="País"
                        placeholder="Ej: Chile"
                        value=country
                        on_input=set_country
                        error=Signal::derive(move || vm.field_error("country"))
                    />
                </div>
                <TextField
                    id="manufacturer-website"
                    label="Sitio Web"
                    input_type="url"
                    placeholder="https://www.ejemplo.com"
                    value=website
                    on_input=set_website
                    error=Signal::derive(move || vm.field_error("website"))
                />
                <TextField
                    id="manufacturer-business"
                    label="Giro de Negocio"
                    placeholder="Ej: Calzado deportivo"
                    value=business
                    on_input=set_business
                    error=Signal::derive(move || vm.field_error("main_business_line"))
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
