use super::view_model::CatalogProductDetailsViewModel;
use crate::shared::components::form_field::{CheckboxField, PickerField, TextAreaField, TextField};
use crate::shared::components::modal::Modal;
use contracts::domain::a005_catalog_product::aggregate::CatalogProduct;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn CatalogProductDetails(
    record: Option<CatalogProduct>,
    #[prop(into)]
    brands: Signal<Vec<(String, String)>>,
    #[prop(into)]
    categories: Signal<Vec<(String, String)>>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = CatalogProductDetailsViewModel::new(record);
    let (title, subtitle) = if vm.is_edit_mode() {
        ("Editar Producto", "Modifica la información del producto del catálogo.")
    } else {
        ("Crear Producto", "Registra un nuevo producto único en el catálogo.")
    };
    let submitting = Signal::derive(move || vm.submit.with(|s| s.submitting));

    view! {
        <Modal title=title subtitle=subtitle on_close=on_cancel>
            {move || vm.submit.with(|s| s.error.clone()).map(|e| view! {
                <div class="warning-box warning-box--error">{e}</div>
            })}

            <div class="detail-form">
                <TextField
                    id="catalog-name"
                    label="Nombre *"
                    placeholder="Ej: Zapatilla Air Max 90"
                    value=Signal::derive(move || vm.form.with(|f| f.name.clone()))
                    on_input=Callback::new(move |v: String| vm.form.update(|f| f.name = v))
                    error=Signal::derive(move || vm.field_error("name"))
                />
                <TextField
                    id="catalog-sku"
                    label="SKU"
                    placeholder="Ej: NK-AM90-001"
                    value=Signal::derive(move || vm.form.with(|f| f.sku.clone()))
                    on_input=Callback::new(move |v: String| vm.form.update(|f| f.sku = v))
                    error=Signal::derive(move || vm.field_error("sku"))
                />
                <div class="form__row">
                    <PickerField
                        id="catalog-brand"
                        label="Marca"
                        none_label="Sin marca"
                        value=Signal::derive(move || vm.brand_value())
                        options=brands
                        on_change=Callback::new(move |v: String| vm.set_brand(v))
                    />
                    <PickerField
                        id="catalog-category"
                        label="Categoría"
                        none_label="Sin categoría"
                        value=Signal::derive(move || vm.category_value())
                        options=categories
                        on_change=Callback::new(move |v: String| vm.set_category(v))
                    />
                </div>
                <TextAreaField
                    id="catalog-attributes"
                    label="Atributos (JSON)"
                    placeholder="{\"color\": \"negro\", \"talla\": \"42\"}"
                    rows=5
                    class="form__textarea--mono"
                    value=Signal::derive(move || vm.form.with(|f| f.attributes_text.clone()))
                    on_input=Callback::new(move |v: String| vm.form.update(|f| f.attributes_text = v))
                />
                <CheckboxField
                    label="Producto activo"
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
