use super::view_model::{parent_options, CategoryDetailsViewModel};
use crate::shared::components::form_field::{CheckboxField, PickerField, TextAreaField, TextField};
use crate::shared::components::modal::Modal;
use contracts::domain::a001_category::aggregate::{Category, CategoryTreeNode};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn CategoryDetails(
    record: Option<Category>,
    /// Category hierarchy for the parent picker
    #[prop(into)]
    tree: Signal<Vec<CategoryTreeNode>>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = CategoryDetailsViewModel::new(record);
    let (title, subtitle) = if vm.is_edit_mode() {
        ("Editar Categoría", "Modifica la información de la categoría.")
    } else {
        ("Crear Categoría", "Crea una nueva categoría o subcategoría de productos.")
    };
    let submitting = Signal::derive(move || vm.submit.with(|s| s.submitting));
    let editing = vm.editing_id();
    let options = Signal::derive(move || tree.with(|t| parent_options(t, editing.as_ref())));

    view! {
        <Modal title=title subtitle=subtitle on_close=on_cancel>
            {move || vm.submit.with(|s| s.error.clone()).map(|e| view! {
                <div class="warning-box warning-box--error">{e}</div>
            })}

            <div class="detail-form">
                <TextField
                    id="category-name"
                    label="Nombre *"
                    placeholder="Ej: Zapatillas"
                    value=Signal::derive(move || vm.form.with(|f| f.name.clone()))
                    on_input=Callback::new(move |v: String| vm.form.update(|f| f.name = v))
                    error=Signal::derive(move || vm.field_error("name"))
                />
                <TextAreaField
                    id="category-description"
                    label="Descripción"
                    placeholder="Descripción opcional de la categoría"
                    value=Signal::derive(move || vm.form.with(|f| f.description.clone()))
                    on_input=Callback::new(move |v: String| vm.form.update(|f| f.description = v))
                    error=Signal::derive(move || vm.field_error("description"))
                />
                <PickerField
                    id="category-parent"
                    label="Categoría Padre"
                    none_label="Ninguna (categoría raíz)"
                    value=Signal::derive(move || vm.parent_value())
                    options=options
                    on_change=Callback::new(move |v: String| vm.set_parent(v))
                />
                <CheckboxField
                    label="Categoría activa"
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
