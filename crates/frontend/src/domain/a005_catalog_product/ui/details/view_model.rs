use crate::domain::a005_catalog_product::api::{CATALOG_PRODUCTS, MESSAGES};
use crate::shared::form_state::{save_record, SubmitState};
use contracts::domain::a005_catalog_product::aggregate::CatalogProduct;
use contracts::domain::a005_catalog_product::form::CatalogProductForm;
use contracts::domain::common::entity::NONE_OPTION;
use contracts::domain::common::{EntityId, FieldErrors};
use leptos::prelude::*;
use leptos::task::spawn_local;

fn picker_value(id: Option<&EntityId>) -> String {
    id.map(ToString::to_string)
        .unwrap_or_else(|| NONE_OPTION.to_string())
}

#[derive(Clone, Copy)]
pub struct CatalogProductDetailsViewModel {
    pub form: RwSignal<CatalogProductForm>,
    pub errors: RwSignal<FieldErrors>,
    pub submit: RwSignal<SubmitState>,
    editing: StoredValue<Option<EntityId>>,
}

impl CatalogProductDetailsViewModel {
    pub fn new(record: Option<CatalogProduct>) -> Self {
        Self {
            form: RwSignal::new(record.as_ref().map(CatalogProductForm::from).unwrap_or_default()),
            errors: RwSignal::new(FieldErrors::new()),
            submit: RwSignal::new(SubmitState::default()),
            editing: StoredValue::new(record.map(|p| p.id)),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing.with_value(Option::is_some)
    }

    pub fn field_error(&self, field: &'static str) -> Option<String> {
        self.errors.with(|e| e.get(field).cloned())
    }

    pub fn brand_value(&self) -> String {
        self.form.with(|f| picker_value(f.brand_id.as_ref()))
    }

    pub fn category_value(&self) -> String {
        self.form.with(|f| picker_value(f.category_id.as_ref()))
    }

    pub fn set_brand(&self, value: String) {
        self.form.update(|f| f.brand_id = EntityId::from_picker(&value));
    }

    pub fn set_category(&self, value: String) {
        self.form.update(|f| f.category_id = EntityId::from_picker(&value));
    }

    /// Invalid attribute JSON is reported as a form-level error; the dialog
    /// stays open with the typed text intact.
    pub fn save_command(&self, on_saved: Callback<()>) {
        if self.submit.try_update(|s| s.try_begin()) != Some(true) {
            return;
        }
        let payload = match self.form.with_untracked(CatalogProductForm::to_payload) {
            Ok(payload) => payload,
            Err(err) => {
                self.errors.set(err.field_errors().cloned().unwrap_or_default());
                self.submit.update(|s| s.reject(&err));
                return;
            }
        };
        self.errors.set(FieldErrors::new());

        let editing = self.editing.get_value();
        let submit = self.submit;
        spawn_local(async move {
            let result = save_record(&CATALOG_PRODUCTS, editing.as_ref(), &payload, &MESSAGES).await;
            let error = result.err();
            let saved = error.is_none();
            submit.try_update(|s| s.finish(error));
            if saved {
                on_saved.run(());
            }
        });
    }
}
