use crate::domain::a003_brand::api::{BRANDS, MESSAGES};
use crate::shared::form_state::{save_record, SubmitState};
use contracts::domain::a003_brand::aggregate::Brand;
use contracts::domain::a003_brand::form::BrandForm;
use contracts::domain::common::entity::NONE_OPTION;
use contracts::domain::common::{EntityId, FieldErrors};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct BrandDetailsViewModel {
    pub form: RwSignal<BrandForm>,
    pub errors: RwSignal<FieldErrors>,
    pub submit: RwSignal<SubmitState>,
    editing: StoredValue<Option<EntityId>>,
}

impl BrandDetailsViewModel {
    pub fn new(record: Option<Brand>) -> Self {
        Self {
            form: RwSignal::new(record.as_ref().map(BrandForm::from).unwrap_or_default()),
            errors: RwSignal::new(FieldErrors::new()),
            submit: RwSignal::new(SubmitState::default()),
            editing: StoredValue::new(record.map(|b| b.id)),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing.with_value(Option::is_some)
    }

    pub fn field_error(&self, field: &'static str) -> Option<String> {
        self.errors.with(|e| e.get(field).cloned())
    }

    /// Picker value of the chosen manufacturer
    pub fn manufacturer_value(&self) -> String {
        self.form.with(|f| {
            f.manufacturer_id
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_else(|| NONE_OPTION.to_string())
        })
    }

    pub fn set_manufacturer(&self, value: String) {
        self.form
            .update(|f| f.manufacturer_id = EntityId::from_picker(&value));
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        if self.submit.try_update(|s| s.try_begin()) != Some(true) {
            return;
        }
        let payload = match self.form.with_untracked(BrandForm::to_payload) {
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
            let result = save_record(&BRANDS, editing.as_ref(), &payload, &MESSAGES).await;
            let error = result.err();
            let saved = error.is_none();
            submit.try_update(|s| s.finish(error));
            if saved {
                on_saved.run(());
            }
        });
    }
}
