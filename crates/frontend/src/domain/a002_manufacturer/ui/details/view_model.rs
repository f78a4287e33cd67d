use crate::domain::a002_manufacturer::api::{MANUFACTURERS, MESSAGES};
use crate::shared::form_state::{save_record, SubmitState};
use contracts::domain::a002_manufacturer::aggregate::Manufacturer;
use contracts::domain::a002_manufacturer::form::ManufacturerForm;
use contracts::domain::common::{EntityId, FieldErrors};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct ManufacturerDetailsViewModel {
    pub form: RwSignal<ManufacturerForm>,
    pub errors: RwSignal<FieldErrors>,
    pub submit: RwSignal<SubmitState>,
    editing: StoredValue<Option<EntityId>>,
}

impl ManufacturerDetailsViewModel {
    pub fn new(record: Option<Manufacturer>) -> Self {
        Self {
            form: RwSignal::new(record.as_ref().map(ManufacturerForm::from).unwrap_or_default()),
            errors: RwSignal::new(FieldErrors::new()),
            submit: RwSignal::new(SubmitState::default()),
            editing: StoredValue::new(record.map(|m| m.id)),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing.with_value(Option::is_some)
    }

    pub fn field_error(&self, field: &'static str) -> Option<String> {
        self.errors.with(|e| e.get(field).cloned())
    }

    /// Text input bound to one form field
    pub fn bind(
        &self,
        get: fn(&ManufacturerForm) -> &String,
        set: fn(&mut ManufacturerForm) -> &mut String,
    ) -> (Signal<String>, Callback<String>) {
        let form = self.form;
        (
            Signal::derive(move || form.with(|f| get(f).clone())),
            Callback::new(move |value: String| form.update(|f| *set(f) = value)),
        )
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        if self.submit.try_update(|s| s.try_begin()) != Some(true) {
            return;
        }
        let payload = match self.form.with_untracked(ManufacturerForm::to_payload) {
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
            let result = save_record(&MANUFACTURERS, editing.as_ref(), &payload, &MESSAGES).await;
            let error = result.err();
            let saved = error.is_none();
            submit.try_update(|s| s.finish(error));
            if saved {
                on_saved.run(());
            }
        });
    }
}
