use crate::domain::a004_store::api::{MESSAGES, STORES};
use crate::shared::form_state::{save_record, SubmitState};
use contracts::domain::a004_store::aggregate::Store;
use contracts::domain::a004_store::form::StoreForm;
use contracts::domain::common::{EntityId, FieldErrors};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel for the store form
#[derive(Clone, Copy)]
pub struct StoreDetailsViewModel {
    pub form: RwSignal<StoreForm>,
    pub errors: RwSignal<FieldErrors>,
    pub submit: RwSignal<SubmitState>,
    editing: StoredValue<Option<EntityId>>,
}

impl StoreDetailsViewModel {
    pub fn new(record: Option<Store>) -> Self {
        let form = record.as_ref().map(StoreForm::from).unwrap_or_default();
        Self {
            form: RwSignal::new(form),
            errors: RwSignal::new(FieldErrors::new()),
            submit: RwSignal::new(SubmitState::default()),
            editing: StoredValue::new(record.map(|s| s.id)),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing.with_value(Option::is_some)
    }

    pub fn field_error(&self, field: &'static str) -> Option<String> {
        self.errors.with(|e| e.get(field).cloned())
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        if self.submit.try_update(|s| s.try_begin()) != Some(true) {
            return;
        }
        let payload = match self.form.with_untracked(StoreForm::to_payload) {
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
            match save_record(&STORES, editing.as_ref(), &payload, &MESSAGES).await {
                Ok(saved) => {
                    log::info!("store {} saved", saved.id);
                    submit.try_update(|s| s.finish(None));
                    on_saved.run(());
                }
                Err(message) => {
                    submit.try_update(|s| s.finish(Some(message)));
                }
            }
        });
    }
}
