//! Submit guard shared by all details forms

use crate::shared::resource::{ResourceApi, ResourceMessages};
use contracts::domain::common::{EntityId, FormError};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitState {
    pub submitting: bool,
    /// Form-level error shown above the actions; field errors live in the form
    pub error: Option<String>,
}

impl SubmitState {
    /// Returns false while a previous submit is still in flight
    pub fn try_begin(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        self.error = None;
        true
    }

    pub fn finish(&mut self, error: Option<String>) {
        self.submitting = false;
        self.error = error;
    }

    /// Validation failed before anything was sent
    pub fn reject(&mut self, err: &FormError) {
        self.submitting = false;
        self.error = match err {
            FormError::Form(message) => Some(message.clone()),
            FormError::Invalid(_) => None,
        };
    }
}

/// Create when `editing` is None, update otherwise. Errors come back as the
/// message to show inside the form.
pub async fn save_record<A>(
    api: &A,
    editing: Option<&EntityId>,
    payload: &A::Payload,
    messages: &ResourceMessages,
) -> Result<A::Record, String>
where
    A: ResourceApi + ?Sized,
{
    let result = match editing {
        Some(id) => api.update(id, payload).await,
        None => api.create(payload).await,
    };
    result.map_err(|err| {
        log::error!("save failed: {}", err);
        let fallback = if editing.is_some() { messages.update } else { messages.create };
        err.message_or(fallback)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::resource::testing::SpyApi;
    use contracts::domain::a004_store::aggregate::Store;
    use contracts::domain::common::FieldErrors;
    use futures::executor::block_on;

    const STORE_MESSAGES: ResourceMessages = ResourceMessages {
        load: "Error al cargar las tiendas",
        create: "Error al crear la tienda",
        update: "Error al actualizar la tienda",
        delete: "Error al eliminar la tienda",
    };

    #[test]
    fn transport_failure_falls_back_per_operation() {
        let api: SpyApi<Store> = SpyApi::new(vec![]);
        let payload = serde_json::json!({"name": "Paris"});

        let created = block_on(save_record(&api, None, &payload, &STORE_MESSAGES));
        assert_eq!(created.unwrap_err(), "Error al crear la tienda");

        let id = EntityId::from(3);
        let updated = block_on(save_record(&api, Some(&id), &payload, &STORE_MESSAGES));
        assert_eq!(updated.unwrap_err(), "Error al actualizar la tienda");
    }

    #[test]
    fn second_submit_is_refused_until_finished() {
        let mut state = SubmitState::default();
        assert!(state.try_begin());
        assert!(!state.try_begin());
        state.finish(None);
        assert!(state.try_begin());
    }

    #[test]
    fn begin_clears_previous_error() {
        let mut state = SubmitState::default();
        state.try_begin();
        state.finish(Some("Error al crear la marca".into()));
        assert_eq!(state.error.as_deref(), Some("Error al crear la marca"));
        assert!(state.try_begin());
        assert_eq!(state.error, None);
    }

    #[test]
    fn reject_surfaces_only_form_level_errors() {
        let mut state = SubmitState::default();
        state.try_begin();
        state.reject(&FormError::Form("Los atributos deben ser un JSON válido".into()));
        assert!(!state.submitting);
        assert_eq!(state.error.as_deref(), Some("Los atributos deben ser un JSON válido"));

        state.try_begin();
        state.reject(&FormError::Invalid(FieldErrors::new()));
        assert_eq!(state.error, None);
    }
}
