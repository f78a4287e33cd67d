use crate::domain::a001_category::api::{CATEGORIES, MESSAGES};
use crate::shared::form_state::{save_record, SubmitState};
use contracts::domain::a001_category::aggregate::{Category, CategoryTreeNode};
use contracts::domain::a001_category::form::CategoryForm;
use contracts::domain::common::entity::NONE_OPTION;
use contracts::domain::common::{EntityId, FieldErrors};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Parent picker options from the category tree, indented by depth.
/// The edited category and its whole subtree are left out.
pub fn parent_options(tree: &[CategoryTreeNode], editing: Option<&EntityId>) -> Vec<(String, String)> {
    let mut skipping_below: Option<usize> = None;
    let mut out = Vec::new();
    for (depth, category) in CategoryTreeNode::flatten(tree) {
        match skipping_below {
            Some(root) if depth > root => continue,
            _ => skipping_below = None,
        }
        if Some(&category.id) == editing {
            skipping_below = Some(depth);
            continue;
        }
        let indent = "\u{a0}\u{a0}".repeat(depth);
        out.push((category.id.to_string(), format!("{}{}", indent, category.name)));
    }
    out
}

#[derive(Clone, Copy)]
pub struct CategoryDetailsViewModel {
    pub form: RwSignal<CategoryForm>,
    pub errors: RwSignal<FieldErrors>,
    pub submit: RwSignal<SubmitState>,
    editing: StoredValue<Option<EntityId>>,
}

impl CategoryDetailsViewModel {
    pub fn new(record: Option<Category>) -> Self {
        Self {
            form: RwSignal::new(record.as_ref().map(CategoryForm::from).unwrap_or_default()),
            errors: RwSignal::new(FieldErrors::new()),
            submit: RwSignal::new(SubmitState::default()),
            editing: StoredValue::new(record.map(|c| c.id)),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing.with_value(Option::is_some)
    }

    pub fn editing_id(&self) -> Option<EntityId> {
        self.editing.get_value()
    }

    pub fn field_error(&self, field: &'static str) -> Option<String> {
        self.errors.with(|e| e.get(field).cloned())
    }

    pub fn parent_value(&self) -> String {
        self.form.with(|f| {
            f.parent_id
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_else(|| NONE_OPTION.to_string())
        })
    }

    pub fn set_parent(&self, value: String) {
        self.form.update(|f| f.parent_id = EntityId::from_picker(&value));
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        if self.submit.try_update(|s| s.try_begin()) != Some(true) {
            return;
        }
        let payload = match self.form.with_untracked(CategoryForm::to_payload) {
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
            let result = save_record(&CATEGORIES, editing.as_ref(), &payload, &MESSAGES).await;
            let error = result.err();
            let saved = error.is_none();
            submit.try_update(|s| s.finish(error));
            if saved {
                on_saved.run(());
            }
        });
    }
}
