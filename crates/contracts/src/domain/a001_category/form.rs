use super::aggregate::Category;
use crate::domain::common::validation::{self, FieldErrors, FormError, MSG_NAME_REQUIRED};
use crate::domain::common::EntityId;
use serde::{Deserialize, Serialize};

/// Raw input of the category dialog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryForm {
    pub name: String,
    pub description: String,
    pub parent_id: Option<EntityId>,
    pub active: bool,
}

impl Default for CategoryForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            parent_id: None,
            active: true,
        }
    }
}

impl From<&Category> for CategoryForm {
    fn from(c: &Category) -> Self {
        Self {
            name: c.name.clone(),
            description: c.description.clone().unwrap_or_default(),
            parent_id: c.parent_id.clone(),
            active: c.active,
        }
    }
}

/// Body of `POST /categories` and `PUT /categories/{id}`.
///
/// `description` and `parent_id` are always present and sent as `null` when
/// empty: the backend clears them on update only when explicitly null.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryPayload {
    pub name: String,
    pub description: Option<String>,
    pub parent_id: Option<EntityId>,
    pub active: bool,
}

impl CategoryForm {
    pub fn to_payload(&self) -> Result<CategoryPayload, FormError> {
        let mut errors = FieldErrors::new();
        let name = validation::required(
            &mut errors,
            "name",
            &self.name,
            100,
            MSG_NAME_REQUIRED,
            "Máximo 100 caracteres",
        );
        let description = validation::optional(
            &mut errors,
            "description",
            &self.description,
            500,
            "Máximo 500 caracteres",
        );
        validation::finish(
            errors,
            CategoryPayload {
                name,
                description,
                parent_id: self.parent_id.clone(),
                active: self.active,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn whitespace_description_is_sent_as_null() {
        let form = CategoryForm {
            name: "Bebidas".into(),
            description: "   ".into(),
            ..Default::default()
        };
        let payload = serde_json::to_value(form.to_payload().unwrap()).unwrap();
        assert_eq!(
            payload,
            json!({"name": "Bebidas", "description": null, "parent_id": null, "active": true})
        );
    }

    #[test]
    fn parent_and_description_are_kept() {
        let form = CategoryForm {
            name: " Jugos ".into(),
            description: " Naturales ".into(),
            parent_id: Some(EntityId::from("c1")),
            active: false,
        };
        let payload = form.to_payload().unwrap();
        assert_eq!(payload.name, "Jugos");
        assert_eq!(payload.description.as_deref(), Some("Naturales"));
        assert_eq!(payload.parent_id, Some(EntityId::from("c1")));
    }

    #[test]
    fn name_limits() {
        let blank = CategoryForm::default().to_payload().unwrap_err();
        assert_eq!(
            blank.field_errors().unwrap().get("name").map(String::as_str),
            Some("El nombre es requerido")
        );

        let long = CategoryForm {
            name: "x".repeat(101),
            description: "y".repeat(501),
            ..Default::default()
        };
        let errors = long.to_payload().unwrap_err();
        let errors = errors.field_errors().unwrap();
        assert!(errors.contains_key("name"));
        assert!(errors.contains_key("description"));
    }
}
