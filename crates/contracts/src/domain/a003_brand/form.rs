use super::aggregate::Brand;
use crate::domain::common::validation::{self, FieldErrors, FormError, MSG_NAME_REQUIRED};
use crate::domain::common::EntityId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandForm {
    pub name: String,
    pub manufacturer_id: Option<EntityId>,
    pub active: bool,
}

impl Default for BrandForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            manufacturer_id: None,
            active: true,
        }
    }
}

impl From<&Brand> for BrandForm {
    fn from(b: &Brand) -> Self {
        Self {
            name: b.name.clone(),
            manufacturer_id: b.manufacturer_id.clone(),
            active: b.active,
        }
    }
}

/// Body of `POST/PUT /brands`; `manufacturer_id` is sent only when chosen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrandPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer_id: Option<EntityId>,
    pub active: bool,
}

impl BrandForm {
    pub fn to_payload(&self) -> Result<BrandPayload, FormError> {
        let mut errors = FieldErrors::new();
        let name = validation::required(
            &mut errors,
            "name",
            &self.name,
            255,
            MSG_NAME_REQUIRED,
            "El nombre no puede exceder 255 caracteres",
        );
        validation::finish(
            errors,
            BrandPayload {
                name,
                manufacturer_id: self.manufacturer_id.clone(),
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
    fn no_manufacturer_omits_key() {
        let form = BrandForm {
            name: "Nike".into(),
            manufacturer_id: EntityId::from_picker("none"),
            active: true,
        };
        let payload = serde_json::to_value(form.to_payload().unwrap()).unwrap();
        assert_eq!(payload, json!({"name": "Nike", "active": true}));
    }

    #[test]
    fn chosen_manufacturer_is_sent() {
        let form = BrandForm {
            name: "Adidas".into(),
            manufacturer_id: Some(EntityId::from(5)),
            active: false,
        };
        let payload = serde_json::to_value(form.to_payload().unwrap()).unwrap();
        assert_eq!(payload["manufacturer_id"], json!("5"));
    }

    #[test]
    fn name_over_255_is_rejected() {
        let form = BrandForm {
            name: "n".repeat(256),
            ..Default::default()
        };
        let err = form.to_payload().unwrap_err();
        assert_eq!(
            err.field_errors().unwrap().get("name").map(String::as_str),
            Some("El nombre no puede exceder 255 caracteres")
        );
    }
}
