use super::aggregate::{Attributes, CatalogProduct};
use crate::domain::common::validation::{self, FieldErrors, FormError, MSG_NAME_REQUIRED};
use crate::domain::common::EntityId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const MSG_ATTRIBUTES_INVALID: &str = "Los atributos deben ser un JSON válido";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogProductForm {
    pub name: String,
    pub sku: String,
    pub brand_id: Option<EntityId>,
    pub category_id: Option<EntityId>,
    /// Free-form JSON text as typed by the user
    pub attributes_text: String,
    pub active: bool,
}

impl Default for CatalogProductForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            sku: String::new(),
            brand_id: None,
            category_id: None,
            attributes_text: String::new(),
            active: true,
        }
    }
}

impl From<&CatalogProduct> for CatalogProductForm {
    fn from(p: &CatalogProduct) -> Self {
        let attributes_text = p
            .attributes
            .as_ref()
            .filter(|a| !a.is_empty())
            .and_then(|a| serde_json::to_string_pretty(a).ok())
            .unwrap_or_default();
        Self {
            name: p.name.clone(),
            sku: p.sku.clone().unwrap_or_default(),
            brand_id: p.brand_id.clone(),
            category_id: p.category_id.clone(),
            attributes_text,
            active: p.active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogProductPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
    pub active: bool,
}

/// Parse the attributes text: blank means "not supplied", anything else must
/// be a JSON object.
pub fn parse_attributes(text: &str) -> Result<Option<Attributes>, FormError> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Ok(Some(map)),
        _ => Err(FormError::Form(MSG_ATTRIBUTES_INVALID.to_string())),
    }
}

impl CatalogProductForm {
    pub fn to_payload(&self) -> Result<CatalogProductPayload, FormError> {
        let mut errors = FieldErrors::new();
        let name = validation::required(
            &mut errors,
            "name",
            &self.name,
            500,
            MSG_NAME_REQUIRED,
            "El nombre no puede exceder 500 caracteres",
        );
        let sku = validation::optional(
            &mut errors,
            "sku",
            &self.sku,
            100,
            "El SKU no puede exceder 100 caracteres",
        );
        let payload = validation::finish(
            errors,
            CatalogProductPayload {
                name,
                sku,
                brand_id: self.brand_id.clone(),
                category_id: self.category_id.clone(),
                attributes: None,
                active: self.active,
            },
        )?;
        Ok(CatalogProductPayload {
            attributes: parse_attributes(&self.attributes_text)?,
            ..payload
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn form(attributes: &str) -> CatalogProductForm {
        CatalogProductForm {
            name: "Leche Entera 1L".into(),
            attributes_text: attributes.into(),
            ..Default::default()
        }
    }

    #[test]
    fn minimal_payload_omits_optional_keys() {
        let payload = serde_json::to_value(form("").to_payload().unwrap()).unwrap();
        assert_eq!(payload, json!({"name": "Leche Entera 1L", "active": true}));
    }

    #[test]
    fn attributes_object_is_parsed() {
        let payload = form(r#"{"volumen": "1L", "grasa": 3.1}"#).to_payload().unwrap();
        let attrs = payload.attributes.unwrap();
        assert_eq!(attrs.get("volumen"), Some(&json!("1L")));
    }

    #[test]
    fn malformed_attributes_are_a_form_error() {
        let err = form("{volumen: 1L").to_payload().unwrap_err();
        assert_eq!(err, FormError::Form(MSG_ATTRIBUTES_INVALID.to_string()));
    }

    #[test]
    fn non_object_attributes_are_rejected() {
        assert!(form("[1, 2]").to_payload().is_err());
        assert!(form("\"texto\"").to_payload().is_err());
    }

    #[test]
    fn field_errors_win_over_attribute_errors() {
        let f = CatalogProductForm {
            name: String::new(),
            attributes_text: "nope".into(),
            ..Default::default()
        };
        assert!(f.to_payload().unwrap_err().field_errors().is_some());
    }

    #[test]
    fn round_trips_existing_attributes_to_text() {
        let product: CatalogProduct = serde_json::from_value(json!({
            "id": 1, "name": "Yogurt", "sku": "Y-1", "brand_id": 2,
            "attributes": {"sabor": "frutilla"}
        }))
        .unwrap();
        let f = CatalogProductForm::from(&product);
        assert_eq!(f.sku, "Y-1");
        assert_eq!(f.brand_id, Some(EntityId::from(2)));
        assert_eq!(parse_attributes(&f.attributes_text).unwrap(), product.attributes);
    }
}
