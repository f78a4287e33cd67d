use super::aggregate::Store;
use crate::domain::common::validation::{self, FieldErrors, FormError, MSG_NAME_REQUIRED};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreForm {
    pub name: String,
    pub base_url: String,
    pub active: bool,
}

impl Default for StoreForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            base_url: String::new(),
            active: true,
        }
    }
}

impl From<&Store> for StoreForm {
    fn from(s: &Store) -> Self {
        Self {
            name: s.name.clone(),
            base_url: s.base_url.clone(),
            active: s.active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StorePayload {
    pub name: String,
    pub base_url: String,
    pub active: bool,
}

impl StoreForm {
    pub fn to_payload(&self) -> Result<StorePayload, FormError> {
        let mut errors = FieldErrors::new();
        let name = validation::required(
            &mut errors,
            "name",
            &self.name,
            255,
            MSG_NAME_REQUIRED,
            "El nombre no puede exceder 255 caracteres",
        );
        let base_url = self.base_url.trim().to_string();
        if base_url.is_empty() {
            errors.insert("base_url", "La URL es requerida".to_string());
        } else if !validation::is_url_shaped(&base_url) {
            errors.insert("base_url", "Ingresa una URL válida".to_string());
        }
        validation::finish(
            errors,
            StorePayload {
                name,
                base_url,
                active: self.active,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_required_and_shaped() {
        let missing = StoreForm {
            name: "Lider".into(),
            ..Default::default()
        };
        assert_eq!(
            missing
                .to_payload()
                .unwrap_err()
                .field_errors()
                .unwrap()
                .get("base_url")
                .map(String::as_str),
            Some("La URL es requerida")
        );

        let bad = StoreForm {
            name: "Lider".into(),
            base_url: "lider".into(),
            active: true,
        };
        assert!(bad.to_payload().is_err());
    }

    #[test]
    fn valid_store_payload() {
        let form = StoreForm {
            name: " Jumbo ".into(),
            base_url: " https://www.jumbo.cl ".into(),
            active: false,
        };
        let payload = form.to_payload().unwrap();
        assert_eq!(payload.name, "Jumbo");
        assert_eq!(payload.base_url, "https://www.jumbo.cl");
        assert!(!payload.active);
    }
}
