use super::aggregate::Manufacturer;
use crate::domain::common::validation::{self, FieldErrors, FormError, MSG_NAME_REQUIRED};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ManufacturerForm {
    pub name: String,
    pub tax_id: String,
    pub country: String,
    pub website: String,
    pub main_business_line: String,
}

impl From<&Manufacturer> for ManufacturerForm {
    fn from(m: &Manufacturer) -> Self {
        Self {
            name: m.name.clone(),
            tax_id: m.tax_id.clone().unwrap_or_default(),
            country: m.country.clone().unwrap_or_default(),
            website: m.website.clone().unwrap_or_default(),
            main_business_line: m.main_business_line.clone().unwrap_or_default(),
        }
    }
}

/// Body of `POST/PUT /manufacturers`. Empty optional fields are left out of
/// the JSON entirely so a partial update does not touch them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManufacturerPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_business_line: Option<String>,
}

impl ManufacturerForm {
    pub fn to_payload(&self) -> Result<ManufacturerPayload, FormError> {
        let mut errors = FieldErrors::new();
        let name = validation::required(
            &mut errors,
            "name",
            &self.name,
            255,
            MSG_NAME_REQUIRED,
            "El nombre no puede exceder 255 caracteres",
        );
        let tax_id = validation::optional(
            &mut errors,
            "tax_id",
            &self.tax_id,
            100,
            "El ID fiscal no puede exceder 100 caracteres",
        );
        let country = validation::optional(
            &mut errors,
            "country",
            &self.country,
            100,
            "El país no puede exceder 100 caracteres",
        );
        let website = validation::optional(&mut errors, "website", &self.website, 255, "No puede exceder 255 caracteres");
        if let Some(url) = &website {
            if !validation::is_url_shaped(url) {
                errors.insert("website", "Ingresa una URL válida".to_string());
            }
        }
        let main_business_line = validation::optional(
            &mut errors,
            "main_business_line",
            &self.main_business_line,
            255,
            "No puede exceder 255 caracteres",
        );

        validation::finish(
            errors,
            ManufacturerPayload {
                name,
                tax_id,
                country,
                website,
                main_business_line,
            },
        )
    }
}
