use crate::domain::common::{Entity, EntityId};
use serde::{Deserialize, Serialize};

/// Fabricante: company that owns one or more brands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manufacturer {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub tax_id: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub main_business_line: Option<String>,
}

/// Row of `GET /manufacturers/with-brands`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManufacturerWithBrands {
    #[serde(flatten)]
    pub manufacturer: Manufacturer,
    #[serde(default)]
    pub brand_count: u32,
}

impl Entity for Manufacturer {
    fn id(&self) -> &EntityId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn element_name() -> &'static str {
        "Fabricante"
    }

    fn list_name() -> &'static str {
        "Fabricantes"
    }
}

impl Entity for ManufacturerWithBrands {
    fn id(&self) -> &EntityId {
        &self.manufacturer.id
    }

    fn name(&self) -> &str {
        &self.manufacturer.name
    }

    fn dependent_count(&self) -> u32 {
        self.brand_count
    }

    fn element_name() -> &'static str {
        Manufacturer::element_name()
    }

    fn list_name() -> &'static str {
        Manufacturer::list_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_brands_exposes_dependents() {
        let m: ManufacturerWithBrands = serde_json::from_str(
            r#"{"id":5,"name":"Nestlé","country":"Suiza","brand_count":4}"#,
        )
        .unwrap();
        assert_eq!(m.id().as_str(), "5");
        assert_eq!(m.dependent_count(), 4);
        assert_eq!(m.manufacturer.website, None);
    }

    #[test]
    fn missing_brand_count_defaults_to_zero() {
        let m: ManufacturerWithBrands =
            serde_json::from_str(r#"{"id":"m1","name":"Acme"}"#).unwrap();
        assert_eq!(m.dependent_count(), 0);
    }
}
