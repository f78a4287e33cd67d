use crate::domain::common::{Entity, EntityId};
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// Marca; `product_count` is derived by the backend and read-only here
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub manufacturer_id: Option<EntityId>,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default)]
    pub product_count: u32,
}

/// Row of `GET /brands/with-manufacturer`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandWithManufacturer {
    #[serde(flatten)]
    pub brand: Brand,
    #[serde(default)]
    pub manufacturer_name: Option<String>,
    #[serde(default)]
    pub manufacturer_country: Option<String>,
}

impl Entity for Brand {
    fn id(&self) -> &EntityId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn dependent_count(&self) -> u32 {
        self.product_count
    }

    fn element_name() -> &'static str {
        "Marca"
    }

    fn list_name() -> &'static str {
        "Marcas"
    }
}

impl Entity for BrandWithManufacturer {
    fn id(&self) -> &EntityId {
        &self.brand.id
    }

    fn name(&self) -> &str {
        &self.brand.name
    }

    fn dependent_count(&self) -> u32 {
        self.brand.product_count
    }

    fn element_name() -> &'static str {
        Brand::element_name()
    }

    fn list_name() -> &'static str {
        Brand::list_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_joined_row() {
        let b: BrandWithManufacturer = serde_json::from_str(
            r#"{"id":2,"name":"Adidas","manufacturer_id":5,"active":false,
                "product_count":3,"manufacturer_name":"Adidas AG"}"#,
        )
        .unwrap();
        assert_eq!(b.brand.manufacturer_id, Some(EntityId::from(5)));
        assert_eq!(b.dependent_count(), 3);
        assert_eq!(b.manufacturer_country, None);
    }
}
