use crate::domain::common::{Entity, EntityId};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

fn default_true() -> bool {
    true
}

/// Open key-value attributes of a catalog product, kept in insertion order.
/// No schema is imposed beyond "it is a JSON object".
pub type Attributes = Map<String, Value>;

/// Unique catalog product, independent of any store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogProduct {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub brand_id: Option<EntityId>,
    #[serde(default)]
    pub category_id: Option<EntityId>,
    #[serde(default)]
    pub attributes: Option<Attributes>,
    #[serde(default = "default_true")]
    pub active: bool,
}

/// Row of `GET /products-catalog/with-details`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogProductWithDetails {
    #[serde(flatten)]
    pub product: CatalogProduct,
    #[serde(default)]
    pub brand_name: Option<String>,
    #[serde(default)]
    pub category_name: Option<String>,
}

impl Entity for CatalogProduct {
    fn id(&self) -> &EntityId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn element_name() -> &'static str {
        "Producto"
    }

    fn list_name() -> &'static str {
        "Catálogo de Productos"
    }
}

impl Entity for CatalogProductWithDetails {
    fn id(&self) -> &EntityId {
        &self.product.id
    }

    fn name(&self) -> &str {
        &self.product.name
    }

    fn element_name() -> &'static str {
        CatalogProduct::element_name()
    }

    fn list_name() -> &'static str {
        CatalogProduct::list_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attributes_keep_insertion_order() {
        let p: CatalogProduct = serde_json::from_str(
            r#"{"id":9,"name":"Leche","attributes":{"volumen":"1L","tipo":"entera","marca_propia":false}}"#,
        )
        .unwrap();
        let keys: Vec<&str> = p
            .attributes
            .as_ref()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["volumen", "tipo", "marca_propia"]);
        assert!(p.active);
    }
}
