use crate::shared::api_utils::{get_json, with_query, ApiError};
use crate::shared::resource::{HttpResource, ResourceMessages};
use contracts::domain::a005_catalog_product::aggregate::{CatalogProduct, CatalogProductWithDetails};
use contracts::domain::a005_catalog_product::form::CatalogProductPayload;
use contracts::shared::list_query::ListQuery;

pub type CatalogProductApi = HttpResource<CatalogProduct, CatalogProductPayload>;

pub const CATALOG_PRODUCTS: CatalogProductApi = HttpResource::new("/products-catalog");

pub const MESSAGES: ResourceMessages = ResourceMessages {
    load: "Error al cargar los productos",
    create: "Error al crear el producto",
    update: "Error al actualizar el producto",
    delete: "Error al eliminar el producto",
};

/// Catalog products with brand and category names
pub async fn fetch_with_details(query: &ListQuery) -> Result<Vec<CatalogProductWithDetails>, ApiError> {
    get_json(&with_query(&CATALOG_PRODUCTS.sub_path("with-details"), query)?).await
}
