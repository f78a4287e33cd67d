use crate::shared::api_utils::{get_json, with_query, ApiError};
use crate::shared::resource::{HttpResource, ResourceMessages};
use contracts::domain::a003_brand::aggregate::{Brand, BrandWithManufacturer};
use contracts::domain::a003_brand::form::BrandPayload;
use contracts::shared::list_query::ListQuery;

pub type BrandApi = HttpResource<Brand, BrandPayload>;

pub const BRANDS: BrandApi = HttpResource::new("/brands");

pub const MESSAGES: ResourceMessages = ResourceMessages {
    load: "Error al cargar las marcas",
    create: "Error al crear la marca",
    update: "Error al actualizar la marca",
    delete: "Error al eliminar la marca",
};

/// Brands joined with their manufacturer's name and country
pub async fn fetch_with_manufacturer(query: &ListQuery) -> Result<Vec<BrandWithManufacturer>, ApiError> {
    get_json(&with_query(&BRANDS.sub_path("with-manufacturer"), query)?).await
}
