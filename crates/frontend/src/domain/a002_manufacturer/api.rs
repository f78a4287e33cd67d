use crate::shared::api_utils::{get_json, with_query, ApiError};
use crate::shared::resource::{HttpResource, ResourceMessages};
use contracts::domain::a002_manufacturer::aggregate::{Manufacturer, ManufacturerWithBrands};
use contracts::domain::a002_manufacturer::form::ManufacturerPayload;
use contracts::shared::list_query::ListQuery;

pub type ManufacturerApi = HttpResource<Manufacturer, ManufacturerPayload>;

pub const MANUFACTURERS: ManufacturerApi = HttpResource::new("/manufacturers");

pub const MESSAGES: ResourceMessages = ResourceMessages {
    load: "Error al cargar los fabricantes",
    create: "Error al crear el fabricante",
    update: "Error al actualizar el fabricante",
    delete: "Error al eliminar el fabricante",
};

/// Manufacturers with their `brand_count`
pub async fn fetch_with_brands(query: &ListQuery) -> Result<Vec<ManufacturerWithBrands>, ApiError> {
    get_json(&with_query(&MANUFACTURERS.sub_path("with-brands"), query)?).await
}
