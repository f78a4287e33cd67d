use crate::shared::api_utils::{get_json, ApiError};
use crate::shared::resource::{HttpResource, ResourceMessages};
use contracts::domain::a001_category::aggregate::{Category, CategoryTreeNode};
use contracts::domain::a001_category::form::CategoryPayload;

pub type CategoryApi = HttpResource<Category, CategoryPayload>;

pub const CATEGORIES: CategoryApi = HttpResource::new("/categories");

pub const MESSAGES: ResourceMessages = ResourceMessages {
    load: "Error al cargar las categorías",
    create: "Error al crear la categoría",
    update: "Error al actualizar la categoría",
    delete: "Error al eliminar la categoría",
};

/// Whole category hierarchy, roots first
pub async fn fetch_tree() -> Result<Vec<CategoryTreeNode>, ApiError> {
    get_json(&CATEGORIES.sub_path("tree")).await
}
