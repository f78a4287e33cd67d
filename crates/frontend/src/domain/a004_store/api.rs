use crate::shared::resource::{HttpResource, ResourceMessages};
use contracts::domain::a004_store::aggregate::Store;
use contracts::domain::a004_store::form::StorePayload;

pub type StoreApi = HttpResource<Store, StorePayload>;

pub const STORES: StoreApi = HttpResource::new("/stores");

pub const MESSAGES: ResourceMessages = ResourceMessages {
    load: "Error al cargar las tiendas",
    create: "Error al crear la tienda",
    update: "Error al actualizar la tienda",
    delete: "Error al eliminar la tienda",
};
