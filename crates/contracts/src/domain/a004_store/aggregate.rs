use crate::domain::common::{Entity, EntityId};
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// Store whose site is scraped. Stores carry no dependents counter: deleting one is never
/// gated, whatever offers reference it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    pub id: EntityId,
    pub name: String,
    pub base_url: String,
    #[serde(default = "default_true")]
    pub active: bool,
}

impl Entity for Store {
    fn id(&self) -> &EntityId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn element_name() -> &'static str {
        "Tienda"
    }

    fn list_name() -> &'static str {
        "Tiendas"
    }
}
