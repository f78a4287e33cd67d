//! Two-state confirmation gate in front of single-record deletes

use crate::shared::api_utils::ApiError;
use crate::shared::resource::ResourceApi;
use contracts::domain::common::Entity;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DeleteGate<T> {
    #[default]
    Idle,
    Confirming(T),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    /// Record still has dependents; nothing was sent
    Blocked { dependents: u32 },
    Deleted,
    /// Backend refused or was unreachable; reported on the screen, not the dialog
    Failed(ApiError),
    /// Nothing was pending
    Idle,
}

impl<T: Entity> DeleteGate<T> {
    pub fn request(&mut self, record: T) {
        *self = DeleteGate::Confirming(record);
    }

    pub fn cancel(&mut self) {
        *self = DeleteGate::Idle;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, DeleteGate::Confirming(_))
    }

    pub fn pending(&self) -> Option<&T> {
        match self {
            DeleteGate::Confirming(record) => Some(record),
            DeleteGate::Idle => None,
        }
    }

    pub fn blocked_count(&self) -> u32 {
        self.pending().map(Entity::dependent_count).unwrap_or(0)
    }

    pub fn can_confirm(&self) -> bool {
        self.is_open() && self.blocked_count() == 0
    }
}

/// Confirm the pending delete. The gate returns to idle once the call settles,
/// whether it succeeded or not. A blocked record keeps the dialog open.
pub async fn execute_delete<T, A>(gate: &mut DeleteGate<T>, api: &A) -> DeleteOutcome
where
    T: Entity,
    A: ResourceApi + ?Sized,
{
    let Some(record) = gate.pending() else {
        return DeleteOutcome::Idle;
    };
    let dependents = record.dependent_count();
    if dependents > 0 {
        return DeleteOutcome::Blocked { dependents };
    }
    let id = record.id().clone();
    let outcome = match api.delete(&id).await {
        Ok(()) => {
            log::info!("{} {} deleted", T::element_name(), id);
            DeleteOutcome::Deleted
        }
        Err(err) => {
            log::error!("delete {} {}: {}", T::element_name(), id, err);
            DeleteOutcome::Failed(err)
        }
    };
    gate.cancel();
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::resource::testing::SpyApi;
    use contracts::domain::a001_category::aggregate::Category;
    use contracts::domain::a003_brand::aggregate::Brand;
    use contracts::domain::a004_store::aggregate::Store;
    use contracts::domain::common::EntityId;
    use futures::executor::block_on;

    fn brand(id: i64, name: &str, product_count: u32) -> Brand {
        Brand {
            id: EntityId::from(id),
            name: name.into(),
            manufacturer_id: None,
            active: true,
            product_count,
        }
    }

    #[test]
    fn idle_gate_does_nothing() {
        let api: SpyApi<Brand> = SpyApi::new(vec![]);
        let mut gate: DeleteGate<Brand> = DeleteGate::default();
        assert!(!gate.can_confirm());
        assert_eq!(block_on(execute_delete(&mut gate, &api)), DeleteOutcome::Idle);
        assert!(api.deleted_ids().is_empty());
    }

    #[test]
    fn brand_with_products_is_blocked_without_calling_api() {
        let adidas = brand(2, "Adidas", 3);
        let api = SpyApi::new(vec![adidas.clone()]);
        let mut gate = DeleteGate::default();
        gate.request(adidas);

        assert!(!gate.can_confirm());
        assert_eq!(gate.blocked_count(), 3);
        assert_eq!(
            block_on(execute_delete(&mut gate, &api)),
            DeleteOutcome::Blocked { dependents: 3 }
        );
        assert!(api.deleted_ids().is_empty());
        assert!(gate.is_open());
    }

    #[test]
    fn free_brand_issues_exactly_one_delete() {
        let nike = brand(1, "Nike", 0);
        let api = SpyApi::new(vec![nike.clone(), brand(2, "Adidas", 3)]);
        let mut gate = DeleteGate::default();
        gate.request(nike);

        assert!(gate.can_confirm());
        assert_eq!(block_on(execute_delete(&mut gate, &api)), DeleteOutcome::Deleted);
        assert_eq!(api.deleted_ids(), vec![EntityId::from(1)]);
        assert!(!gate.is_open());
    }

    #[test]
    fn stores_are_never_gated() {
        let store = Store {
            id: EntityId::from(9),
            name: "Paris".into(),
            base_url: "https://paris.cl".into(),
            active: false,
        };
        let api = SpyApi::new(vec![store.clone()]);
        let mut gate = DeleteGate::default();
        gate.request(store);
        assert!(gate.can_confirm());
        assert_eq!(block_on(execute_delete(&mut gate, &api)), DeleteOutcome::Deleted);
    }

    #[test]
    fn failure_is_returned_and_gate_closes() {
        let category = Category {
            id: EntityId::from(4),
            name: "Zapatillas".into(),
            description: None,
            parent_id: Some(EntityId::from(1)),
            active: true,
        };
        let api = SpyApi::new(vec![category.clone()]).failing_on(&[EntityId::from(4)]);
        let mut gate = DeleteGate::default();
        gate.request(category);

        match block_on(execute_delete(&mut gate, &api)) {
            DeleteOutcome::Failed(err) => assert_eq!(err.message_or("Error al eliminar la categoría"), "Conflicto"),
            other => panic!("unexpected outcome {:?}", other),
        }
        assert!(!gate.is_open());
    }

    #[test]
    fn cancel_returns_to_idle() {
        let mut gate = DeleteGate::default();
        gate.request(brand(1, "Nike", 0));
        gate.cancel();
        assert_eq!(gate, DeleteGate::Idle);
    }
}
