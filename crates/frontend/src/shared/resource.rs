//! Generic CRUD client for one backend resource
//!
//! Each aggregate exposes a `HttpResource` for its base path; screens talk to
//! it through the `ResourceApi` trait so list, delete and bulk logic can be
//! exercised against in-memory fakes.

use crate::shared::api_utils::{self, record_path, with_query, ApiError};
use async_trait::async_trait;
use contracts::domain::common::{Entity, EntityId};
use contracts::shared::list_query::ListQuery;
use futures::future::join_all;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashSet;
use std::marker::PhantomData;
use thiserror::Error;

#[async_trait(?Send)]
pub trait ResourceApi {
    type Record: DeserializeOwned + 'static;
    type Payload: Serialize + 'static;

    async fn list(&self, query: &ListQuery) -> Result<Vec<Self::Record>, ApiError>;

    async fn get_by_id(&self, id: &EntityId) -> Result<Self::Record, ApiError>;

    /// Returns the persisted record including server-assigned fields
    async fn create(&self, payload: &Self::Payload) -> Result<Self::Record, ApiError>;

    async fn update(&self, id: &EntityId, payload: &Self::Payload) -> Result<Self::Record, ApiError>;

    async fn delete(&self, id: &EntityId) -> Result<(), ApiError>;
}

/// Fallback messages shown when the backend gives no `detail`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceMessages {
    pub load: &'static str,
    pub create: &'static str,
    pub update: &'static str,
    pub delete: &'static str,
}

/// REST resource rooted at `path` (e.g. "/brands")
pub struct HttpResource<R, P> {
    path: &'static str,
    _marker: PhantomData<fn() -> (R, P)>,
}

impl<R, P> HttpResource<R, P> {
    pub const fn new(path: &'static str) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    pub fn path(&self) -> &'static str {
        self.path
    }

    /// Path of a read variant such as "/brands/with-manufacturer"
    pub fn sub_path(&self, suffix: &str) -> String {
        format!("{}/{}", self.path, suffix)
    }
}

impl<R, P> Clone for HttpResource<R, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R, P> Copy for HttpResource<R, P> {}

#[async_trait(?Send)]
impl<R, P> ResourceApi for HttpResource<R, P>
where
    R: DeserializeOwned + 'static,
    P: Serialize + 'static,
{
    type Record = R;
    type Payload = P;

    async fn list(&self, query: &ListQuery) -> Result<Vec<R>, ApiError> {
        api_utils::get_json(&with_query(self.path, query)?).await
    }

    async fn get_by_id(&self, id: &EntityId) -> Result<R, ApiError> {
        api_utils::get_json(&record_path(self.path, id)).await
    }

    async fn create(&self, payload: &P) -> Result<R, ApiError> {
        api_utils::post_json(self.path, payload).await
    }

    async fn update(&self, id: &EntityId, payload: &P) -> Result<R, ApiError> {
        api_utils::put_json(&record_path(self.path, id), payload).await
    }

    async fn delete(&self, id: &EntityId) -> Result<(), ApiError> {
        api_utils::delete(&record_path(self.path, id)).await
    }
}

/// Aggregate outcome of a bulk delete; reported once, never per record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BulkDeleteError {
    #[error("No se pudieron eliminar {failed} de {total} registros seleccionados")]
    Failed { failed: usize, total: usize },
    #[error("{blocked} registro(s) tienen elementos asociados y no se eliminaron")]
    Blocked { blocked: usize },
    #[error("No se pudieron eliminar {failed} de {total} registros seleccionados; {blocked} tienen elementos asociados")]
    FailedAndBlocked {
        failed: usize,
        total: usize,
        blocked: usize,
    },
}

/// Split a selection into ids that may be deleted and the number of selected
/// records held back because they still have dependents. Ids no longer present
/// in `items` carry no dependents information and are attempted.
pub fn partition_deletable<T: Entity>(
    items: &[T],
    selected: &HashSet<EntityId>,
) -> (Vec<EntityId>, usize) {
    let mut ids: Vec<EntityId> = Vec::with_capacity(selected.len());
    let mut blocked = 0;
    for id in selected {
        match items.iter().find(|item| item.id() == id) {
            Some(item) if item.dependent_count() > 0 => blocked += 1,
            _ => ids.push(id.clone()),
        }
    }
    ids.sort();
    (ids, blocked)
}

/// Delete every id concurrently and wait for all of them to settle.
/// Succeeded deletions stay deleted; there is no rollback and no retry.
pub async fn delete_many<A>(api: &A, ids: &[EntityId]) -> Result<usize, BulkDeleteError>
where
    A: ResourceApi + ?Sized,
{
    let results = join_all(ids.iter().map(|id| api.delete(id))).await;
    let total = results.len();
    let failed = results.iter().filter(|r| r.is_err()).count();
    for err in results.iter().filter_map(|r| r.as_ref().err()) {
        log::error!("bulk delete: {}", err);
    }
    if failed > 0 {
        Err(BulkDeleteError::Failed { failed, total })
    } else {
        Ok(total)
    }
}

/// Bulk delete of a screen selection: records with dependents are skipped,
/// the rest are deleted concurrently.
pub async fn bulk_delete<T, A>(
    api: &A,
    items: &[T],
    selected: &HashSet<EntityId>,
) -> Result<usize, BulkDeleteError>
where
    T: Entity,
    A: ResourceApi + ?Sized,
{
    let (ids, blocked) = partition_deletable(items, selected);
    let outcome = delete_many(api, &ids).await;
    match (outcome, blocked) {
        (Ok(deleted), 0) => Ok(deleted),
        (Ok(_), blocked) => Err(BulkDeleteError::Blocked { blocked }),
        (Err(BulkDeleteError::Failed { failed, total }), 0) => {
            Err(BulkDeleteError::Failed { failed, total })
        }
        (Err(BulkDeleteError::Failed { failed, total }), blocked) => {
            Err(BulkDeleteError::FailedAndBlocked {
                failed,
                total,
                blocked,
            })
        }
        (Err(other), _) => Err(other),
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory `ResourceApi` that records every call

    use super::*;
    use std::cell::RefCell;

    pub struct SpyApi<R> {
        pub records: RefCell<Vec<R>>,
        pub deleted: RefCell<Vec<EntityId>>,
        pub fail_delete_for: HashSet<EntityId>,
    }

    impl<R> SpyApi<R> {
        pub fn new(records: Vec<R>) -> Self {
            Self {
                records: RefCell::new(records),
                deleted: RefCell::new(Vec::new()),
                fail_delete_for: HashSet::new(),
            }
        }

        pub fn failing_on(mut self, ids: &[EntityId]) -> Self {
            self.fail_delete_for = ids.iter().cloned().collect();
            self
        }

        pub fn deleted_ids(&self) -> Vec<EntityId> {
            let mut ids = self.deleted.borrow().clone();
            ids.sort();
            ids
        }
    }

    #[async_trait(?Send)]
    impl<R> ResourceApi for SpyApi<R>
    where
        R: Entity + Clone + DeserializeOwned + 'static,
    {
        type Record = R;
        type Payload = serde_json::Value;

        async fn list(&self, _query: &ListQuery) -> Result<Vec<R>, ApiError> {
            Ok(self.records.borrow().clone())
        }

        async fn get_by_id(&self, id: &EntityId) -> Result<R, ApiError> {
            self.records
                .borrow()
                .iter()
                .find(|r| r.id() == id)
                .cloned()
                .ok_or(ApiError::Rejected {
                    status: 404,
                    detail: Some("No encontrado".into()),
                })
        }

        async fn create(&self, _payload: &serde_json::Value) -> Result<R, ApiError> {
            Err(ApiError::NoResponse("not supported by spy".into()))
        }

        async fn update(&self, _id: &EntityId, _payload: &serde_json::Value) -> Result<R, ApiError> {
            Err(ApiError::NoResponse("not supported by spy".into()))
        }

        async fn delete(&self, id: &EntityId) -> Result<(), ApiError> {
            self.deleted.borrow_mut().push(id.clone());
            if self.fail_delete_for.contains(id) {
                return Err(ApiError::Rejected {
                    status: 409,
                    detail: Some("Conflicto".into()),
                });
            }
            self.records.borrow_mut().retain(|r| r.id() != id);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::SpyApi;
    use super::*;
    use contracts::domain::a003_brand::aggregate::Brand;
    use contracts::domain::a004_store::aggregate::Store;
    use futures::executor::block_on;

    fn brand(id: i64, product_count: u32) -> Brand {
        Brand {
            id: EntityId::from(id),
            name: format!("Marca {}", id),
            manufacturer_id: None,
            active: true,
            product_count,
        }
    }

    fn store(id: i64) -> Store {
        Store {
            id: EntityId::from(id),
            name: format!("Tienda {}", id),
            base_url: "https://tienda.cl".into(),
            active: true,
        }
    }

    fn ids(values: &[i64]) -> HashSet<EntityId> {
        values.iter().map(|v| EntityId::from(*v)).collect()
    }

    #[test]
    fn http_resource_paths() {
        let api: HttpResource<Brand, ()> = HttpResource::new("/brands");
        assert_eq!(api.path(), "/brands");
        assert_eq!(api.sub_path("with-manufacturer"), "/brands/with-manufacturer");
    }

    #[test]
    fn deletes_all_selected_concurrently() {
        let api = SpyApi::new(vec![store(1), store(2), store(3)]);
        let items = api.records.borrow().clone();
        let deleted = block_on(bulk_delete(&api, &items, &ids(&[1, 3]))).unwrap();
        assert_eq!(deleted, 2);
        assert_eq!(api.deleted_ids(), vec![EntityId::from(1), EntityId::from(3)]);
    }

    #[test]
    fn partial_failure_is_reported_once_and_not_rolled_back() {
        let api = SpyApi::new(vec![store(1), store(2), store(3)]).failing_on(&[EntityId::from(2)]);
        let items = api.records.borrow().clone();
        let err = block_on(bulk_delete(&api, &items, &ids(&[1, 2, 3]))).unwrap_err();
        assert_eq!(err, BulkDeleteError::Failed { failed: 1, total: 3 });
        // 1 and 3 remain deleted
        let remaining: Vec<EntityId> = api.records.borrow().iter().map(|s| s.id.clone()).collect();
        assert_eq!(remaining, vec![EntityId::from(2)]);
    }

    #[test]
    fn records_with_dependents_are_never_sent() {
        let api = SpyApi::new(vec![brand(1, 0), brand(2, 3)]);
        let items = api.records.borrow().clone();
        let err = block_on(bulk_delete(&api, &items, &ids(&[1, 2]))).unwrap_err();
        assert_eq!(err, BulkDeleteError::Blocked { blocked: 1 });
        assert_eq!(api.deleted_ids(), vec![EntityId::from(1)]);
    }

    #[test]
    fn failed_and_blocked_are_combined() {
        let api = SpyApi::new(vec![brand(1, 0), brand(2, 3)]).failing_on(&[EntityId::from(1)]);
        let items = api.records.borrow().clone();
        let err = block_on(bulk_delete(&api, &items, &ids(&[1, 2]))).unwrap_err();
        assert_eq!(
            err,
            BulkDeleteError::FailedAndBlocked { failed: 1, total: 1, blocked: 1 }
        );
        assert_eq!(
            err.to_string(),
            "No se pudieron eliminar 1 de 1 registros seleccionados; 1 tienen elementos asociados"
        );
    }

    #[test]
    fn empty_selection_is_a_no_op() {
        let api = SpyApi::new(vec![store(1)]);
        let deleted = block_on(bulk_delete(&api, &[store(1)], &HashSet::new())).unwrap();
        assert_eq!(deleted, 0);
        assert!(api.deleted_ids().is_empty());
    }
}
