//! Reactive glue between a list screen and its `ListState`
//!
//! Every update goes through `try_update` so responses that land after the
//! screen was unmounted are dropped.

use crate::shared::api_utils::ApiError;
use crate::shared::config::AppConfig;
use crate::shared::delete_gate::{execute_delete, DeleteGate, DeleteOutcome};
use crate::shared::list_state::{ListState, LoadTicket};
use crate::shared::resource::{bulk_delete, BulkDeleteError, ResourceApi, ResourceMessages};
use contracts::domain::common::{Entity, EntityId};
use contracts::shared::list_query::ListQuery;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashSet;
use std::future::Future;

/// Query used by every list screen: first page, configured size
pub fn default_query() -> ListQuery {
    ListQuery::with_limit(AppConfig::current().page_limit)
}

pub fn begin_load<T>(state: RwSignal<ListState<T>>) -> Option<LoadTicket>
where
    T: Send + Sync + 'static,
{
    state.try_update(|s| s.begin_load())
}

/// Returns whether the result was applied, false when the ticket went stale
/// or the screen is gone
pub fn finish_load<T>(
    state: RwSignal<ListState<T>>,
    ticket: LoadTicket,
    result: Result<Vec<T>, ApiError>,
    fallback: &'static str,
) -> bool
where
    T: Send + Sync + 'static,
{
    let result = result.map_err(|err| {
        if err.is_no_response() {
            log::warn!("{}: backend unreachable: {}", fallback, err);
        } else {
            log::error!("{}: {}", fallback, err);
        }
        err.message_or(fallback)
    });
    let count = result.as_ref().map(Vec::len).ok();
    let applied = state
        .try_update(|s| s.finish_load(ticket, result))
        .unwrap_or(false);
    if let (true, Some(count)) = (applied, count) {
        log::debug!("list loaded: {} rows", count);
    }
    applied
}

/// Load the list with a single request
pub fn spawn_load<T, F>(state: RwSignal<ListState<T>>, load: F, fallback: &'static str)
where
    T: Send + Sync + 'static,
    F: Future<Output = Result<Vec<T>, ApiError>> + 'static,
{
    let Some(ticket) = begin_load(state) else {
        return;
    };
    spawn_local(async move {
        finish_load(state, ticket, load.await, fallback);
    });
}

/// Options for a picker loaded next to the main list. A failure only empties
/// the picker.
fn degrade_options<O>(result: Result<Vec<O>, ApiError>, what: &str) -> Vec<O> {
    result.unwrap_or_else(|err| {
        log::warn!("could not load {} options: {}", what, err);
        Vec::new()
    })
}

/// Picker options loaded alongside a list response; kept only when that
/// response was applied
pub fn accept_options<O>(
    applied: bool,
    result: Result<Vec<O>, ApiError>,
    what: &str,
) -> Option<Vec<O>> {
    applied.then(|| degrade_options(result, what))
}

/// Load the list and one set of picker options concurrently
pub fn spawn_load_with_options<T, O, F, G>(
    state: RwSignal<ListState<T>>,
    options: RwSignal<Vec<O>>,
    load: F,
    load_options: G,
    fallback: &'static str,
    what: &'static str,
) where
    T: Send + Sync + 'static,
    O: Send + Sync + 'static,
    F: Future<Output = Result<Vec<T>, ApiError>> + 'static,
    G: Future<Output = Result<Vec<O>, ApiError>> + 'static,
{
    let Some(ticket) = begin_load(state) else {
        return;
    };
    spawn_local(async move {
        let (result, loaded) = futures::join!(load, load_options);
        let applied = finish_load(state, ticket, result, fallback);
        if let Some(loaded) = accept_options(applied, loaded, what) {
            options.try_set(loaded);
        }
    });
}

/// Confirm the gate's pending delete, then reload on success or put the
/// error on the screen on failure.
pub fn spawn_confirmed_delete<T, A>(
    gate: RwSignal<DeleteGate<T>>,
    busy: RwSignal<bool>,
    state: RwSignal<ListState<T>>,
    api: A,
    messages: ResourceMessages,
    reload: Callback<()>,
) where
    T: Entity + Clone + Send + Sync + 'static,
    A: ResourceApi + 'static,
{
    if busy.get_untracked() {
        return;
    }
    let Some(mut local_gate) = gate.try_get_untracked() else {
        return;
    };
    busy.set(true);
    spawn_local(async move {
        let outcome = execute_delete(&mut local_gate, &api).await;
        busy.try_set(false);
        match outcome {
            DeleteOutcome::Deleted => {
                gate.try_set(local_gate);
                reload.run(());
            }
            DeleteOutcome::Failed(err) => {
                gate.try_set(local_gate);
                state.try_update(|s| s.set_error(err.message_or(messages.delete)));
            }
            DeleteOutcome::Blocked { dependents } => {
                log::warn!("delete refused: {} dependents", dependents);
            }
            DeleteOutcome::Idle => {}
        }
    });
}

/// Bulk delete over a snapshot of the selection. Once every delete has
/// settled the list is reloaded exactly once and the outcome goes to
/// `settle`. Starting a load clears the screen error, so `settle` runs last.
pub async fn run_bulk_delete<T, A>(
    api: &A,
    items: &[T],
    selected: &HashSet<EntityId>,
    reload: impl FnOnce(),
    settle: impl FnOnce(Result<usize, BulkDeleteError>),
) where
    T: Entity,
    A: ResourceApi + ?Sized,
{
    let result = bulk_delete(api, items, selected).await;
    match &result {
        Ok(deleted) => log::info!("bulk delete: {} removed", deleted),
        Err(err) => log::warn!("bulk delete: {}", err),
    }
    reload();
    settle(result);
}

/// Delete the current selection, then clear it and reload once
pub fn spawn_bulk_delete<T, A>(
    state: RwSignal<ListState<T>>,
    busy: RwSignal<bool>,
    api: A,
    reload: Callback<()>,
) where
    T: Entity + Clone + Send + Sync + 'static,
    A: ResourceApi + 'static,
{
    if busy.get_untracked() {
        return;
    }
    let Some((items, selected)) =
        state.try_with_untracked(|s| (s.items.clone(), s.selected_ids.clone()))
    else {
        return;
    };
    if selected.is_empty() {
        return;
    }
    busy.set(true);
    spawn_local(async move {
        run_bulk_delete(
            &api,
            &items,
            &selected,
            || {
                busy.try_set(false);
                reload.run(());
            },
            |result| {
                state.try_update(|s| s.settle_bulk(result));
            },
        )
        .await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::resource::testing::SpyApi;
    use contracts::domain::a003_brand::aggregate::Brand;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    fn brand(id: i64, product_count: u32) -> Brand {
        Brand {
            id: EntityId::from(id),
            name: format!("Marca {}", id),
            manufacturer_id: None,
            active: true,
            product_count,
        }
    }

    fn selected_all(items: Vec<Brand>) -> ListState<Brand> {
        let mut state = ListState::new();
        state.items = items;
        state.selected_ids = state.items.iter().map(|b| b.id.clone()).collect();
        state
    }

    /// Runs a bulk delete the way the screen does and returns the reload count
    fn settle_against(api: &SpyApi<Brand>, state: &RefCell<ListState<Brand>>) -> usize {
        let (items, selected) = {
            let s = state.borrow();
            (s.items.clone(), s.selected_ids.clone())
        };
        let reloads = Cell::new(0);
        block_on(run_bulk_delete(
            api,
            &items,
            &selected,
            || {
                reloads.set(reloads.get() + 1);
                state.borrow_mut().begin_load();
            },
            |result| state.borrow_mut().settle_bulk(result),
        ));
        reloads.get()
    }

    #[test]
    fn options_from_a_stale_load_are_dropped() {
        let mut state: ListState<Brand> = ListState::new();
        let stale = state.begin_load();
        let latest = state.begin_load();

        let applied = state.finish_load(stale, Ok(vec![brand(9, 0)]));
        assert_eq!(accept_options(applied, Ok(vec!["Nestlé"]), "manufacturer"), None);

        let applied = state.finish_load(latest, Ok(vec![brand(1, 0)]));
        assert_eq!(
            accept_options(applied, Ok(vec!["Unilever"]), "manufacturer"),
            Some(vec!["Unilever"])
        );
    }

    #[test]
    fn failed_option_load_degrades_to_empty() {
        let failed: Result<Vec<String>, ApiError> = Err(ApiError::NoResponse("offline".into()));
        assert_eq!(accept_options(true, failed, "brand"), Some(Vec::new()));
    }

    #[test]
    fn successful_bulk_delete_clears_selection_and_reloads_once() {
        let records = vec![brand(1, 0), brand(2, 0)];
        let api = SpyApi::new(records.clone());
        let state = RefCell::new(selected_all(records));

        assert_eq!(settle_against(&api, &state), 1);
        assert_eq!(api.deleted_ids(), vec![EntityId::from(1), EntityId::from(2)]);
        let state = state.borrow();
        assert_eq!(state.selection_len(), 0);
        assert_eq!(state.error, None);
    }

    #[test]
    fn partial_failure_reports_one_error_after_reload() {
        let records = vec![brand(1, 0), brand(2, 0), brand(3, 4)];
        let api = SpyApi::new(records.clone()).failing_on(&[EntityId::from(2)]);
        let state = RefCell::new(selected_all(records));

        assert_eq!(settle_against(&api, &state), 1);
        assert_eq!(api.deleted_ids(), vec![EntityId::from(1), EntityId::from(2)]);
        let state = state.borrow();
        assert_eq!(state.selection_len(), 0);
        assert_eq!(
            state.error.as_deref(),
            Some(
                BulkDeleteError::FailedAndBlocked {
                    failed: 1,
                    total: 2,
                    blocked: 1,
                }
                .to_string()
                .as_str()
            )
        );
    }
}
