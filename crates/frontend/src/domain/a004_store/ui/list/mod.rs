use crate::domain::a004_store::api::{MESSAGES, STORES};
use crate::domain::a004_store::ui::details::StoreDetails;
use crate::shared::components::badge::StatusBadge;
use crate::shared::components::delete_confirm::{BulkDeleteConfirm, DeleteConfirm};
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::filter_select::{status_options, FilterSelect};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::row_actions::RowActions;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::selection_bar::SelectionBar;
use crate::shared::components::table_checkbox::{TableCheckbox, TableHeaderCheckbox};
use crate::shared::delete_gate::DeleteGate;
use crate::shared::format::total_label;
use crate::shared::icons::icon;
use crate::shared::list_screen::{default_query, spawn_bulk_delete, spawn_confirmed_delete, spawn_load};
use crate::shared::list_state::{status_value, Filterable, ListState};
use crate::shared::resource::{partition_deletable, ResourceApi};
use contracts::domain::a004_store::aggregate::Store;
use contracts::domain::common::Entity;
use leptos::prelude::*;
use thaw::*;

const FILTER_STATUS: &str = "status";

impl Filterable for Store {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![Some(&self.name), Some(&self.base_url)]
    }

    fn filter_value(&self, key: &str) -> Option<String> {
        match key {
            FILTER_STATUS => Some(status_value(self.active)),
            _ => None,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn StoreList() -> impl IntoView {
    let state = RwSignal::new(ListState::<Store>::with_filters(&[FILTER_STATUS]));
    let gate = RwSignal::new(DeleteGate::<Store>::default());
    let deleting = RwSignal::new(false);
    let bulk_busy = RwSignal::new(false);
    let bulk_confirm = RwSignal::new(false);
    // None: closed, Some(None): create, Some(Some(store)): edit
    let editing = RwSignal::new(None::<Option<Store>>);

    let reload = Callback::new(move |_| {
        let query = default_query();
        spawn_load(state, async move { STORES.list(&query).await }, MESSAGES.load);
    });

    let filtered = Memo::new(move |_| state.with(|s| s.filtered()));
    let loading = Signal::derive(move || state.with(|s| s.loading));
    let selected_count = Signal::derive(move || state.with(|s| s.selection_len()));
    let blocked_count =
        Signal::derive(move || state.with(|s| partition_deletable(&s.items, &s.selected_ids).1));

    let on_saved = Callback::new(move |_| {
        editing.set(None);
        reload.run(());
    });
    let on_cancel = Callback::new(move |_| editing.set(None));

    reload.run(());

    view! {
        <div class="page">
            <PageHeader title=Store::list_name() subtitle="Gestiona las tiendas y comercios">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| editing.set(Some(None))>
                    {icon("plus")}
                    " Nueva Tienda"
                </Button>
            </PageHeader>

            <ErrorBanner
                message=Signal::derive(move || state.with(|s| s.error.clone()))
                on_dismiss=Callback::new(move |_| state.update(|s| s.clear_error()))
            />

            <div class="list-toolbar">
                <SearchInput
                    value=Signal::derive(move || state.with(|s| s.filter.search_term.clone()))
                    on_change=Callback::new(move |term: String| state.update(|s| s.set_search(term)))
                    placeholder="Buscar tiendas..."
                />
                <FilterSelect
                    label="Estado"
                    all_label="Todas"
                    value=Signal::derive(move || state.with(|s| s.filter.value(FILTER_STATUS).to_string()))
                    options=Signal::derive(|| status_options(true))
                    on_change=Callback::new(move |v: String| state.update(|s| s.set_filter(FILTER_STATUS, v)))
                />
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| reload.run(())
                    disabled=loading
                >
                    {icon("refresh")}
                </Button>
            </div>

            <SelectionBar
                count=selected_count
                busy=bulk_busy
                on_delete=Callback::new(move |_| bulk_confirm.set(true))
                on_clear=Callback::new(move |_| state.update(|s| s.clear_selection()))
            />

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCheckbox
                            checked=Signal::derive(move || state.with(|s| s.all_selected()))
                            indeterminate=Signal::derive(move || selected_count.get() > 0)
                            on_change=Callback::new(move |checked| state.update(|s| s.set_all(checked)))
                        />
                        <TableHeaderCell resizable=false>"Nombre"</TableHeaderCell>
                        <TableHeaderCell resizable=false>"URL Base"</TableHeaderCell>
                        <TableHeaderCell resizable=false>"Estado"</TableHeaderCell>
                        <TableHeaderCell resizable=false class="table__cell--actions">"Acciones"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let rows = filtered.get();
                        if rows.is_empty() {
                            let text = if loading.get() {
                                "Cargando tiendas..."
                            } else if state.with(|s| s.filter.is_neutral()) {
                                "No hay tiendas creadas"
                            } else {
                                "No se encontraron tiendas"
                            };
                            return view! {
                                <TableRow>
                                    <TableCell attr:colspan="5" class="table__cell--empty">{text}</TableCell>
                                </TableRow>
                            }
                            .into_any();
                        }
                        rows.into_iter()
                            .map(|store| {
                                let id = store.id.clone();
                                let id_for_toggle = store.id.clone();
                                let for_edit = store.clone();
                                let for_delete = store.clone();
                                view! {
                                    <TableRow>
                                        <TableCheckbox
                                            checked=Signal::derive(move || state.with(|s| s.is_selected(&id)))
                                            on_change=Callback::new(move |_| state.update(|s| s.toggle(&id_for_toggle)))
                                        />
                                        <TableCell>
                                            <TableCellLayout>{store.name.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                <a href=store.base_url.clone() target="_blank" rel="noopener noreferrer" class="link">
                                                    {store.base_url.clone()}
                                                    " "
                                                    {icon("external-link")}
                                                </a>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <StatusBadge active=store.active />
                                        </TableCell>
                                        <TableCell class="table__cell--actions">
                                            <RowActions
                                                on_edit=Callback::new(move |_| editing.set(Some(Some(for_edit.clone()))))
                                                on_delete=Callback::new(move |_| gate.update(|g| g.request(for_delete.clone())))
                                            />
                                        </TableCell>
                                    </TableRow>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </TableBody>
            </Table>

            <div class="list-footer">
                {move || total_label(filtered.with(Vec::len), "tienda", "tiendas")}
            </div>

            {move || editing.get().map(|record| view! {
                <StoreDetails record=record on_saved=on_saved on_cancel=on_cancel />
            })}

            <DeleteConfirm
                gate=gate
                busy=deleting
                on_confirm=Callback::new(move |_| {
                    spawn_confirmed_delete(gate, deleting, state, STORES, MESSAGES, reload)
                })
            />

            <BulkDeleteConfirm
                open=bulk_confirm
                count=selected_count
                blocked=blocked_count
                busy=bulk_busy
                on_confirm=Callback::new(move |_| spawn_bulk_delete(state, bulk_busy, STORES, reload))
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_state::{STATUS_ACTIVE, STATUS_INACTIVE};
    use contracts::domain::common::EntityId;

    fn store(id: i64, name: &str, url: &str, active: bool) -> Store {
        Store {
            id: EntityId::from(id),
            name: name.into(),
            base_url: url.into(),
            active,
        }
    }

    fn state() -> ListState<Store> {
        let mut state = ListState::with_filters(&[FILTER_STATUS]);
        state.items = vec![
            store(1, "Falabella", "https://www.falabella.com", true),
            store(2, "Paris", "https://www.paris.cl", false),
            store(3, "Ripley", "https://simple.ripley.cl", true),
        ];
        state
    }

    #[test]
    fn search_matches_base_url() {
        let mut state = state();
        state.set_search(".cl");
        let names: Vec<_> = state.filtered().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Paris", "Ripley"]);
    }

    #[test]
    fn status_filter() {
        let mut state = state();
        state.set_filter(FILTER_STATUS, STATUS_INACTIVE);
        assert_eq!(state.filtered().len(), 1);
        state.set_filter(FILTER_STATUS, STATUS_ACTIVE);
        assert_eq!(state.filtered().len(), 2);
    }

    #[test]
    fn stores_are_never_blocked_in_bulk() {
        let mut state = state();
        state.set_all(true);
        let (ids, blocked) = partition_deletable(&state.items, &state.selected_ids);
        assert_eq!(ids.len(), 3);
        assert_eq!(blocked, 0);
    }
}
