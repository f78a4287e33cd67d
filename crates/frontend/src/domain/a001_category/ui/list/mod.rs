use crate::domain::a001_category::api::{fetch_tree, CATEGORIES, MESSAGES};
use crate::domain::a001_category::ui::details::CategoryDetails;
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
use crate::shared::list_screen::{
    default_query, spawn_bulk_delete, spawn_confirmed_delete, spawn_load_with_options,
};
use crate::shared::list_state::{status_value, Filterable, ListState};
use crate::shared::resource::{partition_deletable, ResourceApi};
use contracts::domain::a001_category::aggregate::{parent_name, Category, CategoryTreeNode};
use contracts::domain::common::Entity;
use leptos::prelude::*;
use thaw::*;

const FILTER_STATUS: &str = "status";
const FILTER_PARENT: &str = "parent";
/// Parent filter value matching top-level categories
const PARENT_ROOT: &str = "root";

impl Filterable for Category {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![Some(&self.name), self.description.as_deref()]
    }

    fn filter_value(&self, key: &str) -> Option<String> {
        match key {
            FILTER_STATUS => Some(status_value(self.active)),
            FILTER_PARENT => Some(
                self.parent_id
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| PARENT_ROOT.to_string()),
            ),
            _ => None,
        }
    }
}

/// "Root only" followed by every category that has at least one child
fn parent_filter_options(items: &[Category]) -> Vec<(String, String)> {
    let mut options = vec![(PARENT_ROOT.to_string(), "Solo categorías raíz".to_string())];
    options.extend(
        items
            .iter()
            .filter(|c| items.iter().any(|child| child.parent_id.as_ref() == Some(&c.id)))
            .map(|c| (c.id.to_string(), c.name.clone())),
    );
    options
}

fn subcategory_note(category: &Category) -> Option<String> {
    category.is_subcategory().then(|| {
        "Esta es una subcategoría y su eliminación no afectará a la categoría padre.".to_string()
    })
}

#[component]
#[allow(non_snake_case)]
pub fn CategoryList() -> impl IntoView {
    let state = RwSignal::new(ListState::<Category>::with_filters(&[FILTER_STATUS, FILTER_PARENT]));
    let tree = RwSignal::new(Vec::<CategoryTreeNode>::new());
    let gate = RwSignal::new(DeleteGate::<Category>::default());
    let deleting = RwSignal::new(false);
    let bulk_busy = RwSignal::new(false);
    let bulk_confirm = RwSignal::new(false);
    let editing = RwSignal::new(None::<Option<Category>>);

    let reload = Callback::new(move |_| {
        let query = default_query();
        spawn_load_with_options(
            state,
            tree,
            async move { CATEGORIES.list(&query).await },
            fetch_tree(),
            MESSAGES.load,
            "parent category",
        );
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
            <PageHeader title=Category::list_name() subtitle="Gestiona las categorías de productos">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| editing.set(Some(None))>
                    {icon("plus")}
                    " Nueva Categoría"
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
                    placeholder="Buscar categorías..."
                />
                <FilterSelect
                    label="Estado"
                    all_label="Todas"
                    value=Signal::derive(move || state.with(|s| s.filter.value(FILTER_STATUS).to_string()))
                    options=Signal::derive(|| status_options(true))
                    on_change=Callback::new(move |v: String| state.update(|s| s.set_filter(FILTER_STATUS, v)))
                />
                <FilterSelect
                    label="Categoría Padre"
                    all_label="Todas"
                    value=Signal::derive(move || state.with(|s| s.filter.value(FILTER_PARENT).to_string()))
                    options=Signal::derive(move || state.with(|s| parent_filter_options(&s.items)))
                    on_change=Callback::new(move |v: String| state.update(|s| s.set_filter(FILTER_PARENT, v)))
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
                        <TableHeaderCell resizable=false>"Descripción"</TableHeaderCell>
                        <TableHeaderCell resizable=false>"Categoría Padre"</TableHeaderCell>
                        <TableHeaderCell resizable=false>"Estado"</TableHeaderCell>
                        <TableHeaderCell resizable=false class="table__cell--actions">"Acciones"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let rows = filtered.get();
                        if rows.is_empty() {
                            let text = if loading.get() {
                                "Cargando categorías..."
                            } else if state.with(|s| s.filter.is_neutral()) {
                                "No hay categorías creadas"
                            } else {
                                "No se encontraron categorías"
                            };
                            return view! {
                                <TableRow>
                                    <TableCell attr:colspan="6" class="table__cell--empty">{text}</TableCell>
                                </TableRow>
                            }
                            .into_any();
                        }
                        rows.into_iter()
                            .map(|category| {
                                let id = category.id.clone();
                                let id_for_toggle = id.clone();
                                let parent = state.with_untracked(|s| parent_name(&s.items, category.parent_id.as_ref()));
                                let for_edit = category.clone();
                                let for_delete = category.clone();
                                view! {
                                    <TableRow>
                                        <TableCheckbox
                                            checked=Signal::derive(move || state.with(|s| s.is_selected(&id)))
                                            on_change=Callback::new(move |_| state.update(|s| s.toggle(&id_for_toggle)))
                                        />
                                        <TableCell>
                                            <TableCellLayout>{category.name.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {category.description.clone().unwrap_or_else(|| "-".to_string())}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>{parent}</TableCell>
                                        <TableCell>
                                            <StatusBadge active=category.active />
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
                {move || total_label(filtered.with(Vec::len), "categoría", "categorías")}
            </div>

            {move || editing.get().map(|record| view! {
                <CategoryDetails record=record tree=tree on_saved=on_saved on_cancel=on_cancel />
            })}

            <DeleteConfirm
                gate=gate
                busy=deleting
                note=subcategory_note
                on_confirm=Callback::new(move |_| {
                    spawn_confirmed_delete(gate, deleting, state, CATEGORIES, MESSAGES, reload)
                })
            />

            <BulkDeleteConfirm
                open=bulk_confirm
                count=selected_count
                blocked=blocked_count
                busy=bulk_busy
                on_confirm=Callback::new(move |_| spawn_bulk_delete(state, bulk_busy, CATEGORIES, reload))
            />
        </div>
    }
}
