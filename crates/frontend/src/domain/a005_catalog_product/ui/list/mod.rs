use crate::domain::a001_category::api::CATEGORIES;
use crate::domain::a003_brand::api::BRANDS;
use crate::domain::a005_catalog_product::api::{fetch_with_details, CATALOG_PRODUCTS, MESSAGES};
use crate::domain::a005_catalog_product::ui::details::CatalogProductDetails;
use crate::shared::components::badge::{Badge, StatusBadge};
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
    accept_options, begin_load, default_query, finish_load, spawn_bulk_delete,
    spawn_confirmed_delete,
};
use crate::shared::list_state::{entity_options, status_value, Filterable, ListState};
use crate::shared::resource::{partition_deletable, ResourceApi};
use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::a003_brand::aggregate::Brand;
use contracts::domain::a005_catalog_product::aggregate::{CatalogProduct, CatalogProductWithDetails};
use contracts::domain::common::Entity;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const FILTER_BRAND: &str = "brand";
const FILTER_CATEGORY: &str = "category";
const FILTER_STATUS: &str = "status";

impl Filterable for CatalogProductWithDetails {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(&self.product.name),
            self.product.sku.as_deref(),
            self.brand_name.as_deref(),
            self.category_name.as_deref(),
        ]
    }

    fn filter_value(&self, key: &str) -> Option<String> {
        let p = &self.product;
        match key {
            FILTER_BRAND => p.brand_id.as_ref().map(ToString::to_string),
            FILTER_CATEGORY => p.category_id.as_ref().map(ToString::to_string),
            FILTER_STATUS => Some(status_value(p.active)),
            _ => None,
        }
    }
}

/// "N atributo(s)" or None when the product has no attributes
fn attribute_label(product: &CatalogProduct) -> Option<String> {
    product
        .attributes
        .as_ref()
        .map(|a| a.len())
        .filter(|n| *n > 0)
        .map(|n| format!("{} atributo(s)", n))
}

#[component]
#[allow(non_snake_case)]
pub fn CatalogProductList() -> impl IntoView {
    let state = RwSignal::new(ListState::<CatalogProductWithDetails>::with_filters(&[
        FILTER_BRAND,
        FILTER_CATEGORY,
        FILTER_STATUS,
    ]));
    let brands = RwSignal::new(Vec::<Brand>::new());
    let categories = RwSignal::new(Vec::<Category>::new());
    let gate = RwSignal::new(DeleteGate::<CatalogProductWithDetails>::default());
    let deleting = RwSignal::new(false);
    let bulk_busy = RwSignal::new(false);
    let bulk_confirm = RwSignal::new(false);
    let editing = RwSignal::new(None::<Option<CatalogProduct>>);

    let reload = Callback::new(move |_| {
        let Some(ticket) = begin_load(state) else {
            return;
        };
        let query = default_query();
        spawn_local(async move {
            let (brand_api, category_api) = (BRANDS, CATEGORIES);
            let (products, loaded_brands, loaded_categories) = futures::join!(
                fetch_with_details(&query),
                brand_api.list(&query),
                category_api.list(&query),
            );
            let applied = finish_load(state, ticket, products, MESSAGES.load);
            if let Some(loaded) = accept_options(applied, loaded_brands, "brand") {
                brands.try_set(loaded);
            }
            if let Some(loaded) = accept_options(applied, loaded_categories, "category") {
                categories.try_set(loaded);
            }
        });
    });

    let brand_options = Signal::derive(move || brands.with(|b| entity_options(b)));
    let category_options = Signal::derive(move || categories.with(|c| entity_options(c)));
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
            <PageHeader title=CatalogProduct::list_name() subtitle="Gestiona los productos únicos del catálogo">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| editing.set(Some(None))>
                    {icon("plus")}
                    " Nuevo Producto"
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
                    placeholder="Buscar productos..."
                />
                <FilterSelect
                    label="Marca"
                    all_label="Todas las marcas"
                    value=Signal::derive(move || state.with(|s| s.filter.value(FILTER_BRAND).to_string()))
                    options=brand_options
                    on_change=Callback::new(move |v: String| state.update(|s| s.set_filter(FILTER_BRAND, v)))
                />
                <FilterSelect
                    label="Categoría"
                    all_label="Todas las categorías"
                    value=Signal::derive(move || state.with(|s| s.filter.value(FILTER_CATEGORY).to_string()))
                    options=category_options
                    on_change=Callback::new(move |v: String| state.update(|s| s.set_filter(FILTER_CATEGORY, v)))
                />
                <FilterSelect
                    label="Estado"
                    all_label="Todos"
                    value=Signal::derive(move || state.with(|s| s.filter.value(FILTER_STATUS).to_string()))
                    options=Signal::derive(|| status_options(false))
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
                        <TableHeaderCell resizable=false>"SKU"</TableHeaderCell>
                        <TableHeaderCell resizable=false>"Marca"</TableHeaderCell>
                        <TableHeaderCell resizable=false>"Categoría"</TableHeaderCell>
                        <TableHeaderCell resizable=false>"Atributos"</TableHeaderCell>
                        <TableHeaderCell resizable=false>"Estado"</TableHeaderCell>
                        <TableHeaderCell resizable=false class="table__cell--actions">"Acciones"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let rows = filtered.get();
                        if rows.is_empty() {
                            let text = if loading.get() {
                                "Cargando productos..."
                            } else if state.with(|s| s.filter.is_neutral()) {
                                "No hay productos creados"
                            } else {
                                "No se encontraron productos"
                            };
                            return view! {
                                <TableRow>
                                    <TableCell attr:colspan="8" class="table__cell--empty">{text}</TableCell>
                                </TableRow>
                            }
                            .into_any();
                        }
                        rows.into_iter()
                            .map(|row| {
                                let id = row.product.id.clone();
                                let id_for_toggle = id.clone();
                                let for_edit = row.product.clone();
                                let for_delete = row.clone();
                                let attributes = attribute_label(&row.product);
                                let p = row.product;
                                view! {
                                    <TableRow>
                                        <TableCheckbox
                                            checked=Signal::derive(move || state.with(|s| s.is_selected(&id)))
                                            on_change=Callback::new(move |_| state.update(|s| s.toggle(&id_for_toggle)))
                                        />
                                        <TableCell>
                                            <TableCellLayout truncate=true>{p.name.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <span class="text-mono">{p.sku.clone().unwrap_or_else(|| "-".to_string())}</span>
                                        </TableCell>
                                        <TableCell>{row.brand_name.unwrap_or_else(|| "-".to_string())}</TableCell>
                                        <TableCell>{row.category_name.unwrap_or_else(|| "-".to_string())}</TableCell>
                                        <TableCell>
                                            {match attributes {
                                                Some(label) => view! { <Badge variant="primary">{label}</Badge> }.into_any(),
                                                None => view! { <span>"-"</span> }.into_any(),
                                            }}
                                        </TableCell>
                                        <TableCell>
                                            <StatusBadge active=p.active masculine=true />
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
                {move || total_label(filtered.with(Vec::len), "producto", "productos")}
            </div>

            {move || editing.get().map(|record| view! {
                <CatalogProductDetails
                    record=record
                    brands=brand_options
                    categories=category_options
                    on_saved=on_saved
                    on_cancel=on_cancel
                />
            })}

            <DeleteConfirm
                gate=gate
                busy=deleting
                on_confirm=Callback::new(move |_| {
                    spawn_confirmed_delete(gate, deleting, state, CATALOG_PRODUCTS, MESSAGES, reload)
                })
            />

            <BulkDeleteConfirm
                open=bulk_confirm
                count=selected_count
                blocked=blocked_count
                busy=bulk_busy
                on_confirm=Callback::new(move |_| spawn_bulk_delete(state, bulk_busy, CATALOG_PRODUCTS, reload))
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::EntityId;
    use serde_json::json;

    fn rows() -> Vec<CatalogProductWithDetails> {
        serde_json::from_value(json!([
            {"id": 1, "name": "Air Max 90", "sku": "NK-AM90", "brand_id": 1, "category_id": 7,
             "attributes": {"color": "negro", "talla": "42"}, "active": true,
             "brand_name": "Nike", "category_name": "Zapatillas"},
            {"id": 2, "name": "Superstar", "brand_id": 2, "active": false,
             "brand_name": "Adidas"},
            {"id": 3, "name": "Polera básica", "category_id": 9, "attributes": {}, "active": true,
             "category_name": "Poleras"}
        ]))
        .unwrap()
    }

    fn state() -> ListState<CatalogProductWithDetails> {
        let mut state = ListState::with_filters(&[FILTER_BRAND, FILTER_CATEGORY, FILTER_STATUS]);
        state.items = rows();
        state
    }

    #[test]
    fn search_covers_sku_and_joined_names() {
        let mut state = state();
        state.set_search("nk-am");
        assert_eq!(state.filtered().len(), 1);
        state.set_search("poleras");
        assert_eq!(state.filtered()[0].product.id, EntityId::from(3));
        state.set_search("adidas");
        assert_eq!(state.filtered()[0].product.name, "Superstar");
    }

    #[test]
    fn brand_and_category_filters_combine() {
        let mut state = state();
        state.set_filter(FILTER_BRAND, "1");
        state.set_filter(FILTER_CATEGORY, "7");
        assert_eq!(state.filtered().len(), 1);
        state.set_filter(FILTER_CATEGORY, "9");
        assert!(state.filtered().is_empty());
    }

    #[test]
    fn attribute_badge_counts_keys() {
        let items = rows();
        assert_eq!(attribute_label(&items[0].product).as_deref(), Some("2 atributo(s)"));
        assert_eq!(attribute_label(&items[1].product), None);
        assert_eq!(attribute_label(&items[2].product), None);
    }

    #[test]
    fn catalog_products_are_never_blocked() {
        let mut state = state();
        state.set_all(true);
        assert_eq!(partition_deletable(&state.items, &state.selected_ids).1, 0);
    }
}
