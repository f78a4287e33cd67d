use crate::domain::a002_manufacturer::api::MANUFACTURERS;
use crate::domain::a003_brand::api::{fetch_with_manufacturer, BRANDS, MESSAGES};
use crate::domain::a003_brand::ui::details::BrandDetails;
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
    default_query, spawn_bulk_delete, spawn_confirmed_delete, spawn_load_with_options,
};
use crate::shared::list_state::{entity_options, status_value, Filterable, ListState};
use crate::shared::resource::{partition_deletable, ResourceApi};
use contracts::domain::a002_manufacturer::aggregate::Manufacturer;
use contracts::domain::a003_brand::aggregate::{Brand, BrandWithManufacturer};
use contracts::domain::common::Entity;
use leptos::prelude::*;
use thaw::*;

const FILTER_MANUFACTURER: &str = "manufacturer";
const FILTER_STATUS: &str = "status";

impl Filterable for BrandWithManufacturer {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![Some(&self.brand.name), self.manufacturer_name.as_deref()]
    }

    fn filter_value(&self, key: &str) -> Option<String> {
        match key {
            FILTER_MANUFACTURER => self.brand.manufacturer_id.as_ref().map(ToString::to_string),
            FILTER_STATUS => Some(status_value(self.brand.active)),
            _ => None,
        }
    }
}

fn blocked_message(products: u32) -> String {
    format!(
        "Esta marca tiene {} producto(s) asociado(s). No se puede eliminar. Por favor, desactívala en su lugar.",
        products
    )
}

#[component]
#[allow(non_snake_case)]
pub fn BrandList() -> impl IntoView {
    let state = RwSignal::new(ListState::<BrandWithManufacturer>::with_filters(&[
        FILTER_MANUFACTURER,
        FILTER_STATUS,
    ]));
    let manufacturers = RwSignal::new(Vec::<Manufacturer>::new());
    let gate = RwSignal::new(DeleteGate::<BrandWithManufacturer>::default());
    let deleting = RwSignal::new(false);
    let bulk_busy = RwSignal::new(false);
    let bulk_confirm = RwSignal::new(false);
    let editing = RwSignal::new(None::<Option<Brand>>);

    let reload = Callback::new(move |_| {
        let query = default_query();
        let options_query = query.clone();
        spawn_load_with_options(
            state,
            manufacturers,
            async move { fetch_with_manufacturer(&query).await },
            async move { MANUFACTURERS.list(&options_query).await },
            MESSAGES.load,
            "manufacturer",
        );
    });

    let manufacturer_options = Signal::derive(move || manufacturers.with(|m| entity_options(m)));
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
            <PageHeader title=Brand::list_name() subtitle="Gestiona las marcas de productos">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| editing.set(Some(None))>
                    {icon("plus")}
                    " Nueva Marca"
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
                    placeholder="Buscar marcas..."
                />
                <FilterSelect
                    label="Fabricante"
                    all_label="Todos los fabricantes"
                    value=Signal::derive(move || state.with(|s| s.filter.value(FILTER_MANUFACTURER).to_string()))
                    options=manufacturer_options
                    on_change=Callback::new(move |v: String| state.update(|s| s.set_filter(FILTER_MANUFACTURER, v)))
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
                        <TableHeaderCell resizable=false>"Fabricante"</TableHeaderCell>
                        <TableHeaderCell resizable=false>"País"</TableHeaderCell>
                        <TableHeaderCell resizable=false>"Productos"</TableHeaderCell>
                        <TableHeaderCell resizable=false>"Estado"</TableHeaderCell>
                        <TableHeaderCell resizable=false class="table__cell--actions">"Acciones"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let rows = filtered.get();
                        if rows.is_empty() {
                            let text = if loading.get() {
                                "Cargando marcas..."
                            } else if state.with(|s| s.filter.is_neutral()) {
                                "No hay marcas creadas"
                            } else {
                                "No se encontraron marcas"
                            };
                            return view! {
                                <TableRow>
                                    <TableCell attr:colspan="7" class="table__cell--empty">{text}</TableCell>
                                </TableRow>
                            }
                            .into_any();
                        }
                        rows.into_iter()
                            .map(|row| {
                                let id = row.brand.id.clone();
                                let id_for_toggle = id.clone();
                                let for_edit = row.brand.clone();
                                let for_delete = row.clone();
                                let products = row.brand.product_count;
                                view! {
                                    <TableRow>
                                        <TableCheckbox
                                            checked=Signal::derive(move || state.with(|s| s.is_selected(&id)))
                                            on_change=Callback::new(move |_| state.update(|s| s.toggle(&id_for_toggle)))
                                        />
                                        <TableCell>
                                            <TableCellLayout>{row.brand.name.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            {row.manufacturer_name.clone().unwrap_or_else(|| "Sin fabricante".to_string())}
                                        </TableCell>
                                        <TableCell>{row.manufacturer_country.clone().unwrap_or_else(|| "-".to_string())}</TableCell>
                                        <TableCell>
                                            <Badge variant={if products > 0 { "primary" } else { "neutral" }}>
                                                {products.to_string()}
                                            </Badge>
                                        </TableCell>
                                        <TableCell>
                                            <StatusBadge active=row.brand.active />
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
                {move || total_label(filtered.with(Vec::len), "marca", "marcas")}
            </div>

            {move || editing.get().map(|record| view! {
                <BrandDetails
                    record=record
                    manufacturers=manufacturer_options
                    on_saved=on_saved
                    on_cancel=on_cancel
                />
            })}

            <DeleteConfirm
                gate=gate
                busy=deleting
                blocked_message=blocked_message
                on_confirm=Callback::new(move |_| {
                    spawn_confirmed_delete(gate, deleting, state, BRANDS, MESSAGES, reload)
                })
            />

            <BulkDeleteConfirm
                open=bulk_confirm
                count=selected_count
                blocked=blocked_count
                busy=bulk_busy
                on_confirm=Callback::new(move |_| spawn_bulk_delete(state, bulk_busy, BRANDS, reload))
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_utils::record_path;
    use crate::shared::delete_gate::{execute_delete, DeleteOutcome};
    use crate::shared::list_state::STATUS_INACTIVE;
    use crate::shared::resource::testing::SpyApi;
    use contracts::domain::common::EntityId;
    use futures::executor::block_on;

    fn joined(
        id: i64,
        name: &str,
        manufacturer: Option<(i64, &str)>,
        active: bool,
        product_count: u32,
    ) -> BrandWithManufacturer {
        BrandWithManufacturer {
            brand: Brand {
                id: EntityId::from(id),
                name: name.into(),
                manufacturer_id: manufacturer.map(|(m, _)| EntityId::from(m)),
                active,
                product_count,
            },
            manufacturer_name: manufacturer.map(|(_, n)| n.to_string()),
            manufacturer_country: None,
        }
    }

    fn nike_and_adidas() -> Vec<BrandWithManufacturer> {
        vec![
            joined(1, "Nike", None, true, 0),
            joined(2, "Adidas", Some((5, "Adidas AG")), false, 3),
        ]
    }

    fn loaded() -> ListState<BrandWithManufacturer> {
        let mut state = ListState::with_filters(&[FILTER_MANUFACTURER, FILTER_STATUS]);
        state.items = nike_and_adidas();
        state
    }

    #[test]
    fn nike_adidas_scenario() {
        let mut state = loaded();
        state.set_search("nik");
        let visible = state.filtered();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].brand.id, EntityId::from(1));

        let api = SpyApi::new(nike_and_adidas());

        let mut gate = DeleteGate::default();
        gate.request(state.items[1].clone());
        assert_eq!(
            block_on(execute_delete(&mut gate, &api)),
            DeleteOutcome::Blocked { dependents: 3 }
        );
        assert!(api.deleted_ids().is_empty());

        let mut gate = DeleteGate::default();
        gate.request(state.items[0].clone());
        assert_eq!(block_on(execute_delete(&mut gate, &api)), DeleteOutcome::Deleted);
        assert_eq!(api.deleted_ids(), vec![EntityId::from(1)]);
        assert_eq!(record_path(BRANDS.path(), &api.deleted_ids()[0]), "/brands/1");
    }

    #[test]
    fn search_covers_manufacturer_name() {
        let mut state = loaded();
        state.set_search("adidas ag");
        assert_eq!(state.filtered().len(), 1);
    }

    #[test]
    fn manufacturer_filter_skips_brands_without_one() {
        let mut state = loaded();
        state.set_filter(FILTER_MANUFACTURER, "5");
        let names: Vec<_> = state.filtered().into_iter().map(|b| b.brand.name).collect();
        assert_eq!(names, vec!["Adidas"]);
    }

    #[test]
    fn status_filter_inactive() {
        let mut state = loaded();
        state.set_filter(FILTER_STATUS, STATUS_INACTIVE);
        assert_eq!(state.filtered()[0].brand.name, "Adidas");
    }

    #[test]
    fn blocked_message_names_product_count() {
        assert!(blocked_message(3).starts_with("Esta marca tiene 3 producto(s) asociado(s)."));
    }
}
