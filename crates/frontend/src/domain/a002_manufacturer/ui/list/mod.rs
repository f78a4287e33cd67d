use crate::domain::a002_manufacturer::api::{fetch_with_brands, MANUFACTURERS, MESSAGES};
use crate::domain::a002_manufacturer::ui::details::ManufacturerDetails;
use crate::shared::components::badge::Badge;
use crate::shared::components::delete_confirm::{BulkDeleteConfirm, DeleteConfirm};
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::filter_select::FilterSelect;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::row_actions::RowActions;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::selection_bar::SelectionBar;
use crate::shared::components::table_checkbox::{TableCheckbox, TableHeaderCheckbox};
use crate::shared::delete_gate::DeleteGate;
use crate::shared::format::total_label;
use crate::shared::icons::icon;
use crate::shared::list_screen::{default_query, spawn_bulk_delete, spawn_confirmed_delete, spawn_load};
use crate::shared::list_state::{Filterable, ListState};
use crate::shared::resource::partition_deletable;
use contracts::domain::a002_manufacturer::aggregate::{Manufacturer, ManufacturerWithBrands};
use contracts::domain::common::Entity;
use leptos::prelude::*;
use std::collections::BTreeSet;
use thaw::*;

const FILTER_COUNTRY: &str = "country";

impl Filterable for ManufacturerWithBrands {
    fn search_fields(&self) -> Vec<Option<&str>> {
        let m = &self.manufacturer;
        vec![
            Some(&m.name),
            m.country.as_deref(),
            m.main_business_line.as_deref(),
        ]
    }

    fn filter_value(&self, key: &str) -> Option<String> {
        match key {
            FILTER_COUNTRY => self.manufacturer.country.clone(),
            _ => None,
        }
    }
}

/// Distinct countries present in the list, sorted
fn country_options(items: &[ManufacturerWithBrands]) -> Vec<(String, String)> {
    items
        .iter()
        .filter_map(|m| m.manufacturer.country.as_deref())
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(|c| (c.to_string(), c.to_string()))
        .collect()
}

fn blocked_message(brands: u32) -> String {
    format!(
        "Este fabricante tiene {} marca(s) asociada(s). No se puede eliminar. Por favor, reasigna o elimina las marcas primero.",
        brands
    )
}

fn dash(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}

#[component]
#[allow(non_snake_case)]
pub fn ManufacturerList() -> impl IntoView {
    let state = RwSignal::new(ListState::<ManufacturerWithBrands>::with_filters(&[FILTER_COUNTRY]));
    let gate = RwSignal::new(DeleteGate::<ManufacturerWithBrands>::default());
    let deleting = RwSignal::new(false);
    let bulk_busy = RwSignal::new(false);
    let bulk_confirm = RwSignal::new(false);
    let editing = RwSignal::new(None::<Option<Manufacturer>>);

    let reload = Callback::new(move |_| {
        let query = default_query();
        spawn_load(state, async move { fetch_with_brands(&query).await }, MESSAGES.load);
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
            <PageHeader title=Manufacturer::list_name() subtitle="Gestiona los fabricantes de productos">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| editing.set(Some(None))>
                    {icon("plus")}
                    " Nuevo Fabricante"
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
                    placeholder="Buscar fabricantes..."
                />
                <FilterSelect
                    label="País"
                    all_label="Todos los países"
                    value=Signal::derive(move || state.with(|s| s.filter.value(FILTER_COUNTRY).to_string()))
                    options=Signal::derive(move || state.with(|s| country_options(&s.items)))
                    on_change=Callback::new(move |v: String| state.update(|s| s.set_filter(FILTER_COUNTRY, v)))
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
                        <TableHeaderCell resizable=false>"País"</TableHeaderCell>
                        <TableHeaderCell resizable=false>"Giro de Negocio"</TableHeaderCell>
                        <TableHeaderCell resizable=false>"ID Fiscal"</TableHeaderCell>
                        <TableHeaderCell resizable=false>"Marcas"</TableHeaderCell>
                        <TableHeaderCell resizable=false>"Sitio Web"</TableHeaderCell>
                        <TableHeaderCell resizable=false class="table__cell--actions">"Acciones"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let rows = filtered.get();
                        if rows.is_empty() {
                            let text = if loading.get() {
                                "Cargando fabricantes..."
                            } else if state.with(|s| s.filter.is_neutral()) {
                                "No hay fabricantes creados"
                            } else {
                                "No se encontraron fabricantes"
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
                                let id = row.manufacturer.id.clone();
                                let id_for_toggle = id.clone();
                                let for_edit = row.manufacturer.clone();
                                let for_delete = row.clone();
                                let m = row.manufacturer;
                                view! {
                                    <TableRow>
                                        <TableCheckbox
                                            checked=Signal::derive(move || state.with(|s| s.is_selected(&id)))
                                            on_change=Callback::new(move |_| state.update(|s| s.toggle(&id_for_toggle)))
                                        />
                                        <TableCell>
                                            <TableCellLayout>{m.name.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>{dash(&m.country)}</TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{dash(&m.main_business_line)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <span class="text-mono">{dash(&m.tax_id)}</span>
                                        </TableCell>
                                        <TableCell>
                                            <Badge>{row.brand_count.to_string()}</Badge>
                                        </TableCell>
                                        <TableCell>
                                            {match m.website.clone() {
                                                Some(url) => view! {
                                                    <a href=url target="_blank" rel="noopener noreferrer" class="link">
                                                        {icon("external-link")}
                                                        " Visitar"
                                                    </a>
                                                }
                                                .into_any(),
                                                None => view! { <span>"-"</span> }.into_any(),
                                            }}
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
                {move || total_label(filtered.with(Vec::len), "fabricante", "fabricantes")}
            </div>

            {move || editing.get().map(|record| view! {
                <ManufacturerDetails record=record on_saved=on_saved on_cancel=on_cancel />
            })}

            <DeleteConfirm
                gate=gate
                busy=deleting
                blocked_message=blocked_message
                on_confirm=Callback::new(move |_| {
                    spawn_confirmed_delete(gate, deleting, state, MANUFACTURERS, MESSAGES, reload)
                })
            />

            <BulkDeleteConfirm
                open=bulk_confirm
                count=selected_count
                blocked=blocked_count
                busy=bulk_busy
                on_confirm=Callback::new(move |_| spawn_bulk_delete(state, bulk_busy, MANUFACTURERS, reload))
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::EntityId;
    use std::collections::HashSet;

    fn manufacturer(id: i64, name: &str, country: Option<&str>, brands: u32) -> ManufacturerWithBrands {
        ManufacturerWithBrands {
            manufacturer: Manufacturer {
                id: EntityId::from(id),
                name: name.into(),
                tax_id: None,
                country: country.map(String::from),
                website: None,
                main_business_line: Some("Calzado deportivo".into()),
            },
            brand_count: brands,
        }
    }

    fn sample() -> Vec<ManufacturerWithBrands> {
        vec![
            manufacturer(1, "Nike Inc.", Some("Estados Unidos"), 2),
            manufacturer(2, "Adidas AG", Some("Alemania"), 0),
            manufacturer(3, "Bata", None, 0),
            manufacturer(4, "Puma SE", Some("Alemania"), 1),
        ]
    }

    #[test]
    fn country_options_are_distinct_and_sorted() {
        let options = country_options(&sample());
        let labels: Vec<_> = options.into_iter().map(|(_, l)| l).collect();
        assert_eq!(labels, vec!["Alemania", "Estados Unidos"]);
    }

    #[test]
    fn search_covers_business_line_and_country() {
        let mut state = ListState::with_filters(&[FILTER_COUNTRY]);
        state.items = sample();
        state.set_search("calzado");
        assert_eq!(state.filtered().len(), 4);
        state.set_search("alemania");
        assert_eq!(state.filtered().len(), 2);
    }

    #[test]
    fn country_filter_excludes_unknown_country() {
        let mut state = ListState::with_filters(&[FILTER_COUNTRY]);
        state.items = sample();
        state.set_filter(FILTER_COUNTRY, "Alemania");
        let names: Vec<_> = state.filtered().into_iter().map(|m| m.manufacturer.name).collect();
        assert_eq!(names, vec!["Adidas AG", "Puma SE"]);
    }

    #[test]
    fn manufacturers_with_brands_are_held_back_from_bulk_delete() {
        let selected: HashSet<EntityId> = [1, 2, 4].into_iter().map(EntityId::from).collect();
        let (ids, blocked) = partition_deletable(&sample(), &selected);
        assert_eq!(ids, vec![EntityId::from(2)]);
        assert_eq!(blocked, 2);
    }
}
