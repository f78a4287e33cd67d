use crate::projections::p900_scraped_offers::api::{fetch_offers, MSG_LOAD};
use crate::shared::components::badge::Badge;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::filter_select::FilterSelect;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::stat_card::StatCard;
use crate::shared::format::{format_optional_datetime_es, format_price_clp};
use crate::shared::icons::icon;
use crate::shared::list_screen::{default_query, spawn_load};
use crate::shared::list_state::{Filterable, ListState};
use contracts::projections::p900_scraped_offers::dto::{OfferPrice, ScrapedOffer};
use contracts::projections::p900_scraped_offers::grouping::{group_by_catalog, CatalogOfferGroup};
use leptos::prelude::*;
use std::collections::BTreeSet;
use thaw::*;

const FILTER_STORE: &str = "store";

impl Filterable for ScrapedOffer {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(&self.catalog_name),
            Some(&self.store_name),
            self.category_name.as_deref(),
        ]
    }

    fn filter_value(&self, key: &str) -> Option<String> {
        match key {
            FILTER_STORE => Some(self.store_name.clone()),
            _ => None,
        }
    }
}

fn store_options(offers: &[ScrapedOffer]) -> Vec<(String, String)> {
    offers
        .iter()
        .map(|o| o.store_name.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(|s| (s.to_string(), s.to_string()))
        .collect()
}

/// Header tiles: filtered offers, catalog groups, last scrape
#[derive(Debug, Clone, PartialEq)]
struct OfferStats {
    offers: usize,
    groups: usize,
    last_scraped: String,
}

fn offer_stats(loaded: &[ScrapedOffer], groups: &[CatalogOfferGroup]) -> OfferStats {
    OfferStats {
        offers: groups.iter().map(|g| g.offers.len()).sum(),
        groups: groups.len(),
        last_scraped: format_optional_datetime_es(
            loaded.first().and_then(|o| o.last_scraped_at.as_ref()),
        ),
    }
}

fn stores_label(count: usize) -> String {
    if count == 1 {
        "1 tienda".to_string()
    } else {
        format!("{} tiendas", count)
    }
}

fn price_cell(price: Option<OfferPrice>) -> impl IntoView {
    match price {
        None => view! { <span class="text-muted">"Sin precio"</span> }.into_any(),
        Some(p) => view! {
            <div class="offer-price">
                <span class="offer-price__current">{format_price_clp(p.price)}</span>
                {p.discounted_from().map(|original| view! {
                    <span class="offer-price__original">
                        <s>{format_price_clp(original)}</s>
                    </span>
                })}
            </div>
        }
        .into_any(),
    }
}

fn stock_badge(price: Option<&OfferPrice>) -> impl IntoView {
    let in_stock = price.map(|p| p.in_stock).unwrap_or(false);
    let (variant, label) = if in_stock {
        ("success", "En stock")
    } else {
        ("error", "Sin stock")
    };
    view! { <Badge variant=variant>{label}</Badge> }
}

#[component]
fn OfferGroupCard(group: CatalogOfferGroup) -> impl IntoView {
    let stores = stores_label(group.store_count());
    view! {
        <div class="offer-group">
            <div class="offer-group__header">
                <div>
                    <h3 class="offer-group__title">{group.catalog_name.clone()}</h3>
                    <div class="offer-group__meta">
                        {group.catalog_sku.clone().map(|sku| view! { <span class="text-mono">{format!("SKU: {}", sku)}</span> })}
                        {group.brand_name.clone().map(|b| view! { <Badge variant="primary">{b}</Badge> })}
                        {group.category_name.clone().map(|c| view! { <Badge>{c}</Badge> })}
                    </div>
                </div>
                <span class="offer-group__count">{stores}</span>
            </div>
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell resizable=false>"Tienda"</TableHeaderCell>
                        <TableHeaderCell resizable=false>"Precio"</TableHeaderCell>
                        <TableHeaderCell resizable=false>"Stock"</TableHeaderCell>
                        <TableHeaderCell resizable=false>"Última actualización"</TableHeaderCell>
                        <TableHeaderCell resizable=false>"Enlace"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {group
                        .offers
                        .into_iter()
                        .map(|offer| {
                            let stock = stock_badge(offer.price.as_ref());
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>
                                            {offer.store_name.clone()}
                                            {(!offer.store_active).then(|| view! {
                                                " "
                                                <Badge variant="warning">"Pendiente"</Badge>
                                            })}
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>{price_cell(offer.price.clone())}</TableCell>
                                    <TableCell>{stock}</TableCell>
                                    <TableCell>{format_optional_datetime_es(offer.last_scraped_at.as_ref())}</TableCell>
                                    <TableCell>
                                        {match offer.url.clone() {
                                            Some(url) => view! {
                                                <a href=url target="_blank" rel="noopener noreferrer" class="link">
                                                    {icon("external-link")}
                                                    " Ver"
                                                </a>
                                            }
                                            .into_any(),
                                            None => view! { <span>"-"</span> }.into_any(),
                                        }}
                                    </TableCell>
                                </TableRow>
                            }
                        })
                        .collect_view()}
                </TableBody>
            </Table>
        </div>
    }
}

/// Read-only view of scraped offers grouped by catalog product
#[component]
#[allow(non_snake_case)]
pub fn ScrapedOfferList() -> impl IntoView {
    let state = RwSignal::new(ListState::<ScrapedOffer>::with_filters(&[FILTER_STORE]));

    let reload = Callback::new(move |_: ()| {
        let query = default_query();
        spawn_load(state, async move { fetch_offers(&query).await }, MSG_LOAD);
    });

    let groups = Memo::new(move |_| state.with(|s| group_by_catalog(&s.filtered())));
    let stats = Memo::new(move |_| state.with(|s| groups.with(|g| offer_stats(&s.items, g))));
    let loading = Signal::derive(move || state.with(|s| s.loading));

    reload.run(());

    view! {
        <div class="page">
            <PageHeader title="Productos Scrapeados" subtitle="Precios observados por tienda para cada producto del catálogo">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| reload.run(())
                    disabled=loading
                >
                    {icon("refresh")}
                    " Actualizar"
                </Button>
            </PageHeader>

            <ErrorBanner
                message=Signal::derive(move || state.with(|s| s.error.clone()))
                on_dismiss=Callback::new(move |_| state.update(|s| s.clear_error()))
            />

            <div class="stat-grid">
                <StatCard
                    label="Ofertas"
                    icon_name="offers"
                    value=Signal::derive(move || stats.with(|s| s.offers.to_string()))
                />
                <StatCard
                    label="Productos del catálogo"
                    icon_name="catalog"
                    value=Signal::derive(move || stats.with(|s| s.groups.to_string()))
                />
                <StatCard
                    label="Última actualización"
                    icon_name="refresh"
                    value=Signal::derive(move || stats.with(|s| s.last_scraped.clone()))
                />
            </div>

            <div class="list-toolbar">
                <SearchInput
                    value=Signal::derive(move || state.with(|s| s.filter.search_term.clone()))
                    on_change=Callback::new(move |term: String| state.update(|s| s.set_search(term)))
                    placeholder="Buscar por producto, tienda o categoría..."
                />
                <FilterSelect
                    label="Tienda"
                    all_label="Todas las tiendas"
                    value=Signal::derive(move || state.with(|s| s.filter.value(FILTER_STORE).to_string()))
                    options=Signal::derive(move || state.with(|s| store_options(&s.items)))
                    on_change=Callback::new(move |v: String| state.update(|s| s.set_filter(FILTER_STORE, v)))
                />
            </div>

            {move || {
                let groups = groups.get();
                if groups.is_empty() {
                    let text = if loading.get() {
                        "Cargando productos..."
                    } else if state.with(|s| s.filter.is_neutral()) {
                        "No hay productos scrapeados"
                    } else {
                        "No se encontraron productos"
                    };
                    return view! { <div class="empty-state">{text}</div> }.into_any();
                }
                groups
                    .into_iter()
                    .map(|group| view! { <OfferGroupCard group=group /> })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn offers() -> Vec<ScrapedOffer> {
        serde_json::from_value(json!([
            {"id": 1, "catalog_id": 10, "catalog_name": "Air Max 90", "brand_name": "Nike",
             "category_name": "Zapatillas", "store_name": "Falabella", "store_active": true,
             "price": {"price": 89990, "original_price": 109990, "in_stock": true},
             "last_scraped_at": "2024-01-05T09:07:00Z"},
            {"id": 2, "catalog_id": 11, "catalog_name": "Superstar", "store_name": "Paris",
             "store_active": false, "price": {"price": 59990, "in_stock": false}},
            {"id": 3, "catalog_id": 10, "catalog_name": "Air Max 90", "store_name": "Ripley",
             "store_active": true, "price": {"price": 84990, "original_price": 79990, "in_stock": true}}
        ]))
        .unwrap()
    }

    #[test]
    fn stats_follow_filtered_groups() {
        let loaded = offers();
        let mut state = ListState::with_filters(&[FILTER_STORE]);
        state.items = loaded.clone();

        let stats = offer_stats(&loaded, &group_by_catalog(&state.filtered()));
        assert_eq!(
            stats,
            OfferStats {
                offers: 3,
                groups: 2,
                last_scraped: "5 ene 2024, 09:07".to_string(),
            }
        );

        state.set_filter(FILTER_STORE, "Ripley");
        let stats = offer_stats(&loaded, &group_by_catalog(&state.filtered()));
        assert_eq!((stats.offers, stats.groups), (1, 1));
    }

    #[test]
    fn no_offers_shows_dash() {
        assert_eq!(offer_stats(&[], &[]).last_scraped, "-");
    }

    #[test]
    fn search_matches_store_and_category() {
        let mut state = ListState::with_filters(&[FILTER_STORE]);
        state.items = offers();
        state.set_search("zapatillas");
        assert_eq!(state.filtered().len(), 1);
        state.set_search("paris");
        assert_eq!(state.filtered()[0].catalog_name, "Superstar");
    }

    #[test]
    fn store_options_are_distinct() {
        let labels: Vec<_> = store_options(&offers()).into_iter().map(|(v, _)| v).collect();
        assert_eq!(labels, vec!["Falabella", "Paris", "Ripley"]);
    }

    #[test]
    fn store_count_label() {
        assert_eq!(stores_label(1), "1 tienda");
        assert_eq!(stores_label(3), "3 tiendas");
    }
}
