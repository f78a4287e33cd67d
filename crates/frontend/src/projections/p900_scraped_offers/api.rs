use crate::shared::api_utils::{get_json, with_query, ApiError};
use contracts::projections::p900_scraped_offers::dto::ScrapedOffer;
use contracts::shared::list_query::ListQuery;

pub const OFFERS_PATH: &str = "/products";

pub const MSG_LOAD: &str = "Error al cargar los productos scrapeados";

/// Flat offer rows, one per (catalog product, store)
pub async fn fetch_offers(query: &ListQuery) -> Result<Vec<ScrapedOffer>, ApiError> {
    get_json(&with_query(OFFERS_PATH, query)?).await
}
