use crate::domain::common::EntityId;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};

/// Price observation captured by the scraper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferPrice {
    #[serde(deserialize_with = "price")]
    pub price: f64,
    #[serde(default, deserialize_with = "optional_price")]
    pub original_price: Option<f64>,
    #[serde(default)]
    pub in_stock: bool,
}

impl OfferPrice {
    /// Original price worth showing struck through: only when above the current price.
    pub fn discounted_from(&self) -> Option<f64> {
        self.original_price.filter(|original| *original > self.price)
    }
}

/// One catalog product as offered by one store (`GET /products`).
/// Read-only: the console never creates, edits or deletes offers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrapedOffer {
    pub id: EntityId,
    pub catalog_id: EntityId,
    pub catalog_name: String,
    #[serde(default)]
    pub catalog_sku: Option<String>,
    #[serde(default)]
    pub brand_name: Option<String>,
    #[serde(default)]
    pub category_name: Option<String>,
    pub store_name: String,
    #[serde(default = "default_true")]
    pub store_active: bool,
    #[serde(default)]
    pub price: Option<OfferPrice>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "scraped_at")]
    pub last_scraped_at: Option<DateTime<Utc>>,
}

fn default_true() -> bool {
    true
}

/// Decimal prices may arrive as JSON numbers or as numeric strings
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Number(f64),
    Text(String),
}

impl RawPrice {
    fn into_f64<E: de::Error>(self) -> Result<f64, E> {
        match self {
            RawPrice::Number(v) => Ok(v),
            RawPrice::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| E::custom(format!("invalid price {:?}", s))),
        }
    }
}

fn price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    RawPrice::deserialize(deserializer)?.into_f64()
}

fn optional_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<RawPrice>::deserialize(deserializer)?
        .map(RawPrice::into_f64)
        .transpose()
}

/// RFC 3339, or a naive `YYYY-MM-DD[T ]HH:MM:SS[.ffffff]` read as UTC.
/// Anything else yields None instead of failing the whole row.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

fn scraped_at<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.and_then(|raw| parse_timestamp(&raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_offer_row() {
        let offer: ScrapedOffer = serde_json::from_str(
            r#"{"id":10,"catalog_id":"c-1","catalog_name":"Leche","store_name":"Lider",
                "store_active":false,
                "price":{"price":990,"original_price":1290,"in_stock":true},
                "last_scraped_at":"2024-03-15T14:02:26Z"}"#,
        )
        .unwrap();
        assert!(!offer.store_active);
        assert_eq!(offer.price.as_ref().unwrap().discounted_from(), Some(1290.0));
        assert!(offer.last_scraped_at.is_some());
    }

    #[test]
    fn decodes_decimal_strings_and_naive_timestamps() {
        let offers: Vec<ScrapedOffer> = serde_json::from_str(
            r#"[{"id":1,"catalog_id":1,"catalog_name":"Leche","store_name":"Lider",
                 "price":{"price":"990.00","original_price":"1290.50","in_stock":true},
                 "last_scraped_at":"2024-03-15T14:02:26.123456"},
                {"id":2,"catalog_id":1,"catalog_name":"Leche","store_name":"Jumbo",
                 "price":{"price":1010,"original_price":null},
                 "last_scraped_at":"2024-03-15 14:02:26"}]"#,
        )
        .unwrap();
        let first = offers[0].price.as_ref().unwrap();
        assert_eq!(first.price, 990.0);
        assert_eq!(first.original_price, Some(1290.5));
        assert_eq!(offers[1].price.as_ref().unwrap().original_price, None);

        let expected = DateTime::parse_from_rfc3339("2024-03-15T14:02:26Z").unwrap();
        assert_eq!(
            offers[0].last_scraped_at.map(|t| t.timestamp()),
            Some(expected.timestamp())
        );
        assert_eq!(offers[1].last_scraped_at, Some(expected.with_timezone(&Utc)));
    }

    #[test]
    fn unreadable_timestamp_does_not_fail_the_row() {
        let offer: ScrapedOffer = serde_json::from_str(
            r#"{"id":1,"catalog_id":1,"catalog_name":"Leche","store_name":"Lider",
                "last_scraped_at":"ayer"}"#,
        )
        .unwrap();
        assert_eq!(offer.last_scraped_at, None);
    }

    #[test]
    fn non_numeric_price_is_rejected() {
        let result: Result<OfferPrice, _> = serde_json::from_str(r#"{"price":"gratis"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn original_price_below_current_is_not_a_discount() {
        let p = OfferPrice {
            price: 1000.0,
            original_price: Some(900.0),
            in_stock: true,
        };
        assert_eq!(p.discounted_from(), None);
    }
}
