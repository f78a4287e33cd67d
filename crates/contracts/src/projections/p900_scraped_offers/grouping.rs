//! Grouping of flat offer rows into "catalog product -> store offers"

use super::dto::ScrapedOffer;
use crate::domain::common::EntityId;
use std::collections::HashMap;

/// Offers of one catalog product. Display fields come from the first offer
/// seen for that product.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogOfferGroup {
    pub catalog_id: EntityId,
    pub catalog_name: String,
    pub catalog_sku: Option<String>,
    pub brand_name: Option<String>,
    pub category_name: Option<String>,
    pub offers: Vec<ScrapedOffer>,
}

impl CatalogOfferGroup {
    fn seed(first: &ScrapedOffer) -> Self {
        Self {
            catalog_id: first.catalog_id.clone(),
            catalog_name: first.catalog_name.clone(),
            catalog_sku: first.catalog_sku.clone(),
            brand_name: first.brand_name.clone(),
            category_name: first.category_name.clone(),
            offers: Vec::new(),
        }
    }

    pub fn store_count(&self) -> usize {
        self.offers.len()
    }
}

/// Group offers by `catalog_id`.
///
/// Groups appear in first-seen order of their catalog id and each group keeps
/// its offers in input order. No sorting, deduplication or price aggregation.
pub fn group_by_catalog(offers: &[ScrapedOffer]) -> Vec<CatalogOfferGroup> {
    let mut index: HashMap<&EntityId, usize> = HashMap::new();
    let mut groups: Vec<CatalogOfferGroup> = Vec::new();

    for offer in offers {
        let slot = *index.entry(&offer.catalog_id).or_insert_with(|| {
            groups.push(CatalogOfferGroup::seed(offer));
            groups.len() - 1
        });
        groups[slot].offers.push(offer.clone());
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer(id: i64, catalog: &str, name: &str, store: &str) -> ScrapedOffer {
        ScrapedOffer {
            id: EntityId::from(id),
            catalog_id: EntityId::from(catalog),
            catalog_name: name.to_string(),
            catalog_sku: None,
            brand_name: None,
            category_name: None,
            store_name: store.to_string(),
            store_active: true,
            price: None,
            url: None,
            last_scraped_at: None,
        }
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert!(group_by_catalog(&[]).is_empty());
    }

    #[test]
    fn groups_in_first_seen_order() {
        let offers = vec![
            offer(1, "20", "Yogurt", "Lider"),
            offer(2, "3", "Leche", "Jumbo"),
            offer(3, "20", "Yogurt", "Jumbo"),
            offer(4, "3", "Leche", "Unimarc"),
            offer(5, "7", "Pan", "Lider"),
        ];
        let groups = group_by_catalog(&offers);

        let ids: Vec<&str> = groups.iter().map(|g| g.catalog_id.as_str()).collect();
        assert_eq!(ids, vec!["20", "3", "7"]);

        let stores: Vec<&str> = groups[0].offers.iter().map(|o| o.store_name.as_str()).collect();
        assert_eq!(stores, vec!["Lider", "Jumbo"]);
        assert_eq!(groups[1].store_count(), 2);
    }

    #[test]
    fn display_fields_come_from_first_offer() {
        let mut first = offer(1, "c", "Leche Entera", "Lider");
        first.brand_name = Some("Colun".into());
        let mut second = offer(2, "c", "LECHE ENTERA 1L", "Jumbo");
        second.brand_name = Some("Soprole".into());

        let groups = group_by_catalog(&[first, second]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].catalog_name, "Leche Entera");
        assert_eq!(groups[0].brand_name.as_deref(), Some("Colun"));
    }

    #[test]
    fn offer_count_is_conserved() {
        let offers: Vec<ScrapedOffer> = (0..50)
            .map(|i| offer(i, &(i % 7).to_string(), "p", "s"))
            .collect();
        let groups = group_by_catalog(&offers);
        let total: usize = groups.iter().map(|g| g.offers.len()).sum();
        assert_eq!(total, offers.len());

        // Concatenation differs from the input only by a stable reordering on catalog_id.
        let mut expected = offers.clone();
        let order: Vec<EntityId> = groups.iter().map(|g| g.catalog_id.clone()).collect();
        expected.sort_by_key(|o| order.iter().position(|id| id == &o.catalog_id));
        let flattened: Vec<ScrapedOffer> = groups.into_iter().flat_map(|g| g.offers).collect();
        assert_eq!(flattened, expected);
    }
}
