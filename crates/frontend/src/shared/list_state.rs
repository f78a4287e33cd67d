//! Per-screen list state: fetched items, client-side filtering and bulk selection

use crate::shared::resource::BulkDeleteError;
use contracts::domain::common::{Entity, EntityId};
use std::collections::{BTreeMap, HashSet};

/// Neutral value of every categorical filter
pub const FILTER_ALL: &str = "all";
pub const STATUS_ACTIVE: &str = "active";
pub const STATUS_INACTIVE: &str = "inactive";

pub fn status_value(active: bool) -> String {
    if active { STATUS_ACTIVE } else { STATUS_INACTIVE }.to_string()
}

/// (id, name) pairs for a picker or filter, ordered by name
pub fn entity_options<T: Entity>(items: &[T]) -> Vec<(String, String)> {
    let mut options: Vec<_> = items
        .iter()
        .map(|item| (item.id().to_string(), item.name().to_string()))
        .collect();
    options.sort_by_cached_key(|(_, name)| name.to_lowercase());
    options
}

/// Records that can be narrowed by the list toolbar
pub trait Filterable {
    /// Text fields matched by the search box
    fn search_fields(&self) -> Vec<Option<&str>>;

    /// Value compared against categorical filter `key`
    fn filter_value(&self, key: &str) -> Option<String>;

    fn matches_search(&self, term_lower: &str) -> bool {
        if term_lower.is_empty() {
            return true;
        }
        self.search_fields()
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(term_lower))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    pub search_term: String,
    pub categorical: BTreeMap<&'static str, String>,
}

impl ListFilter {
    pub fn value(&self, key: &str) -> &str {
        self.categorical
            .get(key)
            .map(String::as_str)
            .unwrap_or(FILTER_ALL)
    }

    pub fn is_neutral(&self) -> bool {
        self.search_term.is_empty() && self.categorical.values().all(|v| v == FILTER_ALL)
    }

    pub fn accepts<T: Filterable>(&self, item: &T) -> bool {
        let term = self.search_term.to_lowercase();
        if !item.matches_search(&term) {
            return false;
        }
        self.categorical.iter().all(|(key, wanted)| {
            wanted == FILTER_ALL || item.filter_value(key).as_deref() == Some(wanted.as_str())
        })
    }

    pub fn apply<T: Filterable + Clone>(&self, items: &[T]) -> Vec<T> {
        items.iter().filter(|item| self.accepts(*item)).cloned().collect()
    }
}

/// Issued by `begin_load`; only the most recent ticket may apply its result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug, Clone)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
    pub filter: ListFilter,
    pub selected_ids: HashSet<EntityId>,
    request_seq: u64,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            filter: ListFilter::default(),
            selected_ids: HashSet::new(),
            request_seq: 0,
        }
    }
}

impl<T> ListState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the given categorical filters set to "all"
    pub fn with_filters(keys: &[&'static str]) -> Self {
        let mut state = Self::default();
        for key in keys {
            state.filter.categorical.insert(*key, FILTER_ALL.to_string());
        }
        state
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.request_seq += 1;
        self.loading = true;
        self.error = None;
        LoadTicket(self.request_seq)
    }

    /// Apply a load result. Returns false when a newer load was started after
    /// `ticket` was issued; the result is then dropped.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<Vec<T>, String>) -> bool {
        if ticket.0 != self.request_seq {
            log::debug!("discarding stale list response #{}", ticket.0);
            return false;
        }
        self.loading = false;
        match result {
            Ok(items) => self.items = items,
            Err(message) => self.error = Some(message),
        }
        true
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.filter.search_term = term.into();
    }

    pub fn set_filter(&mut self, key: &'static str, value: impl Into<String>) {
        self.filter.categorical.insert(key, value.into());
    }

    pub fn is_selected(&self, id: &EntityId) -> bool {
        self.selected_ids.contains(id)
    }

    pub fn toggle(&mut self, id: &EntityId) {
        if !self.selected_ids.remove(id) {
            self.selected_ids.insert(id.clone());
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected_ids.clear();
    }

    pub fn selection_len(&self) -> usize {
        self.selected_ids.len()
    }

    /// After a bulk delete: the selection is dropped and a failure is shown
    /// as a single aggregate message
    pub fn settle_bulk(&mut self, result: Result<usize, BulkDeleteError>) {
        self.clear_selection();
        if let Err(err) = result {
            self.set_error(err.to_string());
        }
    }
}

impl<T: Filterable + Clone> ListState<T> {
    pub fn filtered(&self) -> Vec<T> {
        self.filter.apply(&self.items)
    }
}

impl<T: Filterable + Entity + Clone> ListState<T> {
    /// Checked: select exactly the visible rows. Unchecked: clear.
    pub fn set_all(&mut self, checked: bool) {
        if checked {
            self.selected_ids = self
                .items
                .iter()
                .filter(|item| self.filter.accepts(*item))
                .map(|item| item.id().clone())
                .collect();
        } else {
            self.selected_ids.clear();
        }
    }

    /// Derived on every read from the selection and the filtered set
    pub fn all_selected(&self) -> bool {
        let visible = self
            .items
            .iter()
            .filter(|item| self.filter.accepts(*item))
            .count();
        !self.selected_ids.is_empty() && self.selected_ids.len() == visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: EntityId,
        name: String,
        owner_id: Option<EntityId>,
        owner_name: Option<String>,
        active: bool,
    }

    impl Entity for Row {
        fn id(&self) -> &EntityId {
            &self.id
        }
        fn name(&self) -> &str {
            &self.name
        }
        fn element_name() -> &'static str {
            "Fila"
        }
        fn list_name() -> &'static str {
            "Filas"
        }
    }

    impl Filterable for Row {
        fn search_fields(&self) -> Vec<Option<&str>> {
            vec![Some(&self.name), self.owner_name.as_deref()]
        }

        fn filter_value(&self, key: &str) -> Option<String> {
            match key {
                "manufacturer" => self.owner_id.as_ref().map(|id| id.to_string()),
                "status" => Some(status_value(self.active)),
                _ => None,
            }
        }
    }

    fn brand(id: i64, name: &str, manufacturer: Option<i64>, active: bool) -> Row {
        Row {
            id: EntityId::from(id),
            name: name.to_string(),
            owner_id: manufacturer.map(EntityId::from),
            owner_name: manufacturer.map(|m| format!("Fabricante {}", m)),
            active,
        }
    }

    fn loaded(items: Vec<Row>) -> ListState<Row> {
        let mut state = ListState::with_filters(&["manufacturer", "status"]);
        let ticket = state.begin_load();
        assert!(state.finish_load(ticket, Ok(items)));
        state
    }

    fn sample() -> Vec<Row> {
        vec![
            brand(1, "Nike", None, true),
            brand(2, "Adidas", Some(5), false),
            brand(3, "Puma", Some(5), true),
        ]
    }

    #[test]
    fn neutral_filter_is_identity() {
        let state = loaded(sample());
        assert!(state.filter.is_neutral());
        assert_eq!(state.filtered(), state.items);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let mut state = loaded(sample());
        state.set_search("nik");
        let names: Vec<_> = state.filtered().into_iter().map(|b| b.name).collect();
        assert_eq!(names, vec!["Nike"]);

        state.set_search("NIKE");
        assert_eq!(state.filtered().len(), 1);
    }

    #[test]
    fn search_term_is_matched_as_typed() {
        let mut state = loaded(sample());
        state.set_search("nik ");
        assert!(!state.filter.is_neutral());
        assert!(state.filtered().is_empty());

        state.set_search("fabricante ");
        assert_eq!(state.filtered().len(), 2);
    }

    #[test]
    fn search_covers_joined_manufacturer_name() {
        let mut state = loaded(sample());
        state.set_search("fabricante 5");
        assert_eq!(state.filtered().len(), 2);
    }

    #[test]
    fn categorical_filters_compare_canonical_ids() {
        let mut state = loaded(sample());
        state.set_filter("manufacturer", EntityId::from(5).to_string());
        assert_eq!(state.filtered().len(), 2);

        state.set_filter("status", STATUS_ACTIVE);
        let ids: Vec<_> = state.filtered().into_iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![EntityId::from(3)]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let mut state = loaded(sample());
        state.set_search("a");
        state.set_filter("status", STATUS_ACTIVE);
        let once = state.filtered();
        let twice = state.filter.apply(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn select_all_twice_restores_selection() {
        let mut state = loaded(sample());
        let before = state.selected_ids.clone();
        state.set_all(true);
        assert_eq!(state.selection_len(), 3);
        assert!(state.all_selected());
        state.set_all(false);
        assert_eq!(state.selected_ids, before);
    }

    #[test]
    fn select_all_takes_only_visible_rows() {
        let mut state = loaded(sample());
        state.set_filter("status", STATUS_ACTIVE);
        state.set_all(true);
        let mut ids: Vec<_> = state.selected_ids.iter().cloned().collect();
        ids.sort();
        assert_eq!(ids, vec![EntityId::from(1), EntityId::from(3)]);
    }

    #[test]
    fn narrowing_filter_unchecks_select_all_without_touching_selection() {
        let mut state = loaded(sample());
        state.set_all(true);
        state.set_search("nik");
        assert!(!state.all_selected());
        assert_eq!(state.selection_len(), 3);
    }

    #[test]
    fn toggle_flips_membership() {
        let mut state = loaded(sample());
        let id = EntityId::from(2);
        state.toggle(&id);
        assert!(state.is_selected(&id));
        state.toggle(&id);
        assert!(!state.is_selected(&id));
        assert!(!state.all_selected());
    }

    #[test]
    fn stale_load_is_discarded() {
        let mut state: ListState<Row> = ListState::new();
        let first = state.begin_load();
        let second = state.begin_load();

        assert!(state.finish_load(second, Ok(vec![brand(1, "Nike", None, true)])));
        assert!(!state.finish_load(first, Ok(sample())));
        assert_eq!(state.items.len(), 1);
        assert!(!state.loading);
    }

    #[test]
    fn failed_load_keeps_previous_items() {
        let mut state = loaded(sample());
        let ticket = state.begin_load();
        assert!(state.loading);
        assert!(state.finish_load(ticket, Err("Error al cargar las marcas".into())));
        assert_eq!(state.items.len(), 3);
        assert_eq!(state.error.as_deref(), Some("Error al cargar las marcas"));
    }

    #[test]
    fn entity_options_are_sorted_by_name() {
        let options = entity_options(&sample());
        assert_eq!(
            options,
            vec![
                ("2".to_string(), "Adidas".to_string()),
                ("1".to_string(), "Nike".to_string()),
                ("3".to_string(), "Puma".to_string()),
            ]
        );
    }
}
