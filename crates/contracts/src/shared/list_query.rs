use crate::domain::common::EntityId;
use serde::Serialize;

pub const DEFAULT_LIMIT: u32 = 100;

fn is_false(v: &bool) -> bool {
    !*v
}

/// Pagination and filter parameters of `GET /{resource}`.
/// Unset filters are not sent at all.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListQuery {
    pub skip: u32,
    pub limit: u32,
    #[serde(skip_serializing_if = "is_false")]
    pub active_only: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
            active_only: false,
            search: None,
            manufacturer_id: None,
            brand_id: None,
            category_id: None,
            country: None,
        }
    }
}

impl ListQuery {
    pub fn with_limit(limit: u32) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    pub fn active_only(mut self) -> Self {
        self.active_only = true;
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        self.search = if term.trim().is_empty() { None } else { Some(term) };
        self
    }
}
