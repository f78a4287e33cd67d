//! Common types and traits for all aggregates

pub mod entity;
pub mod entity_id;
pub mod validation;

// Re-exports
pub use entity::Entity;
pub use entity_id::EntityId;
pub use validation::{FieldErrors, FormError};
