//! Shared contracts between the admin console and the catalog backend.
//!
//! Everything here is UI-free: records as the backend returns them, form
//! models with validation, the cleaned payloads sent back, and pure
//! projections over read-only data.

pub mod domain;
pub mod projections;
pub mod shared;
