pub mod error_body;
pub mod list_query;
