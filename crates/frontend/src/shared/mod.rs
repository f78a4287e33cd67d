pub mod api_utils;
pub mod components;
pub mod config;
pub mod delete_gate;
pub mod form_state;
pub mod format;
pub mod icons;
pub mod list_screen;
pub mod list_state;
pub mod resource;
