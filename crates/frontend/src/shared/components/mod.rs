pub mod badge;
pub mod delete_confirm;
pub mod error_banner;
pub mod filter_select;
pub mod form_field;
pub mod modal;
pub mod page_header;
pub mod row_actions;
pub mod search_input;
pub mod selection_bar;
pub mod stat_card;
pub mod table_checkbox;
