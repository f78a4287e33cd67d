mod view;
mod view_model;

pub use view::CatalogProductDetails;
pub use view_model::CatalogProductDetailsViewModel;
