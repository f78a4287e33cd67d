mod view;
mod view_model;

pub use view::BrandDetails;
pub use view_model::BrandDetailsViewModel;
