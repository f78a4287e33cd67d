mod view;
mod view_model;

pub use view::ManufacturerDetails;
pub use view_model::ManufacturerDetailsViewModel;
