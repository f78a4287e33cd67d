pub mod a001_category;
pub mod a002_manufacturer;
pub mod a003_brand;
pub mod a004_store;
pub mod a005_catalog_product;
