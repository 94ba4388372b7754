mod export;
mod manager;
mod persistence;

pub use export::export_ingredients_csv;
pub use manager::CatalogManager;
pub use persistence::{load_catalog, save_catalog, Catalog};
