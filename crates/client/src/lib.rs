pub mod catalog;
pub mod error;

pub use catalog::{CatalogApi, HttpCatalog};
pub use error::ApiError;
