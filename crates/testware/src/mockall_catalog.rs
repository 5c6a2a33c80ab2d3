use mockall::mock;

use client::{ApiError, CatalogApi};
use data::{NewProduct, Product};

mock! {
    pub Catalog {}

    impl CatalogApi for Catalog {
        async fn list(&self) -> Result<Vec<Product>, ApiError>;
        async fn create(&self, product: &NewProduct) -> Result<(), ApiError>;
    }
}

impl std::fmt::Debug for MockCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MockCatalog")
    }
}
