use reqwest::header;

use data::{NewProduct, Product};

use crate::error::ApiError;

/// The remote product service boundary. The UI core talks to this trait
/// only; tests substitute a mock, production uses [`HttpCatalog`].
pub trait CatalogApi {
    /// Reads the full product collection, in the order the service returns it.
    async fn list(&self) -> Result<Vec<Product>, ApiError>;

    /// Appends a new product to the remote collection. The response body is
    /// ignored; the service assigns the id.
    async fn create(&self, product: &NewProduct) -> Result<(), ApiError>;
}

/// HTTP implementation of [`CatalogApi`] against `{base}/products`.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalog {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn products_url(&self) -> String {
        format!("{}/products", self.base_url.trim_end_matches('/'))
    }
}

impl CatalogApi for HttpCatalog {
    async fn list(&self) -> Result<Vec<Product>, ApiError> {
        let url = self.products_url();
        tracing::debug!("GET {url}");

        // Reads must bypass intermediary caches so the collection always
        // reflects the latest server state.
        let response = self
            .client
            .get(&url)
            .header(header::CACHE_CONTROL, "no-cache")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }

        response.json().await.map_err(ApiError::Decode)
    }

    async fn create(&self, product: &NewProduct) -> Result<(), ApiError> {
        let url = self.products_url();
        tracing::debug!("POST {url}");

        let response = self.client.post(&url).json(product).send().await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }

        Ok(())
    }
}
