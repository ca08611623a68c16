//! `CatalogSource` implementations backed by HTTP and the filesystem.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use duka_commerce::catalog::{CatalogSource, Product};
use duka_commerce::CommerceError;

use crate::{FetchClient, FetchError};

/// Catalog path served alongside the storefront.
pub const DEFAULT_CATALOG_PATH: &str = "/shayratronics/products.json";

/// Fetches the product array with one GET request.
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    client: FetchClient,
    path: String,
}

impl HttpCatalogSource {
    pub fn new(client: FetchClient, path: impl Into<String>) -> Self {
        Self {
            client,
            path: path.into(),
        }
    }

    /// Source for [`DEFAULT_CATALOG_PATH`].
    pub fn with_default_path(client: FetchClient) -> Self {
        Self::new(client, DEFAULT_CATALOG_PATH)
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, CommerceError> {
        let products: Vec<Product> = self.client.get_json(&self.path).await?;
        Ok(products)
    }

    fn describe(&self) -> String {
        self.client
            .resolve(&self.path)
            .unwrap_or_else(|_| self.path.clone())
    }
}

/// Reads the same JSON payload from a local file.
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<Vec<Product>, FetchError> {
        let bytes = tokio::fs::read(&self.path).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, CommerceError> {
        Ok(self.read().await?)
    }

    fn describe(&self) -> String {
        format!("file://{}", self.path.display())
    }
}
