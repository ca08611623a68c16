//! Catalog fetching for the Duka storefront.
//!
//! [`FetchClient`] is a thin `reqwest` wrapper with a base URL. [`HttpCatalogSource`] and [`FileCatalogSource`] plug it (or the
//! filesystem) into the commerce crate's `CatalogSource` seam.
//!
//! # Example
//!
//! ```rust,no_run
//! use duka_commerce::catalog::CatalogStore;
//! use duka_data::{FetchClient, HttpCatalogSource};
//! use duka_observability::StructuredLogger;
//!
//! # async fn demo() -> Result<(), duka_data::FetchError> {
//! let client = FetchClient::new()?.with_base_url("https://shop.example.com");
//! let source = HttpCatalogSource::new(client, "/shayratronics/products.json");
//!
//! let mut catalog = CatalogStore::new();
//! catalog.load(&source, &StructuredLogger::disabled()).await;
//! # Ok(())
//! # }
//! ```

mod error;
mod response;
mod source;

use std::time::Duration;

pub use error::FetchError;
pub use response::Response;
pub use source::{FileCatalogSource, HttpCatalogSource, DEFAULT_CATALOG_PATH};

/// HTTP client for catalog requests.
///
/// Requests are issued once; there is no retry.
#[derive(Debug, Clone)]
pub struct FetchClient {
    client: reqwest::Client,
    base_url: Option<String>,
}

impl FetchClient {
    /// Create a new HTTP client.
    pub fn new() -> Result<Self, FetchError> {
        Self::builder(None)
    }

    /// Create a client whose requests time out after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        Self::builder(Some(timeout))
    }

    fn builder(timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url: None,
        })
    }

    /// Set a base URL that will be prepended to relative request paths.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// The configured base URL, if any.
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Resolve `url` against the base URL.
    ///
    /// Absolute `http(s)://` URLs are returned unchanged. A relative path
    /// without a base URL is an error.
    pub fn resolve(&self, url: &str) -> Result<String, FetchError> {
        if url.starts_with("http://") || url.starts_with("https://") {
            return Ok(url.to_string());
        }
        match &self.base_url {
            Some(base) => {
                let path = url.trim_start_matches('/');
                Ok(format!("{}/{}", base.trim_end_matches('/'), path))
            }
            None => Err(FetchError::InvalidUrl(format!(
                "relative URL '{}' with no base URL",
                url
            ))),
        }
    }

    /// Send a GET request and buffer the response.
    pub async fn get(&self, url: &str) -> Result<Response, FetchError> {
        let full_url = self.resolve(url)?;
        let response = self.client.get(&full_url).send().await?;
        Response::from_reqwest(response).await
    }

    /// GET `url`, fail on non-2xx, and parse the body as JSON.
    pub async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        self.get(url).await?.error_for_status()?.json()
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FetchClient, FetchError, FileCatalogSource, HttpCatalogSource, Response};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_joins_base_and_path() {
        let client = FetchClient::new()
            .unwrap()
            .with_base_url("https://shop.example.com/");
        assert_eq!(
            client.resolve("/shayratronics/products.json").unwrap(),
            "https://shop.example.com/shayratronics/products.json"
        );
        assert_eq!(
            client.resolve("products.json").unwrap(),
            "https://shop.example.com/products.json"
        );
    }

    #[test]
    fn test_resolve_keeps_absolute_urls() {
        let client = FetchClient::new().unwrap().with_base_url("https://a.example");
        assert_eq!(
            client.resolve("http://b.example/p.json").unwrap(),
            "http://b.example/p.json"
        );
    }

    #[test]
    fn test_resolve_relative_without_base_fails() {
        let client = FetchClient::new().unwrap();
        assert!(matches!(
            client.resolve("/products.json"),
            Err(FetchError::InvalidUrl(_))
        ));
    }
}
