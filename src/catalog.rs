//! Product catalog types and the one-shot fetch client.

#[cfg(test)]
use mockall::automock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A catalog product. Once added to the cart, `count` and `actual_price` are
/// set and `price` tracks `actual_price * count`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_price: Option<f64>,
}

impl Product {
    /// Returns a copy of this product prepared as a cart line: quantity one,
    /// with the unit price snapshotted so quantity changes can recompute the
    /// line price.
    pub fn as_cart_line(&self) -> Product {
        let mut line = self.clone();
        line.count = Some(1);
        line.actual_price = Some(self.price);
        line
    }
}

/// Errors produced while fetching or decoding the catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Error from the HTTP request for a URL source
    #[error("catalog request failed: {0}")]
    Http(#[from] ureq::Error),

    /// Error reading a file based catalog source
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// Error decoding the catalog JSON
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Anything that can produce the product list. The loader thread only
/// depends on this seam so tests can swap in a mock.
#[cfg_attr(test, automock)]
pub trait ProductSource: Send + Sync {
    fn fetch(&self) -> Result<Vec<Product>, CatalogError>;
}

/// Fetches the catalog once from a static JSON resource. Sources that look
/// like http(s) URLs are requested over the wire, anything else is treated
/// as a file path. No retry, no caching.
pub struct CatalogClient {
    source: String,
}

impl CatalogClient {
    pub fn new(source: &str) -> Self {
        Self {
            source: source.to_string(),
        }
    }
}

impl ProductSource for CatalogClient {
    fn fetch(&self) -> Result<Vec<Product>, CatalogError> {
        let raw = if self.source.starts_with("http://") || self.source.starts_with("https://") {
            let mut res = ureq::get(&self.source).call()?;
            res.body_mut().read_to_string()?
        } else {
            std::fs::read_to_string(&self.source)?
        };

        let products = serde_json::from_str::<Vec<Product>>(&raw)?;
        Ok(products)
    }
}

#[cfg(test)]
#[path = "./catalog_tests.rs"]
mod tests;
