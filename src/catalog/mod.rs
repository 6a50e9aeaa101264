//! Catalog Client
//!
//! Access to the remote recipe service, organized as a trait so the search
//! driver and the favorites render pass can run against a fake in tests.

mod http;
#[cfg(test)]
pub mod fake;

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::FetchResult;
use crate::models::{Recipe, SearchFilter};

pub use http::HttpCatalog;

/// RFC 3986 unreserved characters stay literal, everything else is escaped
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[async_trait(?Send)]
pub trait RecipeCatalog {
    /// `GET /products?query=..&diet=..`
    async fn search(&self, filter: &SearchFilter) -> FetchResult<Vec<Recipe>>;

    /// `GET /products/<id>`
    async fn lookup(&self, id: &str) -> FetchResult<Recipe>;
}

// ========================
// URL Construction
// ========================

fn products_root(base_url: &str) -> String {
    format!("{}/products", base_url.trim_end_matches('/'))
}

pub fn search_url(base_url: &str, filter: &SearchFilter) -> String {
    format!(
        "{}?query={}&diet={}",
        products_root(base_url),
        utf8_percent_encode(&filter.query, COMPONENT),
        utf8_percent_encode(&filter.diet, COMPONENT),
    )
}

pub fn lookup_url(base_url: &str, id: &str) -> String {
    format!("{}/{}", products_root(base_url), utf8_percent_encode(id, COMPONENT))
}
