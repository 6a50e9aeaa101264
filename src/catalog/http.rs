//! HTTP Catalog
//!
//! `reqwest` implementation of [`RecipeCatalog`]. On wasm32 reqwest drives the
//! browser's `fetch`.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use super::{lookup_url, search_url, RecipeCatalog};
use crate::error::{FetchError, FetchResult};
use crate::models::{Recipe, SearchFilter};

#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: Client,
    base_url: String,
}

impl HttpCatalog {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn get_json<R: DeserializeOwned>(&self, url: &str) -> FetchResult<R> {
        let response = self.client.get(url).send().await?;
        let response = ensure_success(response)?;
        Ok(response.json::<R>().await?)
    }
}

/// Non-2xx becomes `FetchError::Status`
fn ensure_success(response: Response) -> FetchResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(FetchError::Status(status.as_u16()))
    }
}

#[async_trait(?Send)]
impl RecipeCatalog for HttpCatalog {
    async fn search(&self, filter: &SearchFilter) -> FetchResult<Vec<Recipe>> {
        let url = search_url(&self.base_url, filter);
        log::debug!("GET {}", url);
        let entries: Vec<serde_json::Value> = self.get_json(&url).await?;
        Ok(decode_listing(entries))
    }

    async fn lookup(&self, id: &str) -> FetchResult<Recipe> {
        let url = lookup_url(&self.base_url, id);
        log::debug!("GET {}", url);
        self.get_json(&url).await
    }
}

/// Decode entries one by one so a single bad element (e.g. `null`) does not
/// sink the whole listing.
fn decode_listing(entries: Vec<serde_json::Value>) -> Vec<Recipe> {
    entries
        .into_iter()
        .filter_map(|entry| match serde_json::from_value::<Recipe>(entry.clone()) {
            Ok(recipe) => Some(recipe),
            Err(err) => {
                log::info!("skipping undecodable listing entry {}: {}", entry, err);
                None
            }
        })
        .collect()
}
