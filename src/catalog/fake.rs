//! In-memory catalog for tests.

use std::cell::RefCell;
use std::collections::HashMap;

use async_trait::async_trait;

use super::RecipeCatalog;
use crate::error::{FetchError, FetchResult};
use crate::models::{Recipe, SearchFilter};

#[derive(Default)]
pub struct FakeCatalog {
    pub listing: Option<FetchResult<Vec<Recipe>>>,
    pub records: HashMap<String, FetchResult<Recipe>>,
    pub searches: RefCell<Vec<SearchFilter>>,
    pub lookups: RefCell<Vec<String>>,
}

impl FakeCatalog {
    pub fn with_listing(listing: FetchResult<Vec<Recipe>>) -> Self {
        Self {
            listing: Some(listing),
            ..Default::default()
        }
    }

    pub fn with_record(mut self, recipe: Recipe) -> Self {
        self.records.insert(recipe.id.clone(), Ok(recipe));
        self
    }

    pub fn with_failure(mut self, id: &str, err: FetchError) -> Self {
        self.records.insert(id.to_string(), Err(err));
        self
    }
}

#[async_trait(?Send)]
impl RecipeCatalog for FakeCatalog {
    async fn search(&self, filter: &SearchFilter) -> FetchResult<Vec<Recipe>> {
        self.searches.borrow_mut().push(filter.clone());
        self.listing.clone().unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn lookup(&self, id: &str) -> FetchResult<Recipe> {
        self.lookups.borrow_mut().push(id.to_string());
        self.records
            .get(id)
            .cloned()
            .unwrap_or(Err(FetchError::Status(404)))
    }
}

/// Well-formed record for tests
pub fn recipe(id: &str, label: &str) -> Recipe {
    Recipe {
        id: id.to_string(),
        label: Some(label.to_string()),
        image: Some(format!("https://img.example.com/{}.jpg", id)),
        calories: Some(420.6),
        diet_labels: Some(vec!["Balanced".to_string()]),
        url: Some(format!("https://recipes.example.com/{}", id)),
    }
}
