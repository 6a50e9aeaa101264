//! Catalog Search
//!
//! Runs one search against the catalog and turns the outcome into a results
//! panel state. Failures end here; nothing is propagated to the caller.

use crate::catalog::RecipeCatalog;
use crate::models::SearchFilter;
use crate::view_model::ResultsView;

pub async fn run_search<C: RecipeCatalog + ?Sized>(catalog: &C, filter: &SearchFilter) -> ResultsView {
    log::info!("searching query={:?} diet={:?}", filter.query, filter.diet);
    let listing = catalog.search(filter).await;
    ResultsView::from_listing(listing)
}
