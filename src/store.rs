//! Application State Store
//!
//! Uses Leptos reactive_stores so each panel only re-renders on its own field.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::view_model::{FavoritesView, ResultsView};

#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Search results panel
    pub results: ResultsView,
    /// Favorites panel
    pub favorites: FavoritesView,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the whole results panel
pub fn store_set_results(store: &AppStore, view: ResultsView) {
    *store.results().write() = view;
}

/// Replace the whole favorites panel
pub fn store_set_favorites(store: &AppStore, view: FavoritesView) {
    *store.favorites().write() = view;
}
