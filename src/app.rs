//! Recipe Finder App
//!
//! Root component: search form on top, results and favorites side by side.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{start_search, FavoritesPanel, ResultsPanel, SearchBar};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::models::SearchFilter;
use crate::store::AppState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let favorites_trigger = signal(0u32);
    let ctx = AppContext::new(favorites_trigger, config);
    let store = Store::new(AppState::default());

    // Provide context to all children
    provide_context(ctx);
    provide_context(store);

    // Unfiltered search on mount
    Effect::new(move |_| {
        start_search(ctx, store, SearchFilter::default());
    });

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Recipe Finder"</h1>
                <SearchBar />
            </header>

            <main class="main-content">
                <ResultsPanel />
                <FavoritesPanel />
            </main>
        </div>
    }
}
