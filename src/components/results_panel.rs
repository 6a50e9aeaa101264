//! Results Panel Component

use leptos::prelude::*;

use super::RecipeCard;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::view_model::ResultsView;

/// Search results, replaced wholesale on every search
#[component]
pub fn ResultsPanel() -> impl IntoView {
    let store = use_app_store();

    view! {
        <section id="display-recipes" class="results-panel">
            {move || match store.results().get() {
                ResultsView::Cards(cards) => cards
                    .into_iter()
                    .map(|card| view! { <RecipeCard card=card /> })
                    .collect_view()
                    .into_any(),
                state => state
                    .message()
                    .map(|msg| view! { <p class="status-message">{msg}</p> })
                    .into_any(),
            }}
        </section>
    }
}
