//! Search Bar Component
//!
//! Free-text query, diet selector and search trigger.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::DietSelector;
use crate::context::AppContext;
use crate::models::SearchFilter;
use crate::search::run_search;
use crate::store::{store_set_results, use_app_store, AppStore};
use crate::view_model::ResultsView;

/// Show the loading message and run a search in the background.
///
/// Searches are not sequenced: whichever response resolves last owns the
/// results panel.
pub fn start_search(ctx: AppContext, store: AppStore, filter: SearchFilter) {
    store_set_results(&store, ResultsView::Loading);
    spawn_local(async move {
        let catalog = ctx.catalog();
        let view = run_search(&catalog, &filter).await;
        store_set_results(&store, view);
    });
}

#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (query, set_query) = signal(String::new());
    let (diet, set_diet) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let filter = SearchFilter::new(&query.get_untracked(), &diet.get_untracked());
        start_search(ctx, store, filter);
    };

    view! {
        <form class="search-form" on:submit=submit>
            <input
                id="search-input"
                type="text"
                placeholder="Search recipes..."
                prop:value=move || query.get()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    log::debug!("Search input value: {}", value);
                    set_query.set(value);
                }
            />
            <DietSelector current_diet=diet on_change=move |value| set_diet.set(value) />
            <button id="search-button" type="submit">"Search"</button>
        </form>
    }
}
