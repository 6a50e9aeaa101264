//! Favorites Panel Component
//!
//! Re-runs a favorites render pass every time the favorites trigger fires.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::RecipeCard;
use crate::context::AppContext;
use crate::favorites::{run_favorites_pass, settle_pass};
use crate::store::{store_set_favorites, use_app_store, AppStateStoreFields};
use crate::view_model::FavoritesView;

#[component]
pub fn FavoritesPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    // Id of the newest pass; older passes stop when it moves on
    let generation = StoredValue::new(0u64);

    Effect::new(move |_| {
        let _ = ctx.favorites_trigger.get();
        let pass_id = generation.get_value() + 1;
        generation.set_value(pass_id);

        let ids = ctx.favorites().get_favorites();
        store_set_favorites(&store, FavoritesView::Loading);
        log::debug!("favorites pass {} for {} ids", pass_id, ids.len());

        spawn_local(async move {
            let is_current = move || generation.try_get_value() == Some(pass_id);
            let catalog = ctx.catalog();
            let report = run_favorites_pass(&catalog, ids, is_current, |view| {
                store_set_favorites(&store, view)
            })
            .await;

            if !is_current() {
                return;
            }
            match settle_pass(&ctx.favorites(), &report) {
                Ok(true) => ctx.reload_favorites(),
                Ok(false) => {}
                Err(err) => log::error!("Error updating localStorage: {}", err),
            }
        });
    });

    view! {
        <section id="favorites" class="favorites-panel">
            <h2>"Favorites"</h2>
            {move || match store.favorites().get() {
                FavoritesView::Cards(cards) => cards
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
