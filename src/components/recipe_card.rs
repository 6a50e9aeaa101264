//! Recipe Card Component
//!
//! Renders one [`CardModel`] with its Save or Remove button.

use leptos::prelude::*;

use super::notice::notify;
use crate::context::AppContext;
use crate::favorites::FavoriteAction;
use crate::view_model::{CardAction, CardModel};

#[component]
pub fn RecipeCard(card: CardModel) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let calories = card.calories_text();
    let CardModel { id, label, image, diet, link, action, .. } = card;
    let alt = label.clone();
    let data_id = id.clone();

    let on_click = move |_| {
        let intent = match action {
            CardAction::Save => FavoriteAction::Save(id.clone()),
            CardAction::Remove => FavoriteAction::Remove(id.clone()),
        };
        let report = ctx.favorites().apply(&intent);
        if report.refresh {
            ctx.reload_favorites();
        }
        notify(report.notice);
    };

    view! {
        <div class="recipe-card">
            <img src=image alt=alt />
            <h3>{label}</h3>
            <p>{calories}</p>
            {diet.map(|line| view! { <p>{line}</p> })}
            <button class=action.class() data-id=data_id on:click=on_click>
                {action.label()}
            </button>
            {link.map(|href| view! {
                <a href=href target="_blank" rel="noopener noreferrer">"View Recipe"</a>
            })}
        </div>
    }
}
