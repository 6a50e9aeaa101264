//! UI Components
//!
//! Leptos components for the search form and the two card panels.

mod diet_selector;
mod favorites_panel;
mod notice;
mod recipe_card;
mod results_panel;
mod search_bar;

pub use diet_selector::DietSelector;
pub use favorites_panel::FavoritesPanel;
pub use recipe_card::RecipeCard;
pub use results_panel::ResultsPanel;
pub use search_bar::{start_search, SearchBar};
