//! View Model
//!
//! Pure mapping from catalog records to what the results and favorites
//! panels display. Components only ever render these values as text nodes
//! and attributes.

use crate::error::FetchResult;
use crate::models::Recipe;

pub const LOADING_RECIPES: &str = "Loading recipes...";
pub const NO_RECIPES: &str = "No recipes found. Try a different search.";
pub const RECIPES_FAILED: &str = "Error loading recipes. Please try again later.";
pub const LOADING_FAVORITES: &str = "Loading favorites...";
pub const NO_FAVORITES: &str = "No favorites saved yet.";

/// Per-card button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    Save,
    Remove,
}

impl CardAction {
    pub fn label(self) -> &'static str {
        match self {
            CardAction::Save => "Save",
            CardAction::Remove => "Remove",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            CardAction::Save => "save-button",
            CardAction::Remove => "remove-button",
        }
    }
}

/// One rendered recipe card
#[derive(Debug, Clone, PartialEq)]
pub struct CardModel {
    pub id: String,
    pub label: String,
    pub image: String,
    pub calories: i64,
    /// `None` on favorites cards, which have no diet line
    pub diet: Option<String>,
    /// Absent when the record's url is missing or not http(s)
    pub link: Option<String>,
    pub action: CardAction,
}

impl CardModel {
    /// Build a card, or `None` when the record lacks an image, label or
    /// calorie count.
    pub fn build(recipe: &Recipe, action: CardAction) -> Option<Self> {
        let label = non_empty(recipe.label.as_deref())?;
        let image = recipe.image.as_deref().and_then(safe_url)?;
        let calories = recipe.calories.filter(|c| c.is_finite() && *c != 0.0)?;

        let diet = match action {
            CardAction::Save => Some(diet_line(recipe.diet_labels.as_deref())),
            CardAction::Remove => None,
        };

        Some(Self {
            id: recipe.id.clone(),
            label: label.to_string(),
            image,
            calories: calories.round() as i64,
            diet,
            link: recipe.url.as_deref().and_then(safe_url),
            action,
        })
    }

    pub fn calories_text(&self) -> String {
        format!("Calories: {}", self.calories)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn diet_line(labels: Option<&[String]>) -> String {
    match labels {
        Some(labels) if !labels.is_empty() => format!("Diet: {}", labels.join(", ")),
        _ => "Diet: N/A".to_string(),
    }
}

/// Only http(s) URLs reach `src`/`href`
pub fn safe_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("https://") || lower.starts_with("http://") {
        Some(trimmed.to_string())
    } else {
        None
    }
}

// ========================
// Panel States
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ResultsView {
    #[default]
    Idle,
    Loading,
    Empty,
    Failed,
    Cards(Vec<CardModel>),
}

impl ResultsView {
    /// Map a finished search onto the results panel. Incomplete records are
    /// logged and skipped.
    pub fn from_listing(listing: FetchResult<Vec<Recipe>>) -> Self {
        match listing {
            Err(err) => {
                log::error!("Error fetching recipes: {}", err);
                ResultsView::Failed
            }
            Ok(recipes) if recipes.is_empty() => ResultsView::Empty,
            Ok(recipes) => ResultsView::Cards(
                recipes
                    .iter()
                    .filter_map(|recipe| {
                        let card = CardModel::build(recipe, CardAction::Save);
                        if card.is_none() {
                            log::info!("skipping incomplete recipe data: {:?}", recipe);
                        }
                        card
                    })
                    .collect(),
            ),
        }
    }

    /// Text shown instead of cards, if any
    pub fn message(&self) -> Option<&'static str> {
        match self {
            ResultsView::Idle | ResultsView::Cards(_) => None,
            ResultsView::Loading => Some(LOADING_RECIPES),
            ResultsView::Empty => Some(NO_RECIPES),
            ResultsView::Failed => Some(RECIPES_FAILED),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum FavoritesView {
    #[default]
    Loading,
    Empty,
    Cards(Vec<CardModel>),
}

impl FavoritesView {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            FavoritesView::Loading => Some(LOADING_FAVORITES),
            FavoritesView::Empty => Some(NO_FAVORITES),
            FavoritesView::Cards(_) => None,
        }
    }
}
