//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::catalog::HttpCatalog;
use crate::config::AppConfig;
use crate::favorites::{BrowserStorage, FavoritesRepository};

/// App-wide signals and services provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Bumped to re-render the favorites panel - read
    pub favorites_trigger: ReadSignal<u32>,
    /// Bumped to re-render the favorites panel - write
    set_favorites_trigger: WriteSignal<u32>,
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(favorites_trigger: (ReadSignal<u32>, WriteSignal<u32>), config: AppConfig) -> Self {
        Self {
            favorites_trigger: favorites_trigger.0,
            set_favorites_trigger: favorites_trigger.1,
            config: StoredValue::new(config),
        }
    }

    /// Start a fresh favorites render pass
    pub fn reload_favorites(&self) {
        self.set_favorites_trigger.update(|v| *v += 1);
    }

    pub fn catalog(&self) -> HttpCatalog {
        self.config.with_value(|config| HttpCatalog::new(config.api_base_url.clone()))
    }

    pub fn favorites(&self) -> FavoritesRepository<BrowserStorage> {
        self.config
            .with_value(|config| FavoritesRepository::new(BrowserStorage, config.favorites_key.clone()))
    }
}
