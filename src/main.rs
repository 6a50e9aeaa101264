#![allow(warnings)]
//! Recipe Finder Frontend Entry Point

mod app;
mod catalog;
mod components;
mod config;
mod context;
mod error;
mod favorites;
mod logger;
mod models;
mod search;
mod store;
mod view_model;

use app::App;
use config::AppConfig;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    logger::init(config.log_level);

    let host = document()
        .get_element_by_id(&config.mount_id)
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
    let Some(host) = host else {
        log::error!("Required DOM elements not found: #{}", config.mount_id);
        return;
    };

    log::info!("mounting into #{}, catalog at {}", config.mount_id, config.api_base_url);
    leptos::mount::mount_to(host, move || view! { <App config=config /> }).forget();
}
