//! Application Configuration
//!
//! Fixed settings for the catalog endpoint, storage slot and mount point.

use log::LevelFilter;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_FAVORITES_KEY: &str = "favorites";
pub const DEFAULT_MOUNT_ID: &str = "recipe-app";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Catalog service root, without the `/products` suffix
    pub api_base_url: String,
    /// localStorage key holding the favorites array
    pub favorites_key: String,
    /// Id of the host element the app mounts into
    pub mount_id: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            favorites_key: DEFAULT_FAVORITES_KEY.to_string(),
            mount_id: DEFAULT_MOUNT_ID.to_string(),
            log_level: LevelFilter::Debug,
        }
    }
}
