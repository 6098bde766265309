//! App Configuration
//!
//! Compile-time defaults; the app reads no config files or environment.

use log::LevelFilter;

use crate::render::Layout;

/// localStorage key holding the JSON todo list
pub const STORAGE_KEY: &str = "todos";

/// Container the app mounts into
pub const ROOT_SELECTOR: &str = "#root";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub storage_key: String,
    pub root_selector: String,
    pub log_level: LevelFilter,
    pub layout: Layout,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            root_selector: ROOT_SELECTOR.to_string(),
            log_level: if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info },
            layout: Layout::default(),
        }
    }
}
