//! Todo MVC Frontend Entry Point

mod app;
mod components;
mod config;
mod controller;
mod error;
mod logger;
mod model;
mod models;
mod render;
mod storage;
mod view;

#[cfg(test)]
mod tests;

use config::AppConfig;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    if let Err(e) = logger::init(config.log_level) {
        web_sys::console::warn_1(&format!("[APP] Logger not installed: {}", e).into());
    }

    if let Err(e) = app::start(config) {
        log::error!("[APP] {}", e);
    }
}
