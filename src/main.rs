//! Kanban Board Frontend Entry Point

mod models;
mod error;
mod config;
mod board;
mod store;
mod context;
mod dialog;
mod components;
mod app;

use app::App;
use config::{AppConfig, CONFIG_ELEMENT_ID};
use leptos::prelude::*;

fn main() {
    // Panic message first, then the log lines leading up to it
    std::panic::set_hook(Box::new(|info| {
        console_error_panic_hook::hook(info);
        if let Some(dump) = console_logger::recent_dump() {
            web_sys::console::error_1(&dump.into());
        }
    }));

    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    if let Err(e) = console_logger::init(config.level_filter(), config.log_capacity) {
        web_sys::console::warn_1(&format!("Logger already installed: {}", e).into());
    }
    if let Some(e) = config_error {
        log::warn!("[APP] Invalid #{} config, using defaults: {}", CONFIG_ELEMENT_ID, e);
    }

    mount_to_body(move || view! { <App config=config /> });
}
