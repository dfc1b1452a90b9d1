//! Supatodo Frontend Entry Point

mod app;
mod components;
mod context;
mod dialog;
mod routes;
mod store;

use app::App;
use components::ConfigMissing;
use leptos::prelude::*;
use supatodo_core::config::log_level_from_build_env;
use supatodo_core::BackendConfig;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_logger::init(log_level_from_build_env()) {
        web_sys::console::warn_1(&format!("[app] console logger not installed: {}", err).into());
    }

    match BackendConfig::from_build_env() {
        Ok(config) => mount_to_body(move || view! { <App config=config /> }),
        Err(err) => {
            log::error!("[app] {}", err);
            let message = err.to_string();
            mount_to_body(move || view! { <ConfigMissing message=message /> })
        }
    }
}
