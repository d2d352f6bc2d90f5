//! Task List Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod controller;
mod models;
mod surface;
mod toast;
mod view_state;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_document();
    if console_logger::init(config.log_level).is_err() {
        web_sys::console::warn_1(&"Console logger was already installed".into());
    }
    log::info!("Task API at {:?}", config.api_base);

    mount_to_body(move || view! { <App config=config /> });
}
