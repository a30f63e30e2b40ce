//! Memo Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod logging;
mod models;
mod note_text;
mod routes;
mod store;

use app::{build_initial_state, App};
use commands::Api;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    let (config, warnings) = AppConfig::load();
    logging::init_logging(config.log_level);
    for warning in warnings {
        log::warn!("[APP] config: {}", warning);
    }
    log::info!("[APP] starting, api root {}", config.api_root);

    let api = Api::new(config);
    wasm_bindgen_futures::spawn_local(async move {
        let initial = build_initial_state(&api).await;
        mount_to_body(move || view! { <App api=api.clone() initial=initial.clone()/> });
    });
}
