//! # dashboard-shell
//!
//! Leptos + WASM dashboard: a guarded multi-page shell with a local session,
//! mock-data dashboard/users/posts pages, and a tabbed settings form.
//!
//! Pure logic (routing, guard decisions, session, settings reducer, data
//! formatting) is plain Rust and tested natively. Browser wiring sits behind
//! the `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
pub fn start() {
    use app::App;
    use leptos::prelude::*;

    console_error_panic_hook::set_once();

    let (config, config_error) = match config::AppConfig::from_build_env() {
        Ok(config) => (config, None),
        Err(e) => (config::AppConfig::default(), Some(e)),
    };
    if let Err(e) = console_log::init_with_level(config.log_level) {
        web_sys::console::error_1(&format!("logger init failed: {e}").into());
    }
    if let Some(e) = config_error {
        log::error!("{e}; using default configuration");
    }
    log::info!("starting {}", config.brand);

    leptos::mount::mount_to_body(move || view! { <App config=config.clone()/> });
}
