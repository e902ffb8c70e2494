//! NeoWatch: a browser dashboard for near-Earth objects.
//!
//! The risk, orbit, format and model modules are plain Rust and test
//! natively; `app`, `pages` and `components` are the leptos front end.

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod orbit;
pub mod pages;
pub mod risk;

pub use error::NeoWatchError;

/// Installs panic and tracing hooks, then mounts the app on `<body>`.
pub fn run() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(tracing::Level::INFO)
            .build(),
    );
    leptos::mount::mount_to_body(app::App);
}
