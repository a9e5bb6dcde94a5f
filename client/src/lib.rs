//! # client
//!
//! Leptos + WASM frontend for the O11y UI: a navigation shell, a few static
//! pages, a mock alert table, and a cookie-backed login gate.
//!
//! Browser-only code is compiled behind the `csr` feature. Without it the
//! crate builds natively so state and guard logic can be unit tested.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// Install logging and panic hooks, then mount the app into `<body>`.
#[cfg(feature = "csr")]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    let _ = console_log::init_with_level(level);
    log::info!("mounting o11y ui");
    leptos::mount::mount_to_body(app::App);
}
