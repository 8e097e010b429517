//! # client
//!
//! Leptos + WASM frontend for the moltcook dashboard.
//!
//! This crate holds the route table and guard, the navigation shell, the
//! auth and owned-bot state, REST helpers, and the page components. The
//! `server` crate renders it with SSR; the `hydrate` feature builds the
//! browser bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
