//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the `/api` relay and health check with Leptos SSR
//! rendering under a single Axum router. Paths the Leptos route table does
//! not know fall through to the app's not-found view.


use std::collections::HashSet;
use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{any, get};
use client::routes::AppRoute;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::proxy;
use crate::state::AppState;

/// Routes served by the host itself: the API relay and the health check.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/{*path}", any(proxy::forward))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Full frontend: API relay + Leptos SSR + static `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section and no `LEPTOS_*` env).
pub fn leptos_app(state: AppState) -> Result<(Router, LeptosOptions), String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);
    let missing = unrouted_patterns(routes.iter().map(|route| route.path()));
    if !missing.is_empty() {
        tracing::warn!(?missing, "route table patterns not served by the app");
    }

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(client::app::shell))
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let router = api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http());

    Ok((router, leptos_options))
}

/// `AppRoute::table()` patterns absent from the Leptos route listing.
fn unrouted_patterns<'a>(listed: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let listed: HashSet<String> = listed.into_iter().map(colon_pattern).collect();
    AppRoute::table()
        .iter()
        .filter_map(AppRoute::pattern)
        .filter(|pattern| !listed.contains(pattern))
        .collect()
}

/// Rewrite axum's `{param}` segments as `:param`; the empty root is `/`.
fn colon_pattern(path: &str) -> String {
    if path.is_empty() {
        return "/".to_owned();
    }
    path.split('/')
        .map(|segment| {
            segment
                .strip_prefix('{')
                .and_then(|s| s.strip_suffix('}'))
                .map_or_else(|| segment.to_owned(), |name| format!(":{name}"))
        })
        .collect::<Vec<_>>()
        .join("/")
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
