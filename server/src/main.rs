//! moltcook web host.
//!
//! Loads `.env`, reads `ServerConfig`, and serves the Leptos SSR app together
//! with the `/api` relay and `/healthz`. Startup failures are logged and exit
//! with status 1.

mod config;
mod proxy;
mod routes;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match config::ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => fail("invalid configuration", &e),
    };

    let state = match state::AppState::from_config(&config) {
        Ok(state) => state,
        Err(e) => fail("api upstream init failed", &e),
    };
    match &state.upstream {
        Some(upstream) => tracing::info!(upstream = upstream.base_url(), "api relay enabled"),
        None => tracing::warn!("API_UPSTREAM_URL not set; /api requests will return 503"),
    }

    let (app, leptos_options) = match routes::leptos_app(state) {
        Ok(built) => built,
        Err(e) => fail("leptos app init failed", &e),
    };
    tracing::debug!(output = %leptos_options.output_name, "leptos options loaded");

    let listener = match tokio::net::TcpListener::bind(config.bind).await {
        Ok(listener) => listener,
        Err(e) => fail("failed to bind", &e),
    };

    tracing::info!(addr = %config.bind, "moltcook listening");
    if let Err(e) = axum::serve(listener, app).await {
        fail("server failed", &e);
    }
}

fn fail(context: &str, err: &dyn std::fmt::Display) -> ! {
    tracing::error!(error = %err, "{context}");
    std::process::exit(1);
}
