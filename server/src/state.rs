//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! server keeps no per-user data; it only holds the upstream API client.

use crate::config::ServerConfig;
use crate::proxy::{ProxyError, Upstream};

#[derive(Clone, Default)]
pub struct AppState {
    /// `None` when `API_UPSTREAM_URL` is unset.
    pub upstream: Option<Upstream>,
}

impl AppState {
    /// # Errors
    ///
    /// Returns a [`ProxyError`] if the upstream HTTP client cannot be built.
    pub fn from_config(config: &ServerConfig) -> Result<Self, ProxyError> {
        let upstream = config
            .api_upstream
            .clone()
            .map(|base| Upstream::new(base, config.proxy_timeout))
            .transpose()?;
        Ok(Self { upstream })
    }
}
