//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics. A failed auth
//! check reads as "signed out" and a failed bot fetch leaves the cache
//! unloaded, so neither one can break hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{BotSummary, User};

/// Signed-in user lookup.
pub const CURRENT_USER_ENDPOINT: &str = "/api/auth/me";
/// Session teardown.
pub const LOGOUT_ENDPOINT: &str = "/api/auth/logout";
/// Owned bot list, cached in [`crate::state::bots::BotsState`].
pub const BOTS_ENDPOINT: &str = "/api/bots";

#[cfg(any(test, feature = "hydrate"))]
fn bots_request_failed_message(status: u16) -> String {
    format!("bot list request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn bots_decode_failed_message(err: &str) -> String {
    format!("bot list decode failed: {err}")
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = match gloo_net::http::Request::get(CURRENT_USER_ENDPOINT).send().await {
            Ok(resp) => resp,
            Err(e) => {
                log::warn!("current user request failed: {e}");
                return None;
            }
        };
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = gloo_net::http::Request::post(LOGOUT_ENDPOINT).send().await {
            log::warn!("logout request failed: {e}");
        }
    }
}

/// Fetch the bots owned by the current user from `/api/bots`.
///
/// Order is preserved exactly as the server sent it.
///
/// # Errors
///
/// Returns an error string if the request fails, the server responds with a
/// non-OK status, or the body cannot be decoded.
pub async fn fetch_bots() -> Result<Vec<BotSummary>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(BOTS_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(bots_request_failed_message(resp.status()));
        }
        let body: super::types::BotListResponse = resp
            .json()
            .await
            .map_err(|e| bots_decode_failed_message(&e.to_string()))?;
        Ok(body.bots)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
