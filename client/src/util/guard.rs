//! Route guard decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every guarded route applies the same table: a route policy plus the
//! current auth snapshot gives loading, page, or redirect. The decision is
//! plain data; `components::guard` turns it into a view.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::routes::{DASHBOARD_PATH, LANDING_PATH, RoutePolicy};
use crate::state::auth::AuthState;

/// What a guarded route should render for the current auth snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderDecision {
    ShowLoading,
    ShowPage,
    RedirectTo(&'static str),
}

/// Evaluate a route policy against the latest auth snapshot.
///
/// A snapshot stuck in `Pending` keeps guarded routes on the loading view.
#[must_use]
pub fn evaluate(policy: RoutePolicy, auth: &AuthState) -> RenderDecision {
    match (policy, auth) {
        (RoutePolicy::Public, _) => RenderDecision::ShowPage,
        (RoutePolicy::AuthRequired | RoutePolicy::RedirectIfAuthenticated, AuthState::Pending) => {
            RenderDecision::ShowLoading
        }
        (RoutePolicy::AuthRequired, AuthState::Authenticated(_))
        | (RoutePolicy::RedirectIfAuthenticated, AuthState::Unauthenticated) => RenderDecision::ShowPage,
        (RoutePolicy::AuthRequired, AuthState::Unauthenticated) => RenderDecision::RedirectTo(LANDING_PATH),
        (RoutePolicy::RedirectIfAuthenticated, AuthState::Authenticated(_)) => {
            RenderDecision::RedirectTo(DASHBOARD_PATH)
        }
    }
}
