use super::*;
use crate::net::types::User;
use crate::routes::AppRoute;

fn signed_in() -> AuthState {
    AuthState::Authenticated(User { username: "alice".to_owned() })
}

// =============================================================
// Public
// =============================================================

#[test]
fn public_always_shows_page() {
    for auth in [AuthState::Pending, signed_in(), AuthState::Unauthenticated] {
        assert_eq!(evaluate(RoutePolicy::Public, &auth), RenderDecision::ShowPage);
    }
}

// =============================================================
// Auth required
// =============================================================

#[test]
fn auth_required_pending_shows_loading() {
    assert_eq!(evaluate(RoutePolicy::AuthRequired, &AuthState::Pending), RenderDecision::ShowLoading);
}

#[test]
fn auth_required_signed_in_shows_page() {
    assert_eq!(evaluate(RoutePolicy::AuthRequired, &signed_in()), RenderDecision::ShowPage);
}

#[test]
fn auth_required_signed_out_redirects_to_landing() {
    assert_eq!(
        evaluate(RoutePolicy::AuthRequired, &AuthState::Unauthenticated),
        RenderDecision::RedirectTo("/")
    );
}

// =============================================================
// Redirect if authenticated
// =============================================================

#[test]
fn landing_pending_shows_loading() {
    let policy = AppRoute::match_path("/").policy();
    assert_eq!(evaluate(policy, &AuthState::Pending), RenderDecision::ShowLoading);
}

#[test]
fn landing_signed_in_redirects_to_dashboard() {
    let policy = AppRoute::match_path("/").policy();
    assert_eq!(evaluate(policy, &signed_in()), RenderDecision::RedirectTo("/dashboard"));
}

#[test]
fn landing_signed_out_shows_page() {
    let policy = AppRoute::match_path("/").policy();
    assert_eq!(evaluate(policy, &AuthState::Unauthenticated), RenderDecision::ShowPage);
}

// =============================================================
// Route table integration
// =============================================================

#[test]
fn bot_detail_follows_auth_required_table() {
    let policy = AppRoute::match_path("/bot/42").policy();
    assert_eq!(evaluate(policy, &AuthState::Pending), RenderDecision::ShowLoading);
    assert_eq!(evaluate(policy, &signed_in()), RenderDecision::ShowPage);
    assert_eq!(evaluate(policy, &AuthState::Unauthenticated), RenderDecision::RedirectTo("/"));
}

#[test]
fn not_found_renders_for_everyone() {
    let policy = AppRoute::match_path("/does-not-exist").policy();
    assert_eq!(evaluate(policy, &AuthState::Pending), RenderDecision::ShowPage);
    assert_eq!(evaluate(policy, &AuthState::Unauthenticated), RenderDecision::ShowPage);
}
