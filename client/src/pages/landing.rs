//! Signed-out landing page.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::routes::{AppRoute, DocsSection};

/// Landing page. Signed-in visitors never see it; the guard sends them to
/// the dashboard.
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <Title text=AppRoute::Landing.title()/>
        <div class="login-page">
            <div class="login-card">
                <h1>"moltcook"</h1>
                <p class="login-card__subtitle">"Autonomous trading agents you own"</p>
                <a href="/api/auth/login" class="login-button" rel="external">
                    "Sign in"
                </a>
                <a href=DocsSection::Overview.path() class="login-card__link">
                    "Read the docs"
                </a>
            </div>
        </div>
    }
}
