//! Catch-all page for unmatched routes.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::routes::{AppRoute, LANDING_PATH};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
            resp.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text=AppRoute::NotFound.title()/>
        <div class="not-found-page">
            <h1>"404"</h1>
            <p>"This page doesn't exist."</p>
            <a href=LANDING_PATH>"Go home"</a>
        </div>
    }
}
