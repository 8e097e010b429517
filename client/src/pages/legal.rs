//! Terms of service and privacy policy.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::routes::AppRoute;

#[component]
pub fn TermsPage() -> impl IntoView {
    view! {
        <Title text=AppRoute::Terms.title()/>
        <div class="legal-page">
            <h1>"Terms of Service"</h1>
            <p>"By using moltcook you agree to operate agents within the limits you configure."</p>
        </div>
    }
}

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! {
        <Title text=AppRoute::Privacy.title()/>
        <div class="legal-page">
            <h1>"Privacy Policy"</h1>
            <p>"We store your username and the agents you create. Nothing else is shared."</p>
        </div>
    }
}
