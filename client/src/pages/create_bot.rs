//! Agent creation page.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::layout::QuickNav;
use crate::routes::AppRoute;

#[component]
pub fn CreateBotPage() -> impl IntoView {
    view! {
        <Title text=AppRoute::CreateBot.title()/>
        <div class="create-bot-page">
            <header class="create-bot-page__header">
                <h1>"Create Agent"</h1>
                <QuickNav/>
            </header>
            <p>"Configure a new trading agent."</p>
        </div>
    }
}
