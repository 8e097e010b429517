//! Detail page for one owned bot (`/bot/:id`).

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use crate::components::layout::QuickNav;
use crate::routes::AppRoute;
use crate::state::bots::BotsState;

#[component]
pub fn BotDetailPage() -> impl IntoView {
    let bots = expect_context::<RwSignal<BotsState>>();
    let params = use_params_map();
    let title = AppRoute::BotDetail { id: String::new() }.title();
    let bot_id = move || params.with(|p| p.get("id").unwrap_or_default());

    let heading = move || {
        let id = bot_id();
        bots.with(|state| {
            state
                .bots()
                .iter()
                .find(|bot| bot.id == id)
                .and_then(|bot| bot.name.clone())
                .unwrap_or_else(|| format!("Agent {id}"))
        })
    };

    view! {
        <Title text=title/>
        <div class="bot-detail-page">
            <header class="bot-detail-page__header">
                <h1>{heading}</h1>
                <QuickNav/>
            </header>
        </div>
    }
}
