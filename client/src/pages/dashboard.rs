//! Dashboard page with the My Agent / Sub Agent / Activity tabs.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. The `tab` query parameter picks
//! the section, using the same fallback rules as the sidebar highlight.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_location;

use crate::components::layout::QuickNav;
use crate::routes::{AppRoute, CREATE_BOT_PATH, bot_path};
use crate::state::bots::BotsState;
use crate::util::nav::{NavTarget, TAB_PARAM, query_param};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let bots = expect_context::<RwSignal<BotsState>>();
    let location = use_location();

    let tab = Memo::new(move |_| {
        let search = location.search.get();
        NavTarget::from_tab_param(query_param(&search, TAB_PARAM).as_deref())
    });

    view! {
        <Title text=AppRoute::Dashboard.title()/>
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{move || tab.get().label()}</h1>
                <QuickNav/>
            </header>

            {move || match tab.get() {
                NavTarget::MyAgent => view! { <MyAgentSection bots=bots/> }.into_any(),
                NavTarget::SubAgents => {
                    view! { <p class="dashboard-page__empty">"No sub agents yet."</p> }.into_any()
                }
                NavTarget::Activity => {
                    view! { <p class="dashboard-page__empty">"No recent activity."</p> }.into_any()
                }
            }}
        </div>
    }
}

/// Owned bots, or a create prompt when there are none.
#[component]
fn MyAgentSection(bots: RwSignal<BotsState>) -> impl IntoView {
    move || {
        let state = bots.get();
        if state.is_failed() {
            return view! {
                <div class="dashboard-page__cta" role="alert">
                    <p>"Couldn't load your agents. Sign out and back in to retry."</p>
                    <a href=CREATE_BOT_PATH class="btn btn--primary">"Create Agent"</a>
                </div>
            }
            .into_any();
        }
        if !state.is_loaded() {
            return view! { <p class="dashboard-page__empty">"Loading agents..."</p> }.into_any();
        }
        if state.bots().is_empty() {
            return view! {
                <div class="dashboard-page__cta">
                    <p>"You don't have an agent yet."</p>
                    <a href=CREATE_BOT_PATH class="btn btn--primary">"Create Agent"</a>
                </div>
            }
            .into_any();
        }
        view! {
            <ul class="dashboard-page__bots">
                {state
                    .bots()
                    .iter()
                    .map(|bot| {
                        let label = bot.name.clone().unwrap_or_else(|| bot.id.clone());
                        view! {
                            <li>
                                <a href=bot_path(&bot.id)>{label}</a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        }
        .into_any()
    }
}
