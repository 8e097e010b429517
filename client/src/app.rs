//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route table below only picks views. `Guarded` and `Protected` take the
//! policy from `routes::AppRoute` for the current location, and the server
//! checks at startup that every `AppRoute::table()` pattern is routed here.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::guard::{Guarded, Protected, ScrollToTop};
use crate::pages::{
    bot_detail::BotDetailPage,
    create_bot::CreateBotPage,
    dashboard::DashboardPage,
    docs::DocsPage,
    landing::LandingPage,
    legal::{PrivacyPage, TermsPage},
    not_found::NotFoundPage,
    profile::ProfilePage,
};
use crate::routes::DocsSection;
use crate::state::{auth::AuthState, bots::BotsState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth and bot-list contexts, resolves auth once from the
/// server, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let bots = RwSignal::new(BotsState::default());

    provide_context(auth);
    provide_context(bots);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = crate::net::api::fetch_current_user().await;
        log::debug!("auth resolved: signed_in={}", user.is_some());
        auth.set(AuthState::from_session_user(user));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/moltcook.css"/>
        <Title text="moltcook"/>

        <Router>
            <ScrollToTop/>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route
                    path=StaticSegment("")
                    view=|| view! {
                        <Guarded>
                            <LandingPage/>
                        </Guarded>
                    }
                />
                <Route path=StaticSegment("dashboard") view=|| view! { <Protected><DashboardPage/></Protected> }/>
                <Route path=StaticSegment("create-bot") view=|| view! { <Protected><CreateBotPage/></Protected> }/>
                <Route
                    path=(StaticSegment("bot"), ParamSegment("id"))
                    view=|| view! { <Protected><BotDetailPage/></Protected> }
                />
                <Route path=StaticSegment("profile") view=|| view! { <Protected><ProfilePage/></Protected> }/>
                <Route
                    path=(StaticSegment("docs"), StaticSegment("overview"))
                    view=|| view! { <DocsPage section=DocsSection::Overview/> }
                />
                <Route
                    path=(StaticSegment("docs"), StaticSegment("ai"))
                    view=|| view! { <DocsPage section=DocsSection::Ai/> }
                />
                <Route
                    path=(StaticSegment("docs"), StaticSegment("trading"))
                    view=|| view! { <DocsPage section=DocsSection::Trading/> }
                />
                <Route
                    path=(StaticSegment("docs"), StaticSegment("security"))
                    view=|| view! { <DocsPage section=DocsSection::Security/> }
                />
                <Route
                    path=(StaticSegment("docs"), StaticSegment("architecture"))
                    view=|| view! { <DocsPage section=DocsSection::Architecture/> }
                />
                <Route path=StaticSegment("terms") view=TermsPage/>
                <Route path=StaticSegment("privacy") view=PrivacyPage/>
            </Routes>
        </Router>
    }
}
