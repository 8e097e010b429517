//! Authenticated app shell: desktop sidebar, mobile bottom nav, quick links.
//!
//! ARCHITECTURE
//! ============
//! The active tab and the "My Agent" destination come from `util::nav` as
//! plain data; this module only maps them onto markup. The owned-bot list is
//! fetched once per session into the shared `BotsState` cache.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::routes::{DASHBOARD_PATH, DocsSection, PROFILE_PATH};
use crate::state::auth::AuthState;
use crate::state::bots::BotsState;
use crate::util::nav::{SidebarItem, resolve_active_tab, resolve_primary_href, sidebar_items};

/// Sidebar + bottom-nav frame around an authenticated page.
#[component]
pub fn AppLayout(children: Children) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let bots = expect_context::<RwSignal<BotsState>>();
    let location = use_location();

    install_bots_fetch(auth, bots);

    let active_tab = Memo::new(move |_| resolve_active_tab(&location.pathname.get(), &location.search.get()));
    let primary_href = Memo::new(move |_| bots.with(|state| resolve_primary_href(state.bots())));
    let items = Memo::new(move |_| sidebar_items(&primary_href.get()));
    let on_profile = Memo::new(move |_| location.pathname.get() == PROFILE_PATH);

    let is_active = move |item: &SidebarItem| active_tab.get() == Some(item.target);

    view! {
        <div class="app-layout">
            <aside class="sidebar">
                <a href=DASHBOARD_PATH class="sidebar__brand" data-testid="link-logo">
                    <span class="sidebar__logo" aria-hidden="true"></span>
                    <span class="sidebar__brand-name">"moltcook"</span>
                </a>

                <nav class="sidebar__nav">
                    {move || {
                        items
                            .get()
                            .into_iter()
                            .map(|item| {
                                let class = if is_active(&item) {
                                    "sidebar__link sidebar__link--active"
                                } else {
                                    "sidebar__link"
                                };
                                view! {
                                    <a href=item.href.clone() class=class data-testid=item.sidebar_test_id()>
                                        <span class="sidebar__label">{item.label()}</span>
                                    </a>
                                }
                            })
                            .collect_view()
                    }}
                </nav>

                <div class="sidebar__footer">
                    <Show when=move || auth.with(AuthState::is_authenticated)>
                        <span class="sidebar__username" data-testid="text-username">
                            {move || auth.with(|a| a.username().to_owned())}
                        </span>
                    </Show>
                    <a
                        href=PROFILE_PATH
                        class=move || {
                            if on_profile.get() { "sidebar__link sidebar__link--active" } else { "sidebar__link" }
                        }
                        data-testid="sidebar-profile"
                    >
                        <span class="sidebar__label">"Profile"</span>
                    </a>
                    <button
                        class="sidebar__link sidebar__logout"
                        data-testid="button-logout"
                        on:click=move |_| sign_out(auth, bots)
                    >
                        <span class="sidebar__label">"Logout"</span>
                    </button>
                </div>
            </aside>

            <div class="app-layout__content">
                <main class="app-layout__main">{children()}</main>
            </div>

            <nav class="bottom-nav">
                {move || {
                    items
                        .get()
                        .into_iter()
                        .map(|item| {
                            let active = is_active(&item);
                            let class = if active { "bottom-nav__item bottom-nav__item--active" } else { "bottom-nav__item" };
                            view! {
                                <a href=item.href.clone() class=class data-testid=item.bottom_nav_test_id()>
                                    <Show when=move || active>
                                        <span class="bottom-nav__indicator"></span>
                                    </Show>
                                    <span class="bottom-nav__label">{item.label()}</span>
                                </a>
                            }
                        })
                        .collect_view()
                }}
            </nav>
        </div>
    }
}

/// Compact profile / docs / logout buttons for page headers.
#[component]
pub fn QuickNav() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let bots = expect_context::<RwSignal<BotsState>>();

    view! {
        <div class="quick-nav">
            <a href=PROFILE_PATH class="quick-nav__button" data-testid="quick-link-profile" title="Profile">
                "Profile"
            </a>
            <a href=DocsSection::Overview.path() class="quick-nav__button" data-testid="quick-link-docs" title="Docs">
                "Docs"
            </a>
            <button
                class="quick-nav__button quick-nav__button--danger"
                data-testid="quick-button-logout"
                title="Logout"
                on:click=move |_| sign_out(auth, bots)
            >
                "Logout"
            </button>
        </div>
    }
}

/// Load the owned-bot list once the user is known and nothing is cached.
fn install_bots_fetch(auth: RwSignal<AuthState>, bots: RwSignal<BotsState>) {
    Effect::new(move || {
        if !auth.with(AuthState::is_authenticated) || !bots.with(BotsState::needs_fetch) {
            return;
        }
        bots.update(BotsState::begin_fetch);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_bots().await;
            match &result {
                Ok(list) => log::debug!("loaded {} owned bots", list.len()),
                Err(e) => log::warn!("{e}"),
            }
            bots.update(|state| state.finish_fetch(result));
        });
    });
}

/// End the session, drop cached per-user data, and return to the landing page.
pub fn sign_out(auth: RwSignal<AuthState>, bots: RwSignal<BotsState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        crate::net::api::logout().await;
        auth.set(AuthState::Unauthenticated);
        bots.set(BotsState::default());
        if let Some(w) = web_sys::window() {
            let _ = w.location().set_href(crate::routes::LANDING_PATH);
        }
    });

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, bots);
    }
}
