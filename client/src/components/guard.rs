//! View side of the route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! `util::guard::evaluate` decides; the components here only interpret the
//! decision, so guarded pages never look at auth state themselves. The policy
//! comes from `AppRoute::for_location` on the current path, never from the
//! call site.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::components::layout::AppLayout;
use crate::routes::AppRoute;
use crate::state::auth::AuthState;
use crate::util::guard::{RenderDecision, evaluate};

/// Render `children` only when the current route's policy allows it for the
/// current auth state.
#[component]
pub fn Guarded(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let policy = Memo::new(move |_| location.pathname.with(|path| AppRoute::for_location(path).policy()));
    let decision = Memo::new(move |_| auth.with(|state| evaluate(policy.get(), state)));

    move || match decision.get() {
        RenderDecision::ShowLoading => view! { <LoadingScreen/> }.into_any(),
        RenderDecision::ShowPage => children().into_any(),
        RenderDecision::RedirectTo(path) => view! { <Redirect path=path/> }.into_any(),
    }
}

/// Guarded page inside the app shell.
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let page = move || {
        let page = children();
        view! { <AppLayout>{page}</AppLayout> }
    };

    view! { <Guarded>{page()}</Guarded> }
}

/// Full-screen spinner shown while auth is unresolved.
#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen" role="status" aria-label="Loading">
            <span class="loading-screen__spinner"></span>
        </div>
    }
}

/// Scroll the window back to the top on every path change.
#[component]
pub fn ScrollToTop() -> impl IntoView {
    let location = use_location();
    Effect::new(move || {
        location.pathname.track();
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
        }
    });
}
