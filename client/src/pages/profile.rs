//! Profile page for the signed-in user.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::layout::sign_out;
use crate::routes::AppRoute;
use crate::state::auth::AuthState;
use crate::state::bots::BotsState;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let bots = expect_context::<RwSignal<BotsState>>();

    view! {
        <Title text=AppRoute::Profile.title()/>
        <div class="profile-page">
            <h1>"Profile"</h1>
            <dl class="profile-page__fields">
                <dt>"Username"</dt>
                <dd data-testid="profile-username">{move || auth.with(|a| a.username().to_owned())}</dd>
                <dt>"Agents"</dt>
                <dd>{move || bots.with(|b| b.bots().len())}</dd>
            </dl>
            <button class="btn" on:click=move |_| sign_out(auth, bots)>
                "Logout"
            </button>
        </div>
    }
}
