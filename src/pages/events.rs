//! Member landing pages.
//!
//! Placeholders for the session side of the member area: they show who is
//! signed in and re-validate the stored profile on mount so a revoked
//! credential signs the user out. Event listings are not rendered here.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::session_bar::SessionBar;
use crate::config::ClientConfig;
use crate::state::session::SessionStore;
use crate::util::auth::refresh_profile;

fn use_profile_refresh() {
    let session = expect_context::<RwSignal<SessionStore>>();
    let config = expect_context::<ClientConfig>();
    refresh_profile(session, config.api_base);
}

#[component]
pub fn EventsPage() -> impl IntoView {
    use_profile_refresh();

    view! {
        <div class="page events-page">
            <SessionBar/>
            <nav class="page-nav">
                <A href="/my-activities">"My activities"</A>
            </nav>
            <h1>"Events"</h1>
        </div>
    }
}

#[component]
pub fn ActivitiesPage() -> impl IntoView {
    use_profile_refresh();

    view! {
        <div class="page activities-page">
            <SessionBar/>
            <nav class="page-nav">
                <A href="/">"All events"</A>
            </nav>
            <h1>"My activities"</h1>
        </div>
    }
}
