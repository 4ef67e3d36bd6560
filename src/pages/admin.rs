//! Administrator landing page.

use leptos::prelude::*;

use crate::components::session_bar::SessionBar;
use crate::config::ClientConfig;
use crate::state::session::SessionStore;
use crate::util::auth::refresh_profile;

/// Reached only by admins; a refreshed profile that lost the admin role
/// makes the guard send the user back to the member landing route.
#[component]
pub fn AdminPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let config = expect_context::<ClientConfig>();
    refresh_profile(session, config.api_base);

    view! {
        <div class="page admin-page">
            <SessionBar/>
            <h1>"Administration"</h1>
        </div>
    }
}
