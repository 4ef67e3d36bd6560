//! Header strip showing the signed-in user with a logout button.

#[cfg(test)]
#[path = "session_bar_test.rs"]
mod session_bar_test;

use leptos::prelude::*;

use crate::net::types::{Profile, Role};
use crate::state::session::SessionStore;

/// Label for the signed-in user: full name, falling back to email.
pub(crate) fn display_name(profile: &Profile) -> String {
    let name = profile.full_name.trim();
    if name.is_empty() { profile.email.clone() } else { name.to_owned() }
}

pub(crate) fn role_label(role: Role) -> &'static str {
    match role {
        Role::Admin => "Administrator",
        Role::Member => "Member",
        Role::Unknown => "Guest",
    }
}

/// Logging out lets the route guard move the user off the protected page.
#[component]
pub fn SessionBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();

    let name = move || session.with(|s| s.profile().map(display_name).unwrap_or_default());
    let role = move || session.with(|s| s.profile().map_or("", |p| role_label(p.role)));
    let on_logout = move |_| session.update(SessionStore::logout);

    view! {
        <header class="session-bar">
            <span class="session-bar__name">{name}</span>
            <span class="session-bar__role">{role}</span>
            <button class="session-bar__logout" on:click=on_logout>
                "Log out"
            </button>
        </header>
    }
}
