//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Connects the pure navigation guard and session store to the reactive
//! router: every location or session change re-runs the guard, and profile
//! refreshes feed back into the store.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::guard::{Decision, NavigationGuard, SessionPredicates};
use crate::net::api::ApiError;
use crate::net::types::Profile;
use crate::routes::ROUTES;
use crate::state::session::SessionStore;

/// Where the guard sends a navigation to `path`, if anywhere.
pub fn redirect_target(guard: &NavigationGuard, path: &str, session: SessionPredicates) -> Option<String> {
    match guard.resolve(ROUTES, path, session) {
        Decision::Allow => None,
        Decision::Redirect(target) => Some(target),
    }
}

/// Re-evaluate the guard whenever the path or session changes and replace
/// the current history entry with the redirect target.
pub fn install_route_guard<F>(session: RwSignal<SessionStore>, pathname: Memo<String>, guard: NavigationGuard, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    Effect::new(move || {
        let path = pathname.get();
        let predicates = session.with(SessionStore::predicates);
        if let Some(target) = redirect_target(&guard, &path, predicates) {
            log::debug!("guard redirect {path} -> {target}");
            navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Apply a profile fetch made with `credential`, ignoring it when the
/// session has since changed hands.
pub fn reconcile_if_current(store: &mut SessionStore, credential: &str, result: Result<Profile, ApiError>) {
    if store.credential() == Some(credential) {
        store.reconcile_profile(result);
    }
}

/// Re-fetch the signed-in user's profile and reconcile it into the session.
pub fn refresh_profile(session: RwSignal<SessionStore>, api_base: String) {
    let Some(credential) = session.with_untracked(|s| s.credential().map(str::to_owned)) else {
        return;
    };
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_current_user(&api_base, &credential).await;
        session.update(|s| reconcile_if_current(s, &credential, result));
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (credential, api_base);
    }
}
