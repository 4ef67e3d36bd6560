//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::{use_location, use_navigate},
};

use crate::config::ClientConfig;
use crate::guard::{Decision, NavigationGuard};
use crate::pages::{
    admin::AdminPage,
    events::{ActivitiesPage, EventsPage},
    login::{AdminLoginPage, LoginPage},
    register::{AdminRegisterPage, RegisterPage},
};
use crate::routes::ROUTES;
use crate::state::session::SessionStore;
use crate::util::{auth::install_route_guard, storage::default_storage};

/// Root application component.
///
/// Restores the session once, provides it and the config as context, and
/// runs every route through the navigation guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let session = RwSignal::new(SessionStore::restore(default_storage(config.persistence)));

    provide_context(config);
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/portal.css"/>
        <Title text="Event Portal"/>

        <Router>
            <RouteGuard>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=(StaticSegment("admin"), StaticSegment("login")) view=AdminLoginPage/>
                    <Route path=(StaticSegment("admin"), StaticSegment("register")) view=AdminRegisterPage/>
                    <Route path=StaticSegment("") view=EventsPage/>
                    <Route path=StaticSegment("my-activities") view=ActivitiesPage/>
                    <Route path=StaticSegment("admin") view=AdminPage/>
                </Routes>
            </RouteGuard>
        </Router>
    }
}

/// Renders its children only while the guard allows the current location,
/// and navigates to the redirect target otherwise.
#[component]
fn RouteGuard(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let config = expect_context::<ClientConfig>();
    let guard = NavigationGuard::new(config.guard);
    let pathname = use_location().pathname;

    let check = guard.clone();
    let allowed = Memo::new(move |_| {
        let predicates = session.with(SessionStore::predicates);
        pathname.with(|path| check.resolve(ROUTES, path, predicates) == Decision::Allow)
    });

    install_route_guard(session, pathname, guard, use_navigate());

    view! {
        <Show when=move || allowed.get()>
            {children()}
        </Show>
    }
}
