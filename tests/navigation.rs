//! End-to-end navigation scenarios: a session store backed by in-memory
//! storage feeding the guard over the declared route table.

use std::sync::Arc;

use portal_client::guard::{Decision, NavigationGuard};
use portal_client::net::api::ApiError;
use portal_client::net::types::{Profile, Role};
use portal_client::routes::{ROUTES, RoutePolicy};
use portal_client::state::session::SessionStore;
use portal_client::util::storage::{MemoryStorage, SessionStorage};

fn store() -> (MemoryStorage, SessionStore) {
    let storage = MemoryStorage::new();
    let store = SessionStore::restore(Arc::new(storage.clone()));
    (storage, store)
}

fn signed_in(role: Role) -> SessionStore {
    let (_, mut store) = store();
    store.set_auth("t1", Profile::with_role(role)).unwrap();
    store
}

fn navigate(store: &SessionStore, path: &str) -> Decision {
    NavigationGuard::default().resolve(ROUTES, path, store.predicates())
}

fn redirect(path: &str) -> Decision {
    Decision::Redirect(path.to_owned())
}

#[test]
fn empty_session_admin_goes_to_admin_login() {
    let (_, store) = store();
    assert_eq!(navigate(&store, "/admin"), redirect("/admin/login"));
}

#[test]
fn member_on_login_goes_to_landing() {
    assert_eq!(navigate(&signed_in(Role::Member), "/login"), redirect("/"));
}

#[test]
fn admin_on_login_goes_to_admin() {
    assert_eq!(navigate(&signed_in(Role::Admin), "/login"), redirect("/admin"));
}

#[test]
fn member_on_admin_goes_to_landing() {
    assert_eq!(navigate(&signed_in(Role::Member), "/admin"), redirect("/"));
}

#[test]
fn public_routes_allow_every_session() {
    let (_, anonymous) = store();
    let sessions = [anonymous, signed_in(Role::Member), signed_in(Role::Admin)];
    let public: Vec<_> = ROUTES.iter().filter(|r| r.policy == RoutePolicy::Public).collect();
    assert!(!public.is_empty());
    for session in &sessions {
        for route in &public {
            assert_eq!(navigate(session, route.path), Decision::Allow, "{}", route.path);
        }
    }
}

#[test]
fn guest_routes_never_allow_signed_in_users() {
    for session in [signed_in(Role::Member), signed_in(Role::Admin)] {
        for route in ROUTES.iter().filter(|r| r.policy == RoutePolicy::Guest) {
            assert!(matches!(navigate(&session, route.path), Decision::Redirect(_)), "{}", route.path);
        }
    }
}

#[test]
fn reload_keeps_access() {
    let storage = MemoryStorage::new();
    let shared: Arc<dyn SessionStorage> = Arc::new(storage.clone());
    let mut first = SessionStore::restore(shared.clone());
    first.set_auth("t1", Profile::with_role(Role::Admin)).unwrap();

    let reloaded = SessionStore::restore(shared);
    assert_eq!(reloaded.session(), first.session());
    assert_eq!(navigate(&reloaded, "/admin"), Decision::Allow);
}

#[test]
fn logout_then_protected_route_goes_to_login() {
    let (storage, mut store) = store();
    store.set_auth("t1", Profile::with_role(Role::Member)).unwrap();
    assert_eq!(navigate(&store, "/my-activities"), Decision::Allow);

    store.logout();
    store.logout();
    assert!(storage.is_empty());
    assert_eq!(navigate(&store, "/my-activities"), redirect("/login"));
}

#[test]
fn rejected_profile_fetch_signs_out() {
    let mut store = signed_in(Role::Admin);
    store.reconcile_profile(Err(ApiError::Unauthorized));
    assert_eq!(navigate(&store, "/admin"), redirect("/admin/login"));
    assert_eq!(navigate(&store, "/login"), Decision::Allow);
}

#[test]
fn corrupt_storage_is_treated_as_signed_out() {
    let storage = MemoryStorage::new();
    storage.set("token", "t1").unwrap();
    storage.set("user", "[1, 2").unwrap();
    let store = SessionStore::restore(Arc::new(storage));
    assert_eq!(navigate(&store, "/"), redirect("/login"));
    assert_eq!(navigate(&store, "/admin/login"), Decision::Allow);
}
