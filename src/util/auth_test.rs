use std::sync::Arc;

use super::*;
use crate::net::types::Role;
use crate::util::storage::MemoryStorage;

fn store_with(credential: &str, role: Role) -> SessionStore {
    let mut store = SessionStore::restore(Arc::new(MemoryStorage::new()));
    store.set_auth(credential, Profile::with_role(role)).unwrap();
    store
}

#[test]
fn redirect_target_none_when_allowed() {
    let guard = NavigationGuard::default();
    let member = SessionPredicates { is_authenticated: true, is_admin: false };
    assert_eq!(redirect_target(&guard, "/", member), None);
    assert_eq!(redirect_target(&guard, "/admin/login", SessionPredicates::default()), None);
}

#[test]
fn redirect_target_follows_route_table() {
    let guard = NavigationGuard::default();
    assert_eq!(redirect_target(&guard, "/my-activities", SessionPredicates::default()).as_deref(), Some("/login"));
    assert_eq!(redirect_target(&guard, "/admin", SessionPredicates::default()).as_deref(), Some("/admin/login"));
}

#[test]
fn reconcile_if_current_applies_matching_credential() {
    let mut store = store_with("t1", Role::Member);
    reconcile_if_current(&mut store, "t1", Ok(Profile::with_role(Role::Admin)));
    assert!(store.is_admin());
}

#[test]
fn reconcile_if_current_ignores_stale_credential() {
    let mut store = store_with("t2", Role::Member);
    reconcile_if_current(&mut store, "t1", Err(ApiError::Unauthorized));
    assert!(store.is_authenticated());
    assert_eq!(store.credential(), Some("t2"));
}

#[test]
fn reconcile_if_current_error_logs_out() {
    let mut store = store_with("t1", Role::Admin);
    reconcile_if_current(&mut store, "t1", Err(ApiError::Status(500)));
    assert!(!store.is_authenticated());
}
