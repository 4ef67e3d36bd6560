use super::*;

#[test]
fn requires_auth_only_for_protected_kinds() {
    assert!(!RoutePolicy::Public.requires_auth());
    assert!(!RoutePolicy::Guest.requires_auth());
    assert!(RoutePolicy::Protected.requires_auth());
    assert!(RoutePolicy::Privileged.requires_auth());
}

#[test]
fn normalize_path_handles_slashes_and_queries() {
    assert_eq!(normalize_path("/"), "/");
    assert_eq!(normalize_path(""), "/");
    assert_eq!(normalize_path("/admin/"), "/admin");
    assert_eq!(normalize_path("/login?next=%2Fadmin"), "/login");
    assert_eq!(normalize_path("/my-activities#top"), "/my-activities");
    assert_eq!(normalize_path("/?tab=1"), "/");
}

#[test]
fn route_paths_are_unique() {
    for (i, a) in ROUTES.iter().enumerate() {
        for b in &ROUTES[i + 1..] {
            assert_ne!(a.path, b.path, "duplicate route path");
        }
    }
}

#[test]
fn find_returns_declared_route() {
    let route = find(ROUTES, "/admin/login").unwrap();
    assert_eq!(route.name, "AdminLogin");
    assert_eq!(route.policy, RoutePolicy::Public);
}

#[test]
fn declared_policies_match_route_table() {
    assert_eq!(policy_for(ROUTES, "/login"), RoutePolicy::Guest);
    assert_eq!(policy_for(ROUTES, "/register"), RoutePolicy::Guest);
    assert_eq!(policy_for(ROUTES, "/admin/register"), RoutePolicy::Public);
    assert_eq!(policy_for(ROUTES, "/"), RoutePolicy::Protected);
    assert_eq!(policy_for(ROUTES, "/my-activities/"), RoutePolicy::Protected);
    assert_eq!(policy_for(ROUTES, "/admin"), RoutePolicy::Privileged);
}

#[test]
fn undeclared_path_defaults_to_public() {
    assert!(find(ROUTES, "/nowhere").is_none());
    assert_eq!(policy_for(ROUTES, "/nowhere"), RoutePolicy::Public);
}
