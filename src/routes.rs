//! Declared routes and their access policies.
//!
//! DESIGN
//! ======
//! Policy is a closed enum attached to each route. The navigation guard reads
//! it by kind; path structure only matters for picking a sign-in target.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Access-control classification of a route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RoutePolicy {
    /// Reachable regardless of session state. Unlisted paths fall back to this.
    #[default]
    Public,
    /// Reachable only without a session (sign-in, registration).
    Guest,
    /// Requires a session.
    Protected,
    /// Requires a session whose profile role is `admin`.
    Privileged,
}

impl RoutePolicy {
    #[must_use]
    pub fn requires_auth(self) -> bool {
        matches!(self, Self::Protected | Self::Privileged)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub name: &'static str,
    pub policy: RoutePolicy,
}

/// Route table in declaration order.
pub const ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor { path: "/login", name: "Login", policy: RoutePolicy::Guest },
    RouteDescriptor { path: "/register", name: "Register", policy: RoutePolicy::Guest },
    RouteDescriptor { path: "/admin/login", name: "AdminLogin", policy: RoutePolicy::Public },
    RouteDescriptor { path: "/admin/register", name: "AdminRegister", policy: RoutePolicy::Public },
    RouteDescriptor { path: "/", name: "Events", policy: RoutePolicy::Protected },
    RouteDescriptor { path: "/my-activities", name: "MyActivities", policy: RoutePolicy::Protected },
    RouteDescriptor { path: "/admin", name: "Admin", policy: RoutePolicy::Privileged },
];

/// Strip query/fragment and a single trailing slash (root stays `/`).
#[must_use]
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    match path.strip_suffix('/') {
        Some("") | None => {
            if path.is_empty() { "/" } else { path }
        }
        Some(trimmed) => trimmed,
    }
}

/// Find the declared route for `path` in `routes`.
#[must_use]
pub fn find<'a>(routes: &'a [RouteDescriptor], path: &str) -> Option<&'a RouteDescriptor> {
    let path = normalize_path(path);
    routes.iter().find(|route| route.path == path)
}

/// Policy for `path`, defaulting to `Public` for undeclared paths.
#[must_use]
pub fn policy_for(routes: &[RouteDescriptor], path: &str) -> RoutePolicy {
    find(routes, path).map(|route| route.policy).unwrap_or_default()
}
