//! Navigation guard: decides whether a route transition may proceed.
//!
//! ARCHITECTURE
//! ============
//! The guard holds no state of its own. Each evaluation is a pure function
//! of the target route's policy, the target path, and the session
//! predicates, so it can be re-run on every location change.
//!
//! Rules, first match wins:
//! 1. `Public` routes are always allowed.
//! 2. `Guest` routes send signed-in users to their landing route.
//! 3. Routes requiring auth send anonymous users to a sign-in route; paths
//!    under the admin prefix use the admin sign-in.
//! 4. `Privileged` routes send non-admins to the default landing route.
//! 5. Everything else is allowed.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::routes::{self, RouteDescriptor, RoutePolicy};

/// Session facts the guard reads. Produced by `SessionStore::predicates`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionPredicates {
    pub is_authenticated: bool,
    pub is_admin: bool,
}

/// Outcome of one navigation attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Redirect(String),
}

/// Redirect targets and the administrative prefix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuardConfig {
    pub admin_prefix: String,
    pub sign_in: String,
    pub admin_sign_in: String,
    pub landing: String,
    pub admin_landing: String,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            admin_prefix: "/admin".to_owned(),
            sign_in: "/login".to_owned(),
            admin_sign_in: "/admin/login".to_owned(),
            landing: "/".to_owned(),
            admin_landing: "/admin".to_owned(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationGuard {
    config: GuardConfig,
}

impl NavigationGuard {
    #[must_use]
    pub fn new(config: GuardConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    /// Look up `path` in `routes` and evaluate its policy. Undeclared paths are `Public`.
    #[must_use]
    pub fn resolve(&self, routes: &[RouteDescriptor], path: &str, session: SessionPredicates) -> Decision {
        self.evaluate(routes::policy_for(routes, path), path, session)
    }

    /// Decide a transition to `path` declared with `policy`.
    #[must_use]
    pub fn evaluate(&self, policy: RoutePolicy, path: &str, session: SessionPredicates) -> Decision {
        match policy {
            RoutePolicy::Public => Decision::Allow,
            RoutePolicy::Guest => {
                if session.is_authenticated {
                    Decision::Redirect(self.landing_for(session).to_owned())
                } else {
                    Decision::Allow
                }
            }
            RoutePolicy::Protected | RoutePolicy::Privileged if !session.is_authenticated => {
                if self.is_admin_path(path) {
                    Decision::Redirect(self.config.admin_sign_in.clone())
                } else {
                    Decision::Redirect(self.config.sign_in.clone())
                }
            }
            RoutePolicy::Privileged if !session.is_admin => Decision::Redirect(self.config.landing.clone()),
            RoutePolicy::Protected | RoutePolicy::Privileged => Decision::Allow,
        }
    }

    /// Landing route for a signed-in user.
    #[must_use]
    pub fn landing_for(&self, session: SessionPredicates) -> &str {
        if session.is_admin { &self.config.admin_landing } else { &self.config.landing }
    }

    /// True when `path` is the admin prefix or a segment below it. Matching is
    /// per segment, so `/administrator` is not under `/admin` even though a
    /// plain string prefix test would accept it.
    #[must_use]
    pub fn is_admin_path(&self, path: &str) -> bool {
        let path = routes::normalize_path(path);
        let prefix = self.config.admin_prefix.trim_end_matches('/');
        path.strip_prefix(prefix)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    }
}
