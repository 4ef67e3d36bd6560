//! Client configuration.
//!
//! Values are baked in at compile time from `PORTAL_API_BASE` and
//! `PORTAL_SESSION_SCOPE`; anything missing or unparseable falls back to the
//! defaults below.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::guard::GuardConfig;
use crate::util::storage::PersistenceScope;

const DEFAULT_API_BASE: &str = "/api";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for backend REST calls.
    pub api_base: String,
    /// Which browser storage area holds the session.
    pub persistence: PersistenceScope,
    pub guard: GuardConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            persistence: PersistenceScope::default(),
            guard: GuardConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Load from build-time environment.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("PORTAL_API_BASE"), option_env!("PORTAL_SESSION_SCOPE"))
    }

    fn from_values(api_base: Option<&str>, scope: Option<&str>) -> Self {
        let api_base = api_base
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map_or_else(|| DEFAULT_API_BASE.to_owned(), |v| v.trim_end_matches('/').to_owned());
        let persistence = match scope.map(str::parse::<PersistenceScope>) {
            Some(Ok(scope)) => scope,
            Some(Err(e)) => {
                log::warn!("{e}; using durable session storage");
                PersistenceScope::default()
            }
            None => PersistenceScope::default(),
        };
        Self { api_base, persistence, guard: GuardConfig::default() }
    }
}
