//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The single source of truth for who is signed in. The navigation guard
//! reads `predicates()`; sign-in pages call `apply_token`; pages holding a
//! credential report profile fetches back through `reconcile_profile`.
//!
//! PERSISTENCE
//! ===========
//! Two slots, `token` and `user`, are written together on sign-in and
//! removed together on logout. A restore that finds only one of them, or a
//! profile that does not parse, starts empty and clears what it found. A
//! write that fails halfway also clears both slots.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use crate::guard::SessionPredicates;
use crate::net::api::ApiError;
use crate::net::types::{Profile, Role, TokenResponse};
use crate::util::storage::SessionStorage;

/// Storage slot holding the bearer credential.
pub const TOKEN_KEY: &str = "token";
/// Storage slot holding the JSON-encoded profile.
pub const USER_KEY: &str = "user";

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("malformed session data: {0}")]
    MalformedSessionData(String),
    #[error("credential must not be empty")]
    EmptyCredential,
}

/// An authenticated identity. Credential and profile only exist together.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub credential: String,
    pub profile: Profile,
}

#[derive(Clone, Debug)]
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
    session: Option<Session>,
}

impl SessionStore {
    /// Build a store from whatever `storage` holds. Never fails; unusable
    /// data yields an empty session.
    pub fn restore(storage: Arc<dyn SessionStorage>) -> Self {
        let session = match read_persisted(storage.as_ref()) {
            Ok(session) => session,
            Err(e) => {
                log::warn!("discarding persisted session: {e}");
                clear_slots(storage.as_ref());
                None
            }
        };
        if session.is_some() {
            log::debug!("restored persisted session");
        }
        Self { storage, session }
    }

    /// Replace the session with `credential` and `profile` and persist both.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyCredential` for an empty credential; the
    /// current session is left untouched. Storage failures are logged only.
    pub fn set_auth(&mut self, credential: impl Into<String>, profile: Profile) -> Result<(), SessionError> {
        let credential = credential.into();
        if credential.is_empty() {
            return Err(SessionError::EmptyCredential);
        }
        self.persist(&credential, &profile);
        log::debug!("session established (role {:?})", profile.role);
        self.session = Some(Session { credential, profile });
        Ok(())
    }

    /// `set_auth` from a login or registration response.
    ///
    /// # Errors
    ///
    /// Same as `set_auth`.
    pub fn apply_token(&mut self, token: TokenResponse) -> Result<(), SessionError> {
        self.set_auth(token.access_token, token.user)
    }

    /// Drop the session and its persisted copy. Safe to call repeatedly.
    pub fn logout(&mut self) {
        if self.session.take().is_some() {
            log::debug!("session cleared");
        }
        clear_slots(self.storage.as_ref());
    }

    /// Apply the outcome of a profile fetch for the current credential.
    ///
    /// A fetched profile replaces the stored one; any error means the
    /// credential is no longer usable and the session is logged out.
    pub fn reconcile_profile(&mut self, result: Result<Profile, ApiError>) {
        let Some(current) = self.session.as_mut() else {
            return;
        };
        match result {
            Ok(profile) => {
                if current.profile != profile {
                    current.profile = profile;
                    let credential = current.credential.clone();
                    let profile = current.profile.clone();
                    self.persist(&credential, &profile);
                }
            }
            Err(e) => {
                log::info!("profile fetch failed, signing out: {e}");
                self.logout();
            }
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.profile.role == Role::Admin)
    }

    #[must_use]
    pub fn predicates(&self) -> SessionPredicates {
        SessionPredicates { is_authenticated: self.is_authenticated(), is_admin: self.is_admin() }
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn credential(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.credential.as_str())
    }

    #[must_use]
    pub fn profile(&self) -> Option<&Profile> {
        self.session.as_ref().map(|s| &s.profile)
    }

    /// Write both slots. If either write fails, both slots are cleared so a
    /// reload starts empty instead of pairing the new credential with an
    /// older profile.
    fn persist(&self, credential: &str, profile: &Profile) {
        let written = serde_json::to_string(profile)
            .map_err(|e| e.to_string())
            .and_then(|raw| {
                self.storage
                    .set(TOKEN_KEY, credential)
                    .and_then(|()| self.storage.set(USER_KEY, &raw))
                    .map_err(|e| e.to_string())
            });
        if let Err(e) = written {
            log::warn!("session not persisted: {e}");
            clear_slots(self.storage.as_ref());
        }
    }
}

fn read_persisted(storage: &dyn SessionStorage) -> Result<Option<Session>, SessionError> {
    let credential = storage.get(TOKEN_KEY).filter(|c| !c.is_empty());
    let raw_profile = storage.get(USER_KEY);
    match (credential, raw_profile) {
        (None, None) => Ok(None),
        (Some(credential), Some(raw)) => {
            let profile = serde_json::from_str::<Option<Profile>>(&raw)
                .map_err(|e| SessionError::MalformedSessionData(e.to_string()))?
                .ok_or_else(|| SessionError::MalformedSessionData("credential without profile".to_owned()))?;
            Ok(Some(Session { credential, profile }))
        }
        (Some(_), None) => Err(SessionError::MalformedSessionData("credential without profile".to_owned())),
        (None, Some(_)) => Err(SessionError::MalformedSessionData("profile without credential".to_owned())),
    }
}

fn clear_slots(storage: &dyn SessionStorage) {
    for key in [TOKEN_KEY, USER_KEY] {
        if let Err(e) = storage.remove(key) {
            log::warn!("could not clear {key}: {e}");
        }
    }
}
