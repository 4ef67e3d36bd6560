//! Browser-scoped key/value storage behind a small trait.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store persists through `SessionStorage` so it can run against
//! `localStorage`/`sessionStorage` in the browser and against an in-memory
//! map in native tests.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

/// Which browser storage area holds the session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PersistenceScope {
    /// `localStorage`: survives browser restarts.
    #[default]
    Durable,
    /// `sessionStorage`: cleared when the tab closes.
    Tab,
}

impl FromStr for PersistenceScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "durable" | "local" => Ok(Self::Durable),
            "tab" | "session" => Ok(Self::Tab),
            other => Err(format!("unknown persistence scope: {other}")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage area unavailable")]
    Unavailable,
    #[error("storage write failed: {0}")]
    Write(String),
}

/// Minimal string key/value store.
pub trait SessionStorage: fmt::Debug + Send + Sync {
    /// Read `key`, returning `None` when absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the storage area is missing or rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error when the storage area is missing.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Process-local storage used by native builds and tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    inner: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// True when no keys are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries().remove(key);
        Ok(())
    }
}

/// `window.localStorage` or `window.sessionStorage`, per scope.
///
/// Outside a `csr` build there is no browser, so reads return `None` and
/// writes fail with `StorageError::Unavailable`.
#[derive(Clone, Copy, Debug)]
pub struct BrowserStorage {
    scope: PersistenceScope,
}

impl BrowserStorage {
    #[must_use]
    pub fn new(scope: PersistenceScope) -> Self {
        Self { scope }
    }

    #[must_use]
    pub fn scope(&self) -> PersistenceScope {
        self.scope
    }

    #[cfg(feature = "csr")]
    fn area(&self) -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        let area = match self.scope {
            PersistenceScope::Durable => window.local_storage(),
            PersistenceScope::Tab => window.session_storage(),
        };
        area.ok().flatten().ok_or(StorageError::Unavailable)
    }
}

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            self.area().ok()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            self.area()?
                .set_item(key, value)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            self.area()?
                .remove_item(key)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}

/// Storage backing the session in the current build: the browser area for
/// `scope` in the browser build, an in-memory map otherwise.
#[must_use]
pub fn default_storage(scope: PersistenceScope) -> Arc<dyn SessionStorage> {
    #[cfg(feature = "csr")]
    {
        Arc::new(BrowserStorage::new(scope))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = scope;
        Arc::new(MemoryStorage::new())
    }
}
