// Key-value persistence: the browser's localStorage in production, a shared
// in-memory map in tests.

#[cfg(test)]
use std::cell::{Cell, RefCell};
#[cfg(test)]
use std::collections::HashMap;
#[cfg(test)]
use std::rc::Rc;

use crate::error::StoreError;
use crate::model::GameState;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// `window.localStorage` of the current origin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LocalStore;

impl LocalStore {
    fn storage() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .ok_or(StoreError::Unavailable)?
            .local_storage()
            .map_err(|_| StoreError::Unavailable)?
            .ok_or(StoreError::Unavailable)
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Self::storage()?.get_item(key).map_err(|e| StoreError::Read {
            key: key.to_string(),
            reason: format!("{e:?}"),
        })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        // quota errors surface here
        Self::storage()?.set_item(key, value).map_err(|e| StoreError::Write {
            key: key.to_string(),
            reason: format!("{e:?}"),
        })
    }
}

/// In-memory store; clones share the same map.
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
    failing: Rc<Cell<bool>>,
}

#[cfg(test)]
impl MemoryStore {
    /// Makes every subsequent write fail, as a full quota would.
    pub fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.failing.get() {
            return Err(StoreError::Write {
                key: key.to_string(),
                reason: "store is read-only".to_string(),
            });
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Typed access to the single game record slot.
#[derive(Clone, Debug)]
pub struct GameStore<S> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> GameStore<S> {
    pub fn new(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    #[cfg(test)]
    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Returns the stored record, or `None` when the slot is empty, the
    /// backend fails, or the content does not parse.
    pub fn read(&self) -> Option<GameState> {
        let raw = match self.backend.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                log::debug!("no saved game under `{}`", self.key);
                return None;
            }
            Err(e) => {
                log::warn!("reading saved game failed: {e}");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(state) => Some(state),
            Err(e) => {
                log::warn!("discarding malformed saved game under `{}`: {e}", self.key);
                None
            }
        }
    }

    /// Overwrites the slot with `state`.
    pub fn write(&self, state: &GameState) -> Result<(), StoreError> {
        let raw = serde_json::to_string(state)?;
        self.backend.set(&self.key, &raw)
    }
}
