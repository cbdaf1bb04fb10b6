//! Browser `localStorage` access.
//!
//! SYSTEM CONTEXT
//! ==============
//! Holds the application token for the session reconciler and small UI
//! flags (e.g. the one-time approval notice). Outside the browser every read
//! is empty and every write reports [`StorageError::Unavailable`].

use marketplace_session::{StorageError, TokenStore};

/// [`TokenStore`] backed by `window.localStorage`.
#[derive(Clone, Debug)]
pub struct LocalStorageTokenStore {
    key: String,
}

impl LocalStorageTokenStore {
    #[must_use]
    pub fn new(key: &str) -> Self {
        Self { key: key.to_owned() }
    }
}

impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Option<String> {
        read_item(&self.key)
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        write_item(&self.key, token)
    }

    fn erase(&self) -> Result<(), StorageError> {
        remove_item(&self.key)
    }
}

#[cfg(feature = "csr")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read a raw string value for `key`.
pub fn read_item(key: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        storage()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        None
    }
}

/// Write a raw string value for `key`.
///
/// # Errors
///
/// Returns [`StorageError`] when storage is missing or the write is refused
/// (quota, private mode).
pub fn write_item(key: &str, value: &str) -> Result<(), StorageError> {
    #[cfg(feature = "csr")]
    {
        let storage = storage().ok_or(StorageError::Unavailable)?;
        storage.set_item(key, value).map_err(|e| StorageError::Write(format!("{e:?}")))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (key, value);
        Err(StorageError::Unavailable)
    }
}

/// Remove `key`.
///
/// # Errors
///
/// Returns [`StorageError`] when storage is missing or the removal fails.
pub fn remove_item(key: &str) -> Result<(), StorageError> {
    #[cfg(feature = "csr")]
    {
        let storage = storage().ok_or(StorageError::Unavailable)?;
        storage.remove_item(key).map_err(|e| StorageError::Write(format!("{e:?}")))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        Err(StorageError::Unavailable)
    }
}
