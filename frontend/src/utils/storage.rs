use std::{cell::RefCell, collections::HashMap};

use thiserror::Error;
use web_sys::{Storage, Window};

use crate::api::TokenPair;

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("No localStorage")]
    Unavailable,
    #[error("Failed to read `{0}` from storage")]
    Read(String),
    #[error("Failed to write `{0}` to storage")]
    Write(String),
}

pub fn window() -> Result<Window, StorageError> {
    web_sys::window().ok_or(StorageError::Unavailable)
}

pub fn local_storage() -> Result<Storage, StorageError> {
    window()?
        .local_storage()
        .map_err(|_| StorageError::Unavailable)?
        .ok_or(StorageError::Unavailable)
}

/// Key/value persistence for the bearer token pair.
///
/// Every reader and writer of the tokens goes through this trait so the
/// browser store can be swapped for [`MemoryTokenStore`] off the browser.
pub trait TokenStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    fn access_token(&self) -> Result<Option<String>, StorageError> {
        self.get(ACCESS_TOKEN_KEY)
    }

    fn refresh_token(&self) -> Result<Option<String>, StorageError> {
        self.get(REFRESH_TOKEN_KEY)
    }

    fn set_access_token(&self, token: &str) -> Result<(), StorageError> {
        self.set(ACCESS_TOKEN_KEY, token)
    }

    fn set_token_pair(&self, pair: &TokenPair) -> Result<(), StorageError> {
        self.set(ACCESS_TOKEN_KEY, &pair.access)?;
        self.set(REFRESH_TOKEN_KEY, &pair.refresh)
    }

    /// Removes both tokens. Both removals are attempted even if the first fails.
    fn clear_tokens(&self) -> Result<(), StorageError> {
        let access = self.remove(ACCESS_TOKEN_KEY);
        let refresh = self.remove(REFRESH_TOKEN_KEY);
        access.and(refresh)
    }
}

/// `window.localStorage`, resolved on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageTokenStore;

impl TokenStore for LocalStorageTokenStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        local_storage()?
            .get_item(key)
            .map_err(|_| StorageError::Read(key.to_string()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::Write(key.to_string()))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        local_storage()?
            .remove_item(key)
            .map_err(|_| StorageError::Write(key.to_string()))
    }
}

#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tokens(access: Option<&str>, refresh: Option<&str>) -> Self {
        let store = Self::new();
        {
            let mut items = store.items.borrow_mut();
            if let Some(access) = access {
                items.insert(ACCESS_TOKEN_KEY.to_string(), access.to_string());
            }
            if let Some(refresh) = refresh {
                items.insert(REFRESH_TOKEN_KEY.to_string(), refresh.to_string());
            }
        }
        store
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}
