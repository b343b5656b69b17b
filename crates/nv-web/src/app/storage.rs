//! Browser storage abstraction.
//!
//! Supports localStorage, sessionStorage, a shared in-memory map for native
//! builds and tests, and a no-op mode for environments without storage.
//! Reads never fail: anything missing or unreadable comes back as `None`,
//! which is what lets the component tree render identically on server and
//! client before hydration.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::{de::DeserializeOwned, Serialize};

#[derive(Clone, Debug, Default)]
pub enum BrowserStorage {
    /// localStorage - persists across browser sessions
    Local,
    /// sessionStorage - cleared when the tab/window closes
    Session,
    /// Shared in-memory map; backs native builds and unit tests
    Memory(Arc<Mutex<HashMap<String, String>>>),
    /// No-op mode - for when storage is disabled or unavailable
    #[default]
    None,
}

impl BrowserStorage {
    /// Fresh in-memory storage, empty until written.
    pub fn memory() -> Self {
        BrowserStorage::Memory(Arc::new(Mutex::new(HashMap::new())))
    }

    /// Get a value from storage by key.
    pub fn get(&self, key: &str) -> Option<String> {
        match self {
            BrowserStorage::None => None,
            BrowserStorage::Memory(map) => map.lock().ok()?.get(key).cloned(),
            BrowserStorage::Local | BrowserStorage::Session => self.web_get(key),
        }
    }

    /// Set a value in storage.
    pub fn set(&self, key: &str, value: &str) -> Result<(), String> {
        match self {
            BrowserStorage::None => Ok(()),
            BrowserStorage::Memory(map) => {
                let mut map = map.lock().map_err(|_| "memory storage poisoned".to_string())?;
                map.insert(key.to_string(), value.to_string());
                Ok(())
            }
            BrowserStorage::Local | BrowserStorage::Session => self.web_set(key, value),
        }
    }

    /// Remove a value from storage. Removing an absent key succeeds.
    pub fn remove(&self, key: &str) -> Result<(), String> {
        match self {
            BrowserStorage::None => Ok(()),
            BrowserStorage::Memory(map) => {
                let mut map = map.lock().map_err(|_| "memory storage poisoned".to_string())?;
                map.remove(key);
                Ok(())
            }
            BrowserStorage::Local | BrowserStorage::Session => self.web_remove(key),
        }
    }

    /// Get and deserialize a JSON value from storage.
    ///
    /// Malformed JSON reads as `None`; callers treat it as absent data.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.get(key)?;
        match serde_json::from_str(&value) {
            Ok(parsed) => Some(parsed),
            Err(_err) => {
                #[cfg(feature = "web")]
                web_sys::console::warn_1(
                    &format!("Failed to parse JSON from storage key '{}': {}", key, _err).into(),
                );
                None
            }
        }
    }

    /// Serialize and set a JSON value in storage.
    pub fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), String> {
        let json = serde_json::to_string(value).map_err(|e| format!("Failed to serialize to JSON: {}", e))?;
        self.set(key, &json)
    }

    #[cfg(feature = "web")]
    fn web_area(&self) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        match self {
            BrowserStorage::Local => window.local_storage().ok()?,
            BrowserStorage::Session => window.session_storage().ok()?,
            _ => None,
        }
    }

    #[cfg(feature = "web")]
    fn web_get(&self, key: &str) -> Option<String> {
        let storage = self.web_area()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                web_sys::console::warn_2(&format!("Failed to get item from storage: {}", key).into(), &e);
                None
            }
        }
    }

    #[cfg(feature = "web")]
    fn web_set(&self, key: &str, value: &str) -> Result<(), String> {
        let storage = self.web_area().ok_or_else(|| "Storage not available".to_string())?;
        storage.set_item(key, value).map_err(|e| {
            let err_msg = format!("Failed to set item in storage '{}': {:?}", key, e);
            web_sys::console::warn_1(&err_msg.clone().into());
            err_msg
        })
    }

    #[cfg(feature = "web")]
    fn web_remove(&self, key: &str) -> Result<(), String> {
        let storage = self.web_area().ok_or_else(|| "Storage not available".to_string())?;
        storage.remove_item(key).map_err(|e| {
            let err_msg = format!("Failed to remove item from storage '{}': {:?}", key, e);
            web_sys::console::warn_1(&err_msg.clone().into());
            err_msg
        })
    }

    #[cfg(not(feature = "web"))]
    fn web_get(&self, _key: &str) -> Option<String> {
        None
    }

    #[cfg(not(feature = "web"))]
    fn web_set(&self, _key: &str, _value: &str) -> Result<(), String> {
        Ok(())
    }

    #[cfg(not(feature = "web"))]
    fn web_remove(&self, _key: &str) -> Result<(), String> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_round_trip() {
        let storage = BrowserStorage::memory();
        assert_eq!(storage.get("k"), None);
        storage.set("k", "v").unwrap();
        assert_eq!(storage.get("k").as_deref(), Some("v"));
        storage.remove("k").unwrap();
        assert_eq!(storage.get("k"), None);
    }

    #[test]
    fn memory_is_shared_between_clones() {
        let storage = BrowserStorage::memory();
        let clone = storage.clone();
        storage.set("k", "v").unwrap();
        assert_eq!(clone.get("k").as_deref(), Some("v"));
    }

    #[test]
    fn json_round_trip_and_malformed_reads() {
        let storage = BrowserStorage::memory();
        storage.set_json("list", &vec!["a".to_string(), "b".to_string()]).unwrap();
        assert_eq!(
            storage.get_json::<Vec<String>>("list"),
            Some(vec!["a".to_string(), "b".to_string()])
        );

        storage.set("list", "not json").unwrap();
        assert_eq!(storage.get_json::<Vec<String>>("list"), None);
    }

    #[test]
    fn noop_mode_reads_nothing_and_accepts_writes() {
        let storage = BrowserStorage::None;
        assert!(storage.set("k", "v").is_ok());
        assert_eq!(storage.get("k"), None);
        assert!(storage.remove("k").is_ok());
    }
}
