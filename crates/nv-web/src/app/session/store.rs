//! Persistent session state backed by browser storage.

use nv_types::session::Session;

use crate::app::storage::BrowserStorage;

// Storage keys shared with the original frontend.
const KEY_TOKEN: &str = "token";
const KEY_ROLE: &str = "userRole";
const KEY_ACLS: &str = "userAcls";
const KEY_EMAIL: &str = "emailUser";

/// Reads and writes the persisted [`Session`].
///
/// The session is replaced and cleared as one value object, so callers
/// cannot produce a half-written session through this API. Reads fail soft:
/// absent or malformed data comes back as `None`/empty, never as an error.
/// Every call goes straight to the storage backend; there is no cache.
#[derive(Clone, Debug, Default)]
pub struct SessionStore {
    storage: BrowserStorage,
}

impl SessionStore {
    pub fn new(storage: BrowserStorage) -> Self {
        Self { storage }
    }

    /// Overwrite the whole persisted session.
    ///
    /// `None` fields are removed from storage rather than written empty, so
    /// a later [`load`](Self::load) reconstructs the same value.
    pub fn replace(&self, session: &Session) {
        match &session.token {
            Some(token) => {
                let _ = self.storage.set(KEY_TOKEN, token);
            }
            None => {
                let _ = self.storage.remove(KEY_TOKEN);
            }
        }
        match &session.role {
            Some(role) => {
                let _ = self.storage.set(KEY_ROLE, role);
            }
            None => {
                let _ = self.storage.remove(KEY_ROLE);
            }
        }
        let _ = self.storage.set_json(KEY_ACLS, &session.acls);
        match &session.email {
            Some(email) => {
                let _ = self.storage.set(KEY_EMAIL, email);
            }
            None => {
                let _ = self.storage.remove(KEY_EMAIL);
            }
        }
    }

    /// Drop every session field, the stored email included.
    pub fn clear(&self) {
        for key in [KEY_TOKEN, KEY_ROLE, KEY_ACLS, KEY_EMAIL] {
            let _ = self.storage.remove(key);
        }
    }

    /// Snapshot the persisted session; absent fields read as `None`/empty.
    pub fn load(&self) -> Session {
        Session {
            token: self.token(),
            role: self.role(),
            acls: self.acls(),
            email: self.email(),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.storage.get(KEY_TOKEN)
    }

    pub fn role(&self) -> Option<String> {
        self.storage.get(KEY_ROLE)
    }

    /// Stored permission labels in issue order. Malformed data reads as
    /// empty rather than failing.
    pub fn acls(&self) -> Vec<String> {
        self.storage.get_json(KEY_ACLS).unwrap_or_default()
    }

    pub fn email(&self) -> Option<String> {
        self.storage.get(KEY_EMAIL)
    }

    pub fn has_permission(&self, acl: &str) -> bool {
        self.acls().iter().any(|held| held == acl)
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.role().as_deref() == Some(role)
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
