//! Unit tests for the session store over in-memory storage.

use super::*;
use crate::app::storage::BrowserStorage;

fn store() -> SessionStore {
    SessionStore::new(BrowserStorage::memory())
}

fn full_session() -> Session {
    Session {
        token: Some("tok-123".into()),
        role: Some("CLIENT".into()),
        acls: vec!["view_property".into(), "edit_property".into()],
        email: Some("user@example.com".into()),
    }
}

#[test]
fn replace_then_load_round_trips() {
    let store = store();
    let session = full_session();

    store.replace(&session);
    assert_eq!(store.load(), session);

    // Field accessors agree with the loaded value, acl order preserved.
    assert_eq!(store.token().as_deref(), Some("tok-123"));
    assert_eq!(store.role().as_deref(), Some("CLIENT"));
    assert_eq!(store.acls(), vec!["view_property", "edit_property"]);
    assert_eq!(store.email().as_deref(), Some("user@example.com"));
}

#[test]
fn clear_removes_every_field() {
    let store = store();
    store.replace(&full_session());

    store.clear();

    assert_eq!(store.token(), None);
    assert_eq!(store.role(), None);
    assert!(store.acls().is_empty());
    assert_eq!(store.email(), None);
    assert_eq!(store.load(), Session::anonymous());
}

#[test]
fn replace_overwrites_a_previous_session() {
    let store = store();
    store.replace(&full_session());

    let next = Session {
        token: Some("tok-456".into()),
        role: Some("AGENT".into()),
        acls: vec!["view_appointments".into()],
        email: None,
    };
    store.replace(&next);

    assert_eq!(store.load(), next);
    // The previous email is gone, not left behind.
    assert_eq!(store.email(), None);
}

#[test]
fn empty_store_reads_as_anonymous() {
    let store = store();
    assert_eq!(store.token(), None);
    assert!(store.acls().is_empty());
    assert!(!store.load().is_authenticated());
}

#[test]
fn malformed_acls_read_as_empty() {
    let storage = BrowserStorage::memory();
    storage.set("userAcls", "{not json").unwrap();
    storage.set("token", "tok").unwrap();

    let store = SessionStore::new(storage);
    assert!(store.acls().is_empty());
    assert!(!store.has_permission("view_property"));
    // The rest of the session is unaffected.
    assert_eq!(store.token().as_deref(), Some("tok"));
}

#[test]
fn acls_that_are_json_but_wrong_shape_read_as_empty() {
    let storage = BrowserStorage::memory();
    storage.set("userAcls", "{\"a\":1}").unwrap();

    let store = SessionStore::new(storage);
    assert!(store.acls().is_empty());
}

#[test]
fn permission_and_role_checks_hit_storage() {
    let store = store();
    store.replace(&full_session());

    assert!(store.has_permission("edit_property"));
    assert!(!store.has_permission("view_messages"));
    assert!(store.has_role("CLIENT"));
    assert!(!store.has_role("AGENT"));
}
