use std::fs;

use securevault::accounts::UserRecord;
use securevault::store::{
    user_key, LocalStore, Session, KEY_IS_LOGGED_IN, KEY_USER_EMAIL, USER_KEY_PREFIX,
};

#[test]
fn values_round_trip_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("local_store.json");

    {
        let mut store = LocalStore::from_path(&path).unwrap();
        store.set_string(KEY_USER_EMAIL, "alice@example.com").unwrap();
        store.set_flag(KEY_IS_LOGGED_IN, true).unwrap();
    }

    let store = LocalStore::from_path(&path).unwrap();
    assert_eq!(
        store.get_string(KEY_USER_EMAIL).unwrap().as_deref(),
        Some("alice@example.com")
    );
    assert!(store.get_flag(KEY_IS_LOGGED_IN).unwrap());
}

#[test]
fn flags_are_stored_as_strings_like_browser_storage() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = LocalStore::from_path(dir.path().join("s.json")).unwrap();
    store.set_flag(KEY_IS_LOGGED_IN, true).unwrap();

    let raw = store.get_value(KEY_IS_LOGGED_IN).unwrap();
    assert_eq!(raw, &serde_json::Value::String("true".to_string()));
}

#[test]
fn malformed_store_is_a_contextual_error_not_a_panic() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("local_store.json");
    fs::write(&path, "{ not json").unwrap();

    let err = LocalStore::from_path(&path).unwrap_err();
    assert!(err.to_string().contains("parse store"));
}

#[test]
fn wrong_shape_values_name_the_offending_key() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = LocalStore::from_path(dir.path().join("s.json")).unwrap();
    let key = user_key("x@example.com");
    store.set_string(&key, "not a record").unwrap();

    let err = store.get::<UserRecord>(&key).unwrap_err();
    assert!(err.to_string().contains(&key));
}

#[test]
fn user_keys_scan_by_prefix() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = LocalStore::from_path(dir.path().join("s.json")).unwrap();
    store.set_string(&user_key("a@x.com"), "{}").unwrap();
    store.set_string(&user_key("b@x.com"), "{}").unwrap();
    store.set_string("notes", "[]").unwrap();

    let keys = store.keys_with_prefix(USER_KEY_PREFIX);
    assert_eq!(keys, vec!["user_a@x.com", "user_b@x.com"]);
}

#[test]
fn remove_reports_whether_a_key_existed() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = LocalStore::from_path(dir.path().join("s.json")).unwrap();
    store.set_string(KEY_USER_EMAIL, "a@x.com").unwrap();

    assert!(store.remove(KEY_USER_EMAIL).unwrap());
    assert!(!store.remove(KEY_USER_EMAIL).unwrap());
}

#[test]
fn empty_store_loads_an_empty_session() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalStore::from_path(dir.path().join("s.json")).unwrap();
    let session = Session::load(&store).unwrap();
    assert!(!session.logged_in);
    assert!(!session.admin);
    assert!(session.email.is_none());
    assert!(session.status.is_none());
}

#[test]
fn garbage_session_status_is_an_error_on_read() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = LocalStore::from_path(dir.path().join("s.json")).unwrap();
    store.set_string("userStatus", "exploded").unwrap();

    let err = Session::load(&store).unwrap_err();
    assert!(format!("{err:#}").contains("unknown user status"));
}
