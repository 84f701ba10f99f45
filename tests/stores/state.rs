//! State-store tests.

use serde_json::json;
use sofa_core::{Payload, StateStore, StoreError};

#[test]
fn set5_lifecycle() {
    let mut store = StateStore::with_content("s", json!({}));
    store.register_action("set5", |_, _| json!(5)).unwrap();

    store.apply("set5").unwrap();
    assert_eq!(store.get(), json!(5));

    let err = store.register_action("set5", |_, _| json!(6)).unwrap_err();
    assert_eq!(
        err,
        StoreError::DuplicateAction {
            store: Some("s".into()),
            action: "set5".into(),
        }
    );

    let err = store.apply("nope").unwrap_err();
    assert_eq!(
        err,
        StoreError::UnknownAction {
            store: Some("s".into()),
            action: "nope".into(),
        }
    );
    assert_eq!(store.get(), json!(5));
}

#[test]
fn error_messages_name_store_and_action() {
    let mut store = StateStore::new("profile");
    let message = store.apply("rename").unwrap_err().to_string();
    assert!(message.contains("profile"));
    assert!(message.contains("rename"));
}

#[test]
fn default_payload_is_empty_object() {
    let mut store = StateStore::new("echo");
    store
        .register_action("echo", |_, payload: &Payload| payload.raw().clone())
        .unwrap();
    store.apply("echo").unwrap();
    assert_eq!(store.get(), json!({}));
}

#[test]
fn binding_follows_content() {
    let mut store = StateStore::new("flags");
    let flags = store.bind();
    store
        .register_action("enable", |content, payload| {
            let mut next = content.clone();
            if let (Some(map), Some(name)) = (
                next.as_object_mut(),
                payload.get("name").and_then(|v| v.as_str()),
            ) {
                map.insert(name.to_string(), json!(true));
            }
            next
        })
        .unwrap();

    store.apply_with("enable", json!({ "name": "beta" })).unwrap();
    assert_eq!(flags.get(), json!({ "beta": true }));
    assert_eq!(store.with(|c| c["beta"].clone()), json!(true));
}
