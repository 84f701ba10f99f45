//! SharedStore tests across threads.

use std::sync::mpsc;
use std::thread;

use serde_json::json;
use sofa_core::{SharedStore, Store, StoreError};

#[test]
fn workers_share_one_store() {
    let mut store = Store::new(0i64);
    store
        .add_action("add", |d, p| {
            d + p.get("amount").and_then(|v| v.as_i64()).unwrap_or(0)
        })
        .unwrap();
    let shared = SharedStore::from(store);
    let binding = shared.bind().unwrap();

    let (tx, rx) = mpsc::channel();
    for worker in 1..=4 {
        let shared = shared.clone();
        let tx = tx.clone();
        thread::spawn(move || {
            let result = shared.apply_with("add", json!({ "amount": worker }));
            tx.send(result).unwrap();
        });
    }
    drop(tx);

    let results: Vec<Result<(), StoreError>> = rx.iter().collect();
    assert_eq!(results.len(), 4);
    assert!(results.iter().all(Result::is_ok));
    assert_eq!(shared.get().unwrap(), 10);
    assert_eq!(binding.get(), 10);
}

#[test]
fn unknown_action_through_shared_store() {
    let shared = SharedStore::new(1);
    let err = shared.apply("missing").unwrap_err();
    assert!(matches!(err, StoreError::UnknownAction { .. }));
    assert_eq!(shared.get().unwrap(), 1);
    assert!(!shared.has_action("missing").unwrap());
}
