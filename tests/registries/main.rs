//! Registry integration tests - exercises both registries through the traits.

use sofa_core::{
    InMemoryMutableRegistry, InMemoryRegistry, MutableRegistry, Registry, RegistryError,
};

fn check_write_once<R: Registry<String> + Default>() {
    let mut registry = R::default();

    assert!(registry.get("missing").is_none());
    assert!(!registry.exists("missing"));
    assert!(registry.is_empty());

    registry.add("k", "v1".to_string()).unwrap();
    assert_eq!(registry.get("k").map(String::as_str), Some("v1"));
    assert!(registry.exists("k"));

    let err = registry.add("k", "v2".to_string()).unwrap_err();
    assert_eq!(err, RegistryError::DuplicateKey("k".into()));
    assert_eq!(err.id(), "k");
    assert_eq!(registry.get("k").map(String::as_str), Some("v1"));
    assert_eq!(registry.len(), 1);
}

#[test]
fn write_once_contract_holds_for_both_registries() {
    check_write_once::<InMemoryRegistry<String>>();
    check_write_once::<InMemoryMutableRegistry<String>>();
}

#[test]
fn remove_then_remove_again() {
    let mut registry = InMemoryMutableRegistry::new();
    registry.add("k", "a").unwrap();
    registry.remove("k").unwrap();
    assert!(!registry.exists("k"));

    let err = registry.remove("k").unwrap_err();
    assert_eq!(err, RegistryError::NotFound("k".into()));
}

#[test]
fn set_never_reports_duplicate() {
    let mut registry = InMemoryMutableRegistry::new();
    registry.set("k", "a").unwrap();
    assert_eq!(registry.get("k"), Some(&"a"));

    registry.set("k", "b").unwrap();
    assert_eq!(registry.get("k"), Some(&"b"));
    assert_eq!(registry.len(), 1);
}

#[test]
fn removed_id_can_be_added_again() {
    let mut registry = InMemoryMutableRegistry::new();
    registry.add("k", 1).unwrap();
    registry.remove("k").unwrap();
    registry.add("k", 2).unwrap();
    assert_eq!(registry.get("k"), Some(&2));
}

#[test]
fn generic_code_can_rename_ids() {
    fn rename<R: MutableRegistry<i32>>(registry: &mut R, from: &str, to: &str) {
        let value = registry.remove(from).unwrap();
        registry.set(to, value).unwrap();
    }

    let mut registry = InMemoryMutableRegistry::try_from_iter([("old", 7)]).unwrap();
    rename(&mut registry, "old", "new");
    assert!(!registry.exists("old"));
    assert_eq!(registry.get("new"), Some(&7));
}

#[test]
fn frozen_registry_converts_back() {
    let frozen = InMemoryRegistry::try_from_iter([("a", 1)]).unwrap();
    let mut mutable = InMemoryMutableRegistry::from(frozen);
    mutable.set("a", 2).unwrap();
    assert_eq!(mutable.into_frozen().get("a"), Some(&2));
}
