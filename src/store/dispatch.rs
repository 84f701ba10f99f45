//! Dispatcher - the value + named actions kernel shared by both store variants.

use tracing::{debug, warn};

use crate::action::{Action, Payload};
use crate::registry::{InMemoryRegistry, Registry, RegistryError};

use super::binding::{Binding, ValueCell};
use super::StoreError;

/// Identity carried by a dispatcher. Anonymous stores use `()`.
pub(crate) trait Identity {
    fn label(&self) -> Option<&str>;
}

impl Identity for () {
    fn label(&self) -> Option<&str> {
        None
    }
}

impl Identity for String {
    fn label(&self) -> Option<&str> {
        Some(self)
    }
}

/// A value paired with a write-once table of actions.
///
/// `apply` is the only path that replaces the value.
pub(crate) struct Dispatcher<T, I> {
    identity: I,
    value: ValueCell<T>,
    actions: InMemoryRegistry<Action<T>>,
}

impl<T, I: Identity> Dispatcher<T, I> {
    pub(crate) fn new(identity: I, initial: T) -> Self {
        Self {
            identity,
            value: ValueCell::new(initial),
            actions: InMemoryRegistry::new(),
        }
    }

    pub(crate) fn identity(&self) -> &I {
        &self.identity
    }

    fn store_label(&self) -> Option<String> {
        self.identity.label().map(str::to_string)
    }

    pub(crate) fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.value.read(f)
    }

    pub(crate) fn bind(&self) -> Binding<T> {
        self.value.binding()
    }

    pub(crate) fn add_action(&mut self, id: &str, action: Action<T>) -> Result<(), RegistryError> {
        self.actions.add(id, action)?;
        debug!(store = ?self.identity.label(), action = id, "registered action");
        Ok(())
    }

    /// Like `add_action`, but reports duplicates as `DuplicateAction` naming the store.
    pub(crate) fn register_action(&mut self, id: &str, action: Action<T>) -> Result<(), StoreError> {
        self.add_action(id, action).map_err(|err| match err {
            RegistryError::DuplicateKey(action) => StoreError::DuplicateAction {
                store: self.store_label(),
                action,
            },
            other => StoreError::Registry(other),
        })
    }

    pub(crate) fn has_action(&self, id: &str) -> bool {
        self.actions.exists(id)
    }

    pub(crate) fn action_ids(&self) -> Vec<&str> {
        self.actions.ids()
    }

    pub(crate) fn apply(&mut self, id: &str, payload: &Payload) -> Result<(), StoreError> {
        let Some(action) = self.actions.get(id) else {
            warn!(store = ?self.identity.label(), action = id, "rejected unknown action");
            return Err(StoreError::UnknownAction {
                store: self.store_label(),
                action: id.to_string(),
            });
        };

        let next = self.value.read(|current| action(current, payload));
        self.value.replace(next);
        debug!(store = ?self.identity.label(), action = id, "applied action");
        Ok(())
    }
}
