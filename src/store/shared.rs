//! SharedStore - a `Store` behind one lock, for use across threads.

use std::sync::{Arc, RwLock};

use crate::action::Payload;

use super::binding::Binding;
use super::data::Store;
use super::StoreError;

/// Thread-safe handle to a [`Store`].
///
/// Every operation holds the store's lock for its whole duration, so at most
/// one `apply` or `add_action` runs at a time. Clone-friendly via Arc; clones
/// share the same store.
pub struct SharedStore<T> {
    store: Arc<RwLock<Store<T>>>,
}

impl<T> Clone for SharedStore<T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<T> From<Store<T>> for SharedStore<T> {
    fn from(store: Store<T>) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}

impl<T> SharedStore<T> {
    pub fn new(initial: T) -> Self {
        Store::new(initial).into()
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> Result<R, StoreError> {
        let store = self
            .store
            .read()
            .map_err(|_| StoreError::LockPoisoned("shared store read"))?;
        Ok(store.with(f))
    }

    pub fn bind(&self) -> Result<Binding<T>, StoreError> {
        let store = self
            .store
            .read()
            .map_err(|_| StoreError::LockPoisoned("shared store bind"))?;
        Ok(store.bind())
    }

    pub fn add_action<F>(&self, id: &str, action: F) -> Result<(), StoreError>
    where
        F: Fn(&T, &Payload) -> T + Send + Sync + 'static,
    {
        let mut store = self
            .store
            .write()
            .map_err(|_| StoreError::LockPoisoned("shared store add_action"))?;
        Ok(store.add_action(id, action)?)
    }

    pub fn has_action(&self, id: &str) -> Result<bool, StoreError> {
        let store = self
            .store
            .read()
            .map_err(|_| StoreError::LockPoisoned("shared store read"))?;
        Ok(store.has_action(id))
    }

    pub fn apply(&self, id: &str) -> Result<(), StoreError> {
        self.apply_with(id, Payload::empty())
    }

    pub fn apply_with(&self, id: &str, payload: impl Into<Payload>) -> Result<(), StoreError> {
        let mut store = self
            .store
            .write()
            .map_err(|_| StoreError::LockPoisoned("shared store apply"))?;
        store.apply_with(id, payload)
    }
}

impl<T: Clone> SharedStore<T> {
    pub fn get(&self) -> Result<T, StoreError> {
        self.with(T::clone)
    }
}
