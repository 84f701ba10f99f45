//! Value cell shared between a store and its bindings.

use std::sync::{Arc, PoisonError, RwLock};

/// Holds a store's current value.
///
/// Writers only ever swap in a fully built value, so a poisoned guard still
/// holds a complete value and is recovered rather than reported.
pub(crate) struct ValueCell<T> {
    value: Arc<RwLock<T>>,
}

impl<T> ValueCell<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value: Arc::new(RwLock::new(value)),
        }
    }

    pub(crate) fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let guard = self.value.read().unwrap_or_else(PoisonError::into_inner);
        f(&*guard)
    }

    /// Replace the held value, returning the previous one.
    pub(crate) fn replace(&self, next: T) -> T {
        let mut guard = self.value.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, next)
    }

    pub(crate) fn binding(&self) -> Binding<T> {
        Binding {
            value: Arc::clone(&self.value),
        }
    }
}

/// Late-bound accessor for a store's value.
///
/// A binding shares the store's value cell instead of copying the value, so
/// every read sees whatever the store holds at that moment. It stays valid
/// after the store is dropped and then reports the last value.
pub struct Binding<T> {
    value: Arc<RwLock<T>>,
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self {
            value: Arc::clone(&self.value),
        }
    }
}

impl<T> Binding<T> {
    /// Read the current value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let guard = self.value.read().unwrap_or_else(PoisonError::into_inner);
        f(&*guard)
    }
}

impl<T: Clone> Binding<T> {
    /// Current value of the bound store.
    pub fn get(&self) -> T {
        self.with(T::clone)
    }

    /// Turn the binding into a plain zero-argument getter.
    pub fn into_fn(self) -> impl Fn() -> T {
        move || self.get()
    }
}
