use crate::action::{Action, Payload};
use crate::registry::RegistryError;

use super::binding::Binding;
use super::dispatch::Dispatcher;
use super::{Dispatch, StoreError};

/// Stores a value of type `T` and facilitates access to it.
///
/// The value can only change through actions registered with
/// [`add_action`](Store::add_action) and run with [`apply`](Store::apply).
/// Registered actions can never be removed or replaced.
pub struct Store<T> {
    inner: Dispatcher<T, ()>,
}

impl<T: Default> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> Store<T> {
    /// Create a store holding `initial`.
    pub fn new(initial: T) -> Self {
        Self {
            inner: Dispatcher::new((), initial),
        }
    }

    /// Read the current value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.inner.read(f)
    }

    /// Returns an accessor that always reads the store's current value.
    pub fn bind(&self) -> Binding<T> {
        self.inner.bind()
    }

    /// Register an action under `id`.
    ///
    /// Fails with `RegistryError::DuplicateKey` if `id` is already taken.
    pub fn add_action<F>(&mut self, id: &str, action: F) -> Result<(), RegistryError>
    where
        F: Fn(&T, &Payload) -> T + Send + Sync + 'static,
    {
        self.inner.add_action(id, Box::new(action))
    }

    /// Register an already boxed action.
    pub fn add_boxed_action(&mut self, id: &str, action: Action<T>) -> Result<(), RegistryError> {
        self.inner.add_action(id, action)
    }

    pub fn has_action(&self, id: &str) -> bool {
        self.inner.has_action(id)
    }

    /// Registered action identifiers, in registration order.
    pub fn actions(&self) -> Vec<&str> {
        self.inner.action_ids()
    }

    /// Apply the action `id` with an empty payload.
    pub fn apply(&mut self, id: &str) -> Result<(), StoreError> {
        self.inner.apply(id, &Payload::empty())
    }

    /// Apply the action `id` with the given payload.
    ///
    /// On `StoreError::UnknownAction` the value is left unchanged.
    pub fn apply_with(&mut self, id: &str, payload: impl Into<Payload>) -> Result<(), StoreError> {
        self.inner.apply(id, &payload.into())
    }
}

impl<T: Clone> Store<T> {
    /// Current value.
    pub fn get(&self) -> T {
        self.with(T::clone)
    }
}

impl<T> Dispatch for Store<T> {
    type Value = T;

    fn register<F>(&mut self, id: &str, action: F) -> Result<(), StoreError>
    where
        F: Fn(&T, &Payload) -> T + Send + Sync + 'static,
    {
        Ok(self.add_action(id, action)?)
    }

    fn contains_action(&self, id: &str) -> bool {
        self.has_action(id)
    }

    fn dispatch(&mut self, id: &str, payload: Payload) -> Result<(), StoreError> {
        self.apply_with(id, payload)
    }
}
