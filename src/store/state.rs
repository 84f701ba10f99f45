use serde_json::{Map, Value};

use crate::action::{Action, Payload};

use super::binding::Binding;
use super::dispatch::Dispatcher;
use super::{Dispatch, StoreError};

/// Named store of state content.
///
/// Content is a JSON value, an empty object unless given at construction.
/// Errors raised by the store name it by its id.
pub struct StateStore {
    inner: Dispatcher<Value, String>,
}

impl StateStore {
    /// Create a store with empty content (`{}`).
    pub fn new(id: impl Into<String>) -> Self {
        Self::with_content(id, Value::Object(Map::new()))
    }

    /// Create a store with the given initial content.
    pub fn with_content(id: impl Into<String>, content: Value) -> Self {
        Self {
            inner: Dispatcher::new(id.into(), content),
        }
    }

    /// The store's id.
    pub fn id(&self) -> &str {
        self.inner.identity()
    }

    /// Current content.
    pub fn get(&self) -> Value {
        self.inner.read(Value::clone)
    }

    pub fn with<R>(&self, f: impl FnOnce(&Value) -> R) -> R {
        self.inner.read(f)
    }

    pub fn bind(&self) -> Binding<Value> {
        self.inner.bind()
    }

    /// Register an action under `action_id`.
    ///
    /// Fails with `StoreError::DuplicateAction` if the id is already registered.
    pub fn register_action<F>(&mut self, action_id: &str, action: F) -> Result<(), StoreError>
    where
        F: Fn(&Value, &Payload) -> Value + Send + Sync + 'static,
    {
        self.inner.register_action(action_id, Box::new(action))
    }

    pub fn register_boxed_action(
        &mut self,
        action_id: &str,
        action: Action<Value>,
    ) -> Result<(), StoreError> {
        self.inner.register_action(action_id, action)
    }

    pub fn action_exists(&self, action_id: &str) -> bool {
        self.inner.has_action(action_id)
    }

    /// Registered action ids, in registration order.
    pub fn actions(&self) -> Vec<&str> {
        self.inner.action_ids()
    }

    /// Apply the action `action_id` with an empty payload.
    pub fn apply(&mut self, action_id: &str) -> Result<(), StoreError> {
        self.inner.apply(action_id, &Payload::empty())
    }

    pub fn apply_with(
        &mut self,
        action_id: &str,
        payload: impl Into<Payload>,
    ) -> Result<(), StoreError> {
        self.inner.apply(action_id, &payload.into())
    }
}

impl Dispatch for StateStore {
    type Value = Value;

    fn register<F>(&mut self, id: &str, action: F) -> Result<(), StoreError>
    where
        F: Fn(&Value, &Payload) -> Value + Send + Sync + 'static,
    {
        self.register_action(id, action)
    }

    fn contains_action(&self, id: &str) -> bool {
        self.action_exists(id)
    }

    fn dispatch(&mut self, id: &str, payload: Payload) -> Result<(), StoreError> {
        self.apply_with(id, payload)
    }
}
