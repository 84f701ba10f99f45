use event_emitter_rs::EventEmitter;
use serde_json::Value;
use tracing::trace;

use crate::action::Payload;
use crate::store::{StateStore, StoreError};

/// Extension wrapper that notifies listeners when a [`StateStore`] changes.
///
/// Listeners receive the store's new content as a JSON string. Events fire
/// only after a successful apply and are delivered on the emitter's own
/// threads.
///
/// # Example
///
/// ```ignore
/// use sofa_core::emitter::EmittableStore;
///
/// let mut store = StateStore::new("settings").with_emitter();
/// store.on_change(|content| println!("settings now {}", content));
/// store.register_action("reset", |_, _| json!({}))?;
/// store.apply("reset")?;
/// ```
pub struct StoreEmitter {
    store: StateStore,
    event_emitter: EventEmitter,
}

impl StoreEmitter {
    /// Wrap a store with emitter capabilities.
    pub fn new(store: StateStore) -> Self {
        Self {
            store,
            event_emitter: EventEmitter::new(),
        }
    }

    pub fn store(&self) -> &StateStore {
        &self.store
    }

    /// Unwrap and return the underlying store.
    pub fn into_store(self) -> StateStore {
        self.store
    }

    pub fn id(&self) -> &str {
        self.store.id()
    }

    pub fn get(&self) -> Value {
        self.store.get()
    }

    /// Event name fired after any successful apply.
    pub fn change_event(&self) -> String {
        self.store.id().to_string()
    }

    /// Event name fired after a successful apply of `action_id`.
    pub fn action_event(&self, action_id: &str) -> String {
        format!("{}:{}", self.store.id(), action_id)
    }

    /// Register a listener for every change. Returns the listener id.
    pub fn on_change<F>(&mut self, listener: F) -> String
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        let event = self.change_event();
        self.event_emitter.on(&event, listener)
    }

    /// Register a listener for one action. Returns the listener id.
    pub fn on_action<F>(&mut self, action_id: &str, listener: F) -> String
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        let event = self.action_event(action_id);
        self.event_emitter.on(&event, listener)
    }

    pub fn register_action<F>(&mut self, action_id: &str, action: F) -> Result<(), StoreError>
    where
        F: Fn(&Value, &Payload) -> Value + Send + Sync + 'static,
    {
        self.store.register_action(action_id, action)
    }

    pub fn action_exists(&self, action_id: &str) -> bool {
        self.store.action_exists(action_id)
    }

    pub fn apply(&mut self, action_id: &str) -> Result<(), StoreError> {
        self.apply_with(action_id, Payload::empty())
    }

    /// Apply an action, then notify change and action listeners.
    pub fn apply_with(
        &mut self,
        action_id: &str,
        payload: impl Into<Payload>,
    ) -> Result<(), StoreError> {
        self.store.apply_with(action_id, payload)?;

        let content = self.store.get().to_string();
        let change_event = self.change_event();
        let action_event = self.action_event(action_id);
        trace!(store = self.store.id(), action = action_id, "emitting change");
        self.event_emitter.emit(&action_event, content.clone());
        self.event_emitter.emit(&change_event, content);
        Ok(())
    }
}

/// Trait for stores that can be extended with emitter capabilities.
pub trait EmittableStore {
    /// Wrap with emitter capabilities.
    fn with_emitter(self) -> StoreEmitter;
}

impl EmittableStore for StateStore {
    fn with_emitter(self) -> StoreEmitter {
        StoreEmitter::new(self)
    }
}
