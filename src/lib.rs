pub mod action;
#[cfg(feature = "emitter")]
pub mod emitter;
mod registry;
mod store;

pub use action::{action, Action, Payload};
pub use registry::{
    InMemoryMutableRegistry, InMemoryRegistry, MutableRegistry, Registry, RegistryError,
};
pub use store::{Binding, Dispatch, SharedStore, StateStore, Store, StoreError};

#[cfg(feature = "emitter")]
pub use emitter::{EmittableStore, StoreEmitter};

// Re-export the EventEmitter from the event_emitter_rs crate
#[cfg(feature = "emitter")]
pub use event_emitter_rs::EventEmitter;
