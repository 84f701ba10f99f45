//! Change notification for state stores (requires the `emitter` feature).

mod store_ext;

pub use store_ext::{EmittableStore, StoreEmitter};
