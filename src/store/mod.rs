//! Stores - a value that only changes through named actions.
//!
//! Two variants share one dispatch kernel:
//!
//! - [`Store<T>`] holds any value and is anonymous.
//! - [`StateStore`] holds JSON state content and carries an id that appears
//!   in its error messages.
//!
//! [`SharedStore<T>`] puts a `Store<T>` behind a lock for use from several
//! threads.
//!
//! ## Example
//!
//! ```ignore
//! use sofa_core::Store;
//!
//! let mut store = Store::new(0);
//! let current = store.bind();
//! store.add_action("inc5", |d, _| d + 5)?;
//! store.apply("inc5")?;
//! assert_eq!(current.get(), 5);
//! ```

mod binding;
mod data;
mod dispatch;
mod error;
mod shared;
mod state;

use crate::action::Payload;

pub use binding::Binding;
pub use data::Store;
pub use error::StoreError;
pub use shared::SharedStore;
pub use state::StateStore;

/// Common surface of stores that dispatch named actions.
pub trait Dispatch {
    /// Type of the value held by the store.
    type Value;

    /// Register `action` under `id`.
    fn register<F>(&mut self, id: &str, action: F) -> Result<(), StoreError>
    where
        F: Fn(&Self::Value, &Payload) -> Self::Value + Send + Sync + 'static;

    fn contains_action(&self, id: &str) -> bool;

    /// Apply the action registered under `id`.
    fn dispatch(&mut self, id: &str, payload: Payload) -> Result<(), StoreError>;
}

/// Register action modules with a store using the convention pattern.
///
/// Each module must export:
/// - `ACTION: &str` - the action id
/// - `apply(&Value, &Payload) -> Value` - the action itself
///
/// Evaluates to `Result<(), StoreError>`, stopping at the first failure.
///
/// # Example
/// ```ignore
/// let mut store = StateStore::new("counter");
/// sofa_core::register_actions!(store, actions::increment, actions::reset)?;
/// ```
#[macro_export]
macro_rules! register_actions {
    ($store:expr, $( $($seg:ident)::+ ),+ $(,)?) => {
        (|| -> ::core::result::Result<(), $crate::StoreError> {
            $(
                $crate::Dispatch::register(
                    &mut $store,
                    $($seg)::+::ACTION,
                    $($seg)::+::apply,
                )?;
            )+
            Ok(())
        })()
    };
}
