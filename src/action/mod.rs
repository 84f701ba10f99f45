//! Actions - named transformations applied to store values.
//!
//! An action maps `(current value, payload)` to the next value. It sees the
//! current value by shared reference only; the value it returns replaces the
//! store's value wholesale.
//!
//! ## Handler Convention
//!
//! Action modules registered with [`register_actions!`](crate::register_actions)
//! follow this layout:
//!
//! ```ignore
//! // src/actions/add_custom.rs
//!
//! pub const ACTION: &str = "add_custom";
//!
//! pub fn apply(current: &i64, payload: &Payload) -> i64 {
//!     current + payload.get("custom").and_then(|v| v.as_i64()).unwrap_or(0)
//! }
//! ```

mod payload;

pub use payload::Payload;

/// A boxed action over values of type `T`.
pub type Action<T> = Box<dyn Fn(&T, &Payload) -> T + Send + Sync>;

/// Box a closure as an [`Action`].
pub fn action<T, F>(f: F) -> Action<T>
where
    F: Fn(&T, &Payload) -> T + Send + Sync + 'static,
{
    Box::new(f)
}
