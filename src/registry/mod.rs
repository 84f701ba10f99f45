//! Registries - keyed storage addressed by string identifiers.
//!
//! [`Registry`] is write-once: an identifier can be added but never
//! reassigned. [`MutableRegistry`] layers removal and overwrite on top.
//!
//! ## Example
//!
//! ```ignore
//! use sofa_core::{InMemoryMutableRegistry, MutableRegistry, Registry};
//!
//! let mut registry = InMemoryMutableRegistry::new();
//! registry.add("theme", "dark")?;
//! registry.set("theme", "light")?;
//! assert_eq!(registry.get("theme"), Some(&"light"));
//! ```

mod error;
mod in_memory;
mod registry;

pub use error::RegistryError;
pub use in_memory::{InMemoryMutableRegistry, InMemoryRegistry};
pub use registry::{MutableRegistry, Registry};
