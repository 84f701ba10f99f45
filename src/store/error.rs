use std::fmt;

use crate::registry::RegistryError;

/// Error type for store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// An action with this identifier is already registered on the store.
    DuplicateAction {
        store: Option<String>,
        action: String,
    },
    /// No action with this identifier is registered on the store.
    UnknownAction {
        store: Option<String>,
        action: String,
    },
    /// Error from the underlying action registry.
    Registry(RegistryError),
    /// The lock around a shared store was poisoned during the named operation.
    LockPoisoned(&'static str),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::DuplicateAction {
                store: Some(store),
                action,
            } => write!(
                f,
                "unable to register action '{}' for store '{}': action already exists",
                action, store
            ),
            StoreError::DuplicateAction {
                store: None,
                action,
            } => write!(
                f,
                "unable to register action '{}': action already exists",
                action
            ),
            StoreError::UnknownAction {
                store: Some(store),
                action,
            } => write!(
                f,
                "unable to apply action '{}' for store '{}': action does not exist",
                action, store
            ),
            StoreError::UnknownAction {
                store: None,
                action,
            } => write!(
                f,
                "unable to apply action '{}': action does not exist for store",
                action
            ),
            StoreError::Registry(e) => write!(f, "registry error: {}", e),
            StoreError::LockPoisoned(operation) => {
                write!(f, "store lock poisoned during {}", operation)
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Registry(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RegistryError> for StoreError {
    fn from(err: RegistryError) -> Self {
        StoreError::Registry(err)
    }
}
