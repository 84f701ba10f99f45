use std::fmt;

/// Error type for registry operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// `add` was called with an identifier that is already present.
    DuplicateKey(String),
    /// `remove` was called with an identifier that is not present.
    NotFound(String),
}

impl RegistryError {
    /// The identifier the failed operation was called with.
    pub fn id(&self) -> &str {
        match self {
            RegistryError::DuplicateKey(id) | RegistryError::NotFound(id) => id,
        }
    }
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::DuplicateKey(id) => {
                write!(f, "failed to add to registry: id '{}' already exists", id)
            }
            RegistryError::NotFound(id) => {
                write!(f, "failed to remove from registry: id '{}' does not exist", id)
            }
        }
    }
}

impl std::error::Error for RegistryError {}
