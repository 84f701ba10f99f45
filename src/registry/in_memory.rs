//! Insertion-ordered in-memory registries backed by `IndexMap`.

use indexmap::IndexMap;
use tracing::{trace, warn};

use super::{MutableRegistry, Registry, RegistryError};

/// Write-once in-memory registry.
///
/// Iteration yields entries in the order they were added.
#[derive(Debug, Clone)]
pub struct InMemoryRegistry<T> {
    entries: IndexMap<String, T>,
}

impl<T> Default for InMemoryRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> InMemoryRegistry<T> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Build a registry from `(id, value)` pairs.
    ///
    /// Fails on the first repeated identifier.
    pub fn try_from_iter<I, K>(pairs: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
    {
        let mut registry = Self::new();
        for (id, value) in pairs {
            let id = id.into();
            registry.add(&id, value)?;
        }
        Ok(registry)
    }

    /// Iterate over `(id, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(id, value)| (id.as_str(), value))
    }
}

impl<T> Registry<T> for InMemoryRegistry<T> {
    fn get(&self, id: &str) -> Option<&T> {
        trace!(id, "registry lookup");
        self.entries.get(id)
    }

    fn add(&mut self, id: &str, value: T) -> Result<(), RegistryError> {
        if self.exists(id) {
            warn!(id, "rejected duplicate registry id");
            return Err(RegistryError::DuplicateKey(id.to_string()));
        }
        self.entries.insert(id.to_string(), value);
        Ok(())
    }

    fn ids(&self) -> Vec<&str> {
        self.entries.keys().map(|id| id.as_str()).collect()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// In-memory registry that also allows removal and reassignment.
///
/// Wraps an [`InMemoryRegistry`] and adds the [`MutableRegistry`] capability.
#[derive(Debug, Clone)]
pub struct InMemoryMutableRegistry<T> {
    inner: InMemoryRegistry<T>,
}

impl<T> Default for InMemoryMutableRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> InMemoryMutableRegistry<T> {
    pub fn new() -> Self {
        Self {
            inner: InMemoryRegistry::new(),
        }
    }

    /// Build a registry from `(id, value)` pairs.
    ///
    /// Like [`InMemoryRegistry::try_from_iter`], repeated identifiers are an
    /// error; use `set` afterwards when overwriting is intended.
    pub fn try_from_iter<I, K>(pairs: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
    {
        Ok(Self {
            inner: InMemoryRegistry::try_from_iter(pairs)?,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.inner.iter()
    }

    /// Drop the mutation capability, keeping the current entries.
    pub fn into_frozen(self) -> InMemoryRegistry<T> {
        self.inner
    }
}

impl<T> From<InMemoryRegistry<T>> for InMemoryMutableRegistry<T> {
    fn from(inner: InMemoryRegistry<T>) -> Self {
        Self { inner }
    }
}

impl<T> Registry<T> for InMemoryMutableRegistry<T> {
    fn get(&self, id: &str) -> Option<&T> {
        self.inner.get(id)
    }

    fn add(&mut self, id: &str, value: T) -> Result<(), RegistryError> {
        self.inner.add(id, value)
    }

    fn ids(&self) -> Vec<&str> {
        self.inner.ids()
    }

    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> MutableRegistry<T> for InMemoryMutableRegistry<T> {
    fn remove(&mut self, id: &str) -> Result<T, RegistryError> {
        match self.inner.entries.shift_remove(id) {
            Some(value) => Ok(value),
            None => {
                warn!(id, "rejected removal of missing registry id");
                Err(RegistryError::NotFound(id.to_string()))
            }
        }
    }
}
