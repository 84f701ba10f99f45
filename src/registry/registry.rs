use super::RegistryError;

/// Write-once keyed storage.
///
/// Once an identifier has been added it cannot be reassigned through this
/// trait. Implementations that also allow removal and overwrite implement
/// [`MutableRegistry`] on top.
pub trait Registry<T> {
    /// Returns the value stored under `id`, or `None` if absent.
    fn get(&self, id: &str) -> Option<&T>;

    /// Add `value` under `id`.
    ///
    /// Fails with `RegistryError::DuplicateKey` if `id` already exists, in which
    /// case the registry is left unchanged.
    fn add(&mut self, id: &str, value: T) -> Result<(), RegistryError>;

    /// Identifiers in insertion order.
    fn ids(&self) -> Vec<&str>;

    /// Number of stored entries.
    fn len(&self) -> usize;

    /// Whether a value is stored under `id`.
    fn exists(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Registry capability that also permits removal and reassignment.
pub trait MutableRegistry<T>: Registry<T> {
    /// Remove the entry stored under `id`.
    ///
    /// Fails with `RegistryError::NotFound` if `id` does not exist.
    fn remove(&mut self, id: &str) -> Result<T, RegistryError>;

    /// Assign `value` to `id`, replacing any existing entry.
    ///
    /// Equivalent to removing `id` when present and then adding it, so the
    /// identifier moves to the end of the iteration order.
    fn set(&mut self, id: &str, value: T) -> Result<(), RegistryError> {
        if self.exists(id) {
            self.remove(id)?;
        }
        self.add(id, value)
    }
}
