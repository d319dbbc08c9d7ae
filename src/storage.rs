//! Best-effort preference storage.
//!
//! Storage can be missing, disabled, full or blocked by privacy settings. None
//! of that is an error for the page: reads report "nothing stored" and writes
//! report that they had no effect.

/// Durable client-side key-value storage.
pub trait PreferenceStore {
    /// Stored value, or `None` if absent or storage is unavailable.
    fn read(&self, key: &str) -> Option<String>;

    /// Store a value. Returns `false` if the write had no effect.
    fn write(&self, key: &str, value: &str) -> bool;
}

/// A single named slot in a [`PreferenceStore`].
pub struct PreferenceSlot<S> {
    store: S,
    key: String,
}

impl<S: PreferenceStore> PreferenceSlot<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn read(&self) -> Option<String> {
        self.store.read(&self.key)
    }

    pub fn write(&self, value: &str) -> bool {
        let written = self.store.write(&self.key, value);
        if !written {
            tracing::debug!(key = %self.key, "preference write had no effect");
        }
        written
    }
}
