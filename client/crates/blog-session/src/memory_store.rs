use crate::{CredentialStore, SessionResult, StoredKeys};

use std::sync::{Arc, Mutex, PoisonError};

/// In-process store. Clones share the same data, so two sessions built from
/// clones of one `MemoryStore` see each other's writes.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    keys: Arc<Mutex<StoredKeys>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_keys(keys: StoredKeys) -> Self {
        Self {
            keys: Arc::new(Mutex::new(keys)),
        }
    }
}

impl CredentialStore for MemoryStore {
    fn load(&self) -> SessionResult<StoredKeys> {
        Ok(self
            .keys
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn save(&self, keys: &StoredKeys) -> SessionResult<()> {
        *self.keys.lock().unwrap_or_else(PoisonError::into_inner) = keys.clone();
        Ok(())
    }
}
