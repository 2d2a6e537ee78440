use crate::{AuthChange, CHANGE_CHANNEL_CAPACITY, CredentialStore, SessionResult, StoredKeys};

use blog_core::{CREDENTIAL_KEY, CREDENTIAL_KEYS};

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, info, warn};
use tokio::sync::broadcast;

/// One context's handle on the persisted credential.
///
/// Cheap to clone; clones share the same change channel and are the same
/// context. Build a second `Session` over the same store to model another
/// context.
#[derive(Clone)]
pub struct Session {
    inner: Arc<Inner>,
}

struct Inner {
    store: Box<dyn CredentialStore>,
    /// Store contents as this context last wrote or observed them.
    seen: Mutex<StoredKeys>,
    changes: broadcast::Sender<AuthChange>,
}

impl Session {
    pub fn new(store: impl CredentialStore + 'static) -> Self {
        let seen = store.load().unwrap_or_else(|e| {
            warn!("Could not read session store, starting empty: {e}");
            StoredKeys::new()
        });
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);

        Self {
            inner: Arc::new(Inner {
                store: Box::new(store),
                seen: Mutex::new(seen),
                changes,
            }),
        }
    }

    /// Current credential: the canonical key, else the legacy key. Empty
    /// values count as absent.
    ///
    /// Reads the store each time, so writes from other contexts are visible
    /// immediately even before a storage change is announced.
    pub fn get_credential(&self) -> Option<String> {
        let keys = match self.inner.store.load() {
            Ok(keys) => keys,
            Err(e) => {
                warn!("Could not read session store, using last known state: {e}");
                self.seen().clone()
            }
        };

        CREDENTIAL_KEYS
            .iter()
            .filter_map(|key| keys.get(key))
            .find(|value| !value.is_empty())
            .map(String::from)
    }

    pub fn has_credential(&self) -> bool {
        self.get_credential().is_some()
    }

    /// Store `token` under the canonical key and announce the change.
    pub fn set_credential(&self, token: &str) -> SessionResult<()> {
        {
            let mut seen = self.seen();
            let mut keys = self.inner.store.load()?;
            keys.insert(CREDENTIAL_KEY, token);
            self.inner.store.save(&keys)?;
            seen.insert(CREDENTIAL_KEY, token);
        }

        info!("Credential stored");
        self.notify();
        Ok(())
    }

    /// Remove the credential under every key it may live under and announce
    /// the change.
    pub fn clear_credential(&self) -> SessionResult<()> {
        {
            let mut seen = self.seen();
            let mut keys = self.inner.store.load()?;
            for key in CREDENTIAL_KEYS {
                keys.remove(key);
                seen.remove(key);
            }
            self.inner.store.save(&keys)?;
        }

        info!("Credential cleared");
        self.notify();
        Ok(())
    }

    /// Subscribe to change notifications for this context.
    pub fn subscribe(&self) -> broadcast::Receiver<AuthChange> {
        self.inner.changes.subscribe()
    }

    /// Announce a same-context change to every subscriber.
    pub fn notify(&self) {
        // No subscribers is fine
        let _ = self.inner.changes.send(AuthChange::Local);
    }

    /// Pick up writes made by other contexts since this context last looked.
    ///
    /// Emits one [`AuthChange::Storage`] per changed key, for every key in the
    /// store, and returns them. Writes made through this session are already
    /// accounted for and never show up here.
    pub fn poll_external(&self) -> SessionResult<Vec<AuthChange>> {
        let changed = {
            let mut seen = self.seen();
            let current = self.inner.store.load()?;
            let changed = seen.changed_keys(&current);
            *seen = current;
            changed
        };

        let changes: Vec<AuthChange> = changed
            .into_iter()
            .map(|key| AuthChange::Storage { key })
            .collect();

        for change in &changes {
            debug!("External storage change: {change:?}");
            let _ = self.inner.changes.send(change.clone());
        }

        Ok(changes)
    }

    fn seen(&self) -> MutexGuard<'_, StoredKeys> {
        self.inner.seen.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
