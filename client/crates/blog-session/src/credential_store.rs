use crate::{SessionResult, StoredKeys};

/// Persistent key/value storage shared by every context of one origin.
///
/// Implementations load and save whole snapshots; conflicting writers are
/// last-write-wins.
pub trait CredentialStore: Send + Sync {
    fn load(&self) -> SessionResult<StoredKeys>;

    fn save(&self, keys: &StoredKeys) -> SessionResult<()>;
}
