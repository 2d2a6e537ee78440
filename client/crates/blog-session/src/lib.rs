//! Persisted credential plus change notification.
//!
//! A [`Session`] is one context's view of a [`CredentialStore`]. Several
//! sessions over the same store behave like browser tabs sharing one origin:
//! writes made through a session are announced to its own subscribers as
//! [`AuthChange::Local`], and other sessions pick them up as
//! [`AuthChange::Storage`] when they poll.

mod auth_change;
mod credential_store;
mod error;
mod file_store;
mod memory_store;
mod session;
mod storage_watcher;
mod stored_keys;


pub use auth_change::AuthChange;
pub use credential_store::CredentialStore;
pub use error::{Result as SessionResult, SessionError};
pub use file_store::FileStore;
pub use memory_store::MemoryStore;
pub use session::Session;
pub use storage_watcher::StorageWatcher;
pub use stored_keys::StoredKeys;

/// Buffered change notifications per subscriber before it lags.
const CHANGE_CHANNEL_CAPACITY: usize = 16;
