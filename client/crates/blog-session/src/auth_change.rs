use blog_core::is_credential_key;

/// Notification that persisted auth state may have changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthChange {
    /// This context wrote or cleared the credential.
    Local,
    /// Another context changed `key` in the shared store.
    Storage { key: String },
}

impl AuthChange {
    /// Whether observers of credential presence need to re-evaluate.
    pub fn affects_credential(&self) -> bool {
        match self {
            AuthChange::Local => true,
            AuthChange::Storage { key } => is_credential_key(key),
        }
    }
}
