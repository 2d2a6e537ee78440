use serde::{Deserialize, Serialize};

/// The user a credential resolves to (`GET /auth/me`).
///
/// Never persisted. Extra fields sent by the backend are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
}
