use serde::Deserialize;
use serde_json::Value;

/// Error payload returned by the backend on non-2xx responses.
///
/// `detail` is usually a string, but validation failures carry a list of
/// objects instead.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorBody {
    /// The detail message, if the backend sent a non-empty string.
    pub fn message(&self) -> Option<&str> {
        match &self.detail {
            Some(Value::String(s)) if !s.is_empty() => Some(s.as_str()),
            _ => None,
        }
    }

    /// Parse a raw response body, tolerating empty or non-JSON bodies.
    pub fn from_slice(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }
}
