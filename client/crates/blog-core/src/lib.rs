pub mod messages;
pub mod models;
pub mod search;

#[cfg(test)]
mod tests;

pub use models::blog_input::BlogInput;
pub use models::blog_post::BlogPost;
pub use models::error_body::ErrorBody;
pub use models::identity::Identity;
pub use models::login_response::LoginResponse;
pub use models::register_request::RegisterRequest;
pub use search::{filter_posts, matches_search};

/// Canonical storage key for the bearer credential.
pub const CREDENTIAL_KEY: &str = "token";

/// Key written by older backends; read as a fallback, cleared on logout.
pub const LEGACY_CREDENTIAL_KEY: &str = "access_token";

/// Every key that holds a credential, in lookup order.
pub const CREDENTIAL_KEYS: [&str; 2] = [CREDENTIAL_KEY, LEGACY_CREDENTIAL_KEY];

pub fn is_credential_key(key: &str) -> bool {
    CREDENTIAL_KEYS.contains(&key)
}
