use crate::Route;

use blog_core::Identity;

/// What the identity indicator currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityState {
    /// No credential, or the backend could not resolve it
    NoCredential,
    /// A credential exists and `/auth/me` is in flight
    Resolving,
    Identified(Identity),
}

const SIGNED_OUT_LINKS: [Route; 2] = [Route::Login, Route::Register];

impl IdentityState {
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            IdentityState::Identified(identity) => Some(identity),
            _ => None,
        }
    }

    pub fn is_identified(&self) -> bool {
        self.identity().is_some()
    }

    /// Text shown in the header.
    pub fn render(&self) -> String {
        match self {
            IdentityState::Identified(identity) => format!("Hi, {} | Logout", identity.username),
            IdentityState::NoCredential | IdentityState::Resolving => {
                String::from("Sign in | Sign up")
            }
        }
    }

    /// Where the header's links lead. Signed in, the only control is logout.
    pub fn links(&self) -> &'static [Route] {
        match self {
            IdentityState::Identified(_) => &[],
            IdentityState::NoCredential | IdentityState::Resolving => &SIGNED_OUT_LINKS,
        }
    }
}
