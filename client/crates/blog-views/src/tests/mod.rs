
use blog_api::ApiClient;
use blog_session::{MemoryStore, Session};

/// Client pointing at a port nothing listens on. Only for paths that must
/// not reach the network.
pub(crate) fn offline_client() -> (ApiClient, Session) {
    let session = Session::new(MemoryStore::new());
    (ApiClient::new("http://127.0.0.1:9", session.clone()), session)
}
