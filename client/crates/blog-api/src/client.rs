use crate::{ApiError, ApiResult};

use blog_core::{BlogInput, BlogPost, ErrorBody, Identity, LoginResponse, RegisterRequest};
use blog_session::Session;

use std::time::Duration;

use log::debug;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use url::Url;

/// HTTP client for the blog REST API
#[derive(Clone)]
pub struct ApiClient {
    pub base_url: String,
    session: Session,
    client: ReqwestClient,
}

impl ApiClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://localhost:4500")
    /// * `session` - Source of the bearer credential, read on every request
    pub fn new(base_url: &str, session: Session) -> Self {
        Self::with_client(base_url, session, ReqwestClient::new())
    }

    /// Create a client whose requests give up after `timeout`
    pub fn with_timeout(base_url: &str, session: Session, timeout: Duration) -> ApiResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;
        Ok(Self::with_client(base_url, session, client))
    }

    fn with_client(base_url: &str, session: Session, client: ReqwestClient) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
            client,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub(crate) fn url(&self, path: &str) -> ApiResult<Url> {
        Ok(Url::parse(&format!("{}{}", self.base_url, path))?)
    }

    /// Build a request, attaching the stored credential if there is one
    pub(crate) fn request(&self, method: Method, url: Url) -> RequestBuilder {
        debug!("{method} {}", url.path());
        let req = self.client.request(method, url);

        match self.session.get_credential() {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Send and turn any non-success status into [`ApiError::Status`]
    async fn send(&self, req: RequestBuilder) -> ApiResult<Vec<u8>> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let detail = ErrorBody::from_slice(&body).message().map(String::from);
            debug!("HTTP {status}: {}", detail.as_deref().unwrap_or("no detail"));
            return Err(ApiError::status(status.as_u16(), detail));
        }

        Ok(body.to_vec())
    }

    async fn execute<T: DeserializeOwned>(&self, req: RequestBuilder) -> ApiResult<T> {
        let body = self.send(req).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// For endpoints whose success body is irrelevant (or empty)
    async fn execute_empty(&self, req: RequestBuilder) -> ApiResult<()> {
        self.send(req).await.map(drop)
    }

    // =========================================================================
    // Auth Operations
    // =========================================================================

    /// Exchange email and password for an access token.
    ///
    /// The backend takes the credentials as query parameters.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<LoginResponse> {
        let mut url = self.url("/auth/login")?;
        url.query_pairs_mut()
            .append_pair("email", email)
            .append_pair("password", password);

        let req = self.request(Method::POST, url);
        self.execute(req).await
    }

    /// Create an account. Does not log in.
    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<()> {
        let req = self
            .request(Method::POST, self.url("/auth/register")?)
            .json(request);
        self.execute_empty(req).await
    }

    /// Resolve the current credential to a user
    pub async fn me(&self) -> ApiResult<Identity> {
        let req = self.request(Method::GET, self.url("/auth/me")?);
        self.execute(req).await
    }

    // =========================================================================
    // Blog Operations
    // =========================================================================

    /// List all blog posts
    pub async fn list_blogs(&self) -> ApiResult<Vec<BlogPost>> {
        let req = self.request(Method::GET, self.url("/blogs")?);
        self.execute(req).await
    }

    /// Get a blog post by ID
    pub async fn get_blog(&self, id: i64) -> ApiResult<BlogPost> {
        let req = self.request(Method::GET, self.url(&format!("/blogs/{id}"))?);
        self.execute(req).await
    }

    /// Create a blog post owned by the current user
    pub async fn create_blog(&self, input: &BlogInput) -> ApiResult<BlogPost> {
        let req = self.request(Method::POST, self.url("/blogs")?).json(input);
        self.execute(req).await
    }

    /// Replace a blog post's title and content
    pub async fn update_blog(&self, id: i64, input: &BlogInput) -> ApiResult<BlogPost> {
        let req = self
            .request(Method::PUT, self.url(&format!("/blogs/{id}"))?)
            .json(input);
        self.execute(req).await
    }

    /// Delete a blog post
    pub async fn delete_blog(&self, id: i64) -> ApiResult<()> {
        let req = self.request(Method::DELETE, self.url(&format!("/blogs/{id}"))?);
        self.execute_empty(req).await
    }
}
