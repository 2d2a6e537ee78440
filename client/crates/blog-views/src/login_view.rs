use crate::{Navigator, Route};

use blog_api::ApiClient;
use blog_core::messages::{LOGIN_FAILED, LOGIN_FIELDS_REQUIRED, SESSION_SAVE_FAILED};
use blog_session::Session;

use log::{error, info};

/// Email/password sign-in form.
pub struct LoginView {
    api: ApiClient,
    session: Session,
    pub email: String,
    pub password: String,
    pub error: Option<String>,
    pub loading: bool,
}

impl LoginView {
    pub fn new(api: ApiClient, session: Session) -> Self {
        Self {
            api,
            session,
            email: String::new(),
            password: String::new(),
            error: None,
            loading: false,
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.loading { "Logging in..." } else { "Login" }
    }

    /// Submit the form. On success the credential is stored, the session
    /// signals the change and the navigator is sent home.
    ///
    /// Returns true when the user ended up signed in.
    pub async fn submit(&mut self, navigator: &dyn Navigator) -> bool {
        self.error = None;

        if self.email.is_empty() || self.password.is_empty() {
            self.error = Some(LOGIN_FIELDS_REQUIRED.to_string());
            return false;
        }

        self.loading = true;
        let result = self.api.login(&self.email, &self.password).await;
        self.loading = false;

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                info!("Login failed: {e}");
                self.error = Some(e.detail_or(LOGIN_FAILED));
                return false;
            }
        };

        if let Err(e) = self.session.set_credential(&response.access_token) {
            error!("Failed to persist credential: {e}");
            self.error = Some(SESSION_SAVE_FAILED.to_string());
            return false;
        }

        info!("Logged in as {}", self.email);
        navigator.navigate(Route::Home);
        true
    }
}
