use crate::{Navigator, Route};

use blog_api::ApiClient;
use blog_core::RegisterRequest;
use blog_core::messages::{REGISTER_FAILED, REGISTER_FIELDS_REQUIRED};

use log::info;

/// Account creation form. A successful registration does not sign in; it
/// sends the user to the login form.
pub struct RegisterView {
    api: ApiClient,
    pub username: String,
    pub email: String,
    pub password: String,
    pub error: Option<String>,
    pub loading: bool,
}

impl RegisterView {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            username: String::new(),
            email: String::new(),
            password: String::new(),
            error: None,
            loading: false,
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.loading { "Creating..." } else { "Register" }
    }

    pub async fn submit(&mut self, navigator: &dyn Navigator) -> bool {
        self.error = None;

        if self.username.is_empty() || self.email.is_empty() || self.password.is_empty() {
            self.error = Some(REGISTER_FIELDS_REQUIRED.to_string());
            return false;
        }

        let request = RegisterRequest {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        };

        self.loading = true;
        let result = self.api.register(&request).await;
        self.loading = false;

        match result {
            Ok(()) => {
                info!("Registered {}", self.username);
                navigator.navigate(Route::Login);
                true
            }
            Err(e) => {
                info!("Registration failed: {e}");
                self.error = Some(e.detail_or(REGISTER_FAILED));
                false
            }
        }
    }
}
