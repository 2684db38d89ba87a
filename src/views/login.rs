use log::{error, info};
use validator::Validate;

use crate::api::AuthApi;
use crate::dto::auth::{GoogleAuthRequest, LoginRequest};
use crate::forms::auth::LoginForm;
use crate::navigation::{Effect, Route};

const LOGIN_FALLBACK: &str = "Login failed. Please try again.";

/// Credential form state for the login view.
#[derive(Debug, Default)]
pub struct LoginView {
    pub form: LoginForm,
    pub error: Option<String>,
    pub submitting: bool,
}

impl LoginView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submits the credentials; success navigates to the restaurant list,
    /// failure surfaces the backend's message and returns to idle.
    pub async fn submit<A>(&mut self, api: &A) -> Option<Effect>
    where
        A: AuthApi + ?Sized,
    {
        self.error = None;

        if self.form.validate().is_err() {
            self.error = Some("Username and password are required.".to_string());
            return None;
        }

        self.submitting = true;
        let request = LoginRequest::from(&self.form);
        let result = api.login(&request).await;
        self.submitting = false;

        match result {
            Ok(()) => {
                info!("Login successful for {}", request.username);
                Some(Effect::Navigate(Route::Restaurants))
            }
            Err(err) => {
                error!("Login error: {err}");
                self.error = Some(err.display_message(LOGIN_FALLBACK));
                None
            }
        }
    }

    /// Exchanges a federated identity token for a session. Failure surfaces
    /// as a blocking alert rather than an inline banner.
    pub async fn google_sign_in<A>(&mut self, api: &A, credential: &str) -> Option<Effect>
    where
        A: AuthApi + ?Sized,
    {
        let request = GoogleAuthRequest {
            credential: credential.to_string(),
        };
        match api.google_login(&request).await {
            Ok(()) => {
                info!("Google login successful");
                Some(Effect::Navigate(Route::Restaurants))
            }
            Err(err) => {
                error!("Google login error: {err}");
                Some(Effect::Alert(format!(
                    "Google login failed: {}",
                    err.display_message("Google Login Failed")
                )))
            }
        }
    }
}
