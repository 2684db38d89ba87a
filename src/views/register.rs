use log::{error, info};
use validator::Validate;

use crate::api::AuthApi;
use crate::dto::auth::SignupRequest;
use crate::forms::auth::RegisterForm;
use crate::navigation::{Effect, REGISTER_REDIRECT_DELAY, Route};

const REGISTER_FALLBACK: &str = "Registration failed. Please try again.";

/// Form state for the registration view.
#[derive(Debug, Default)]
pub struct RegisterView {
    pub form: RegisterForm,
    pub error: Option<String>,
    pub success: Option<String>,
    pub submitting: bool,
}

impl RegisterView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Posts the registration. Success shows a banner and schedules the move
    /// to the login view.
    pub async fn submit<A>(&mut self, api: &A) -> Option<Effect>
    where
        A: AuthApi + ?Sized,
    {
        self.error = None;
        self.success = None;

        if self.form.validate().is_err() {
            self.error = Some("Username, password and name are required.".to_string());
            return None;
        }

        self.submitting = true;
        let request = SignupRequest::from(&self.form);
        let result = api.signup(&request).await;
        self.submitting = false;

        match result {
            Ok(()) => {
                info!("Registration successful for {}", request.username);
                self.success =
                    Some("Registration successful! Redirecting to login...".to_string());
                Some(Effect::NavigateAfter(Route::Login, REGISTER_REDIRECT_DELAY))
            }
            Err(err) => {
                error!("Registration error: {err}");
                self.error = Some(err.display_message(REGISTER_FALLBACK));
                None
            }
        }
    }
}
