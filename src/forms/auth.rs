use serde::Deserialize;
use validator::Validate;

use crate::dto::auth::{LoginRequest, SignupRequest};

#[derive(Clone, Debug, Default, Deserialize, Validate)]
/// Form data for the login page.
pub struct LoginForm {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

impl From<&LoginForm> for LoginRequest {
    fn from(form: &LoginForm) -> Self {
        Self {
            username: form.username.trim().to_string(),
            password: form.password.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, Validate)]
/// Form data for the registration page.
pub struct RegisterForm {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
    /// Display name for the new account.
    #[validate(length(min = 1))]
    pub name: String,
}

impl From<&RegisterForm> for SignupRequest {
    fn from(form: &RegisterForm) -> Self {
        Self {
            username: form.username.trim().to_string(),
            password: form.password.clone(),
            name: form.name.trim().to_string(),
        }
    }
}
