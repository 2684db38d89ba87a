//! Request bodies for the authentication endpoints.

use serde::Serialize;

/// Body of `POST /api/auth/login`.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Body of `POST /api/auth/signup`.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
    pub name: String,
}

/// Body of `POST /api/auth/google`: the identity token handed over by the
/// federated login widget, exchanged for a local session.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct GoogleAuthRequest {
    pub credential: String,
}
