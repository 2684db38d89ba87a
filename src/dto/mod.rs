//! Wire payloads exchanged with the backend REST API.

pub mod auth;
pub mod restaurant;
