//! Administrative client for a restaurant directory backend.
//!
//! The crate owns two things: a typed, cookie-authenticated API layer over
//! the backend's REST endpoints, and the per-view state machines (login,
//! registration, restaurant list, record creation) that drive it. Rendering
//! is left to the host; the bundled binary is a small terminal runner.

pub mod api;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod models;
pub mod navigation;
pub mod views;
