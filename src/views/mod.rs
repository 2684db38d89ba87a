//! Per-view state machines.
//!
//! Each view owns its state in an explicit struct; methods are the only
//! transitions, and anything the host must act on (navigation, timed banner
//! clearing, alerts) is returned as a [`crate::navigation::Effect`].
//! Failures never escape a view: they become inline banners, mirroring the
//! error taxonomy of the backend.

pub mod create;
pub mod login;
pub mod register;
pub mod restaurants;

pub use create::CreateView;
pub use login::LoginView;
pub use register::RegisterView;
pub use restaurants::RestaurantsView;
