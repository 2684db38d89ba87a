pub mod restaurant;
pub mod user;
