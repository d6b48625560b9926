//! Request middleware.

pub mod auth;

pub use auth::{session_check, CurrentAccount};
