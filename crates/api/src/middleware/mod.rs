//! HTTP middleware: the authentication and authorization gate.

pub mod auth;

pub use auth::{RequireAdmin, RequireAuth, SESSION_COOKIE_NAME};
