//! Middleware module
//!
//! Cross-cutting checks applied before handlers act.

pub mod auth;

pub use auth::AuthMiddleware;
