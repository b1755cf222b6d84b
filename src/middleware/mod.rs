//! Middleware Module
//!
//! Request-level gating applied before handlers run.
//!
//! - **`auth`** - the bearer-token authentication gate

pub mod auth;

pub use auth::{AuthUser, AuthenticatedUser};
