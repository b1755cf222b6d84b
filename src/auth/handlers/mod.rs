//! Authentication Handlers Module
//!
//! HTTP handlers for the public auth endpoints.
//!
//! # Handlers
//!
//! - **`register`** - POST /api/auth/register - account creation
//! - **`login`** - POST /api/auth/login - credential check + token
//!
//! Request bodies use `Option` fields so that an absent field produces the
//! API's own 400 (`"Please enter all fields"`) instead of a deserialization
//! rejection; shared presence/format helpers live in [`types`].

/// Request and response types, plus field validation helpers
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

pub use login::login;
pub use register::register;
pub use types::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};
