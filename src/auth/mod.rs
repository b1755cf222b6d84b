//! Authentication Module
//!
//! Registration, login, and bearer-token management.
//!
//! # Architecture
//!
//! - **`sessions`** - JWT creation and verification
//! - **`handlers`** - HTTP handlers for the auth endpoints
//!
//! # Authentication Flow
//!
//! 1. **Register**: unique username/email + password → user created →
//!    token returned
//! 2. **Login**: email + password verified against the stored hash →
//!    token returned
//! 3. Subsequent requests present the token as `Authorization: Bearer
//!    <token>`; the gate in [`crate::middleware::auth`] verifies it and
//!    resolves the user record
//!
//! # Security
//!
//! - Passwords are bcrypt-hashed before storage and never serialized into
//!   any response
//! - Tokens are HS256-signed and expire one hour after issuance; there is
//!   no refresh mechanism

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::types::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};
pub use handlers::{login::login, register::register};
