//! Ripple - Main Library
//!
//! Ripple is a minimal social-network backend built on Axum: user
//! registration and login with JWT bearer tokens, profile management, and
//! CRUD on short text posts, persisted through sqlx.
//!
//! # Module Structure
//!
//! - **`server`** - Configuration, application state, and app assembly
//! - **`routes`** - HTTP route table
//! - **`middleware`** - The authentication gate
//! - **`auth`** - Token service and register/login handlers
//! - **`users`** - User store and profile handlers
//! - **`posts`** - Post store and post handlers
//! - **`error`** - The API error taxonomy and its HTTP conversion
//!
//! # Request Flow
//!
//! HTTP request → auth gate (where required) → handler → single-row store
//! read/write → JSON response. There is no shared mutable state outside the
//! database pool, and no cross-row transaction anywhere.

/// Configuration, state, and app assembly
pub mod server;

/// HTTP route table
pub mod routes;

/// Authentication gate
pub mod middleware;

/// Token service and authentication handlers
pub mod auth;

/// User store and profile handlers
pub mod users;

/// Post store and post handlers
pub mod posts;

/// API error taxonomy
pub mod error;
