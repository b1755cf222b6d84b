//! Server Module
//!
//! Everything needed to stand the HTTP server up: configuration loading,
//! the shared application state, and app assembly.
//!
//! # Architecture
//!
//! - **`config`** - `AppConfig` (environment snapshot taken once at startup)
//!   and database pool creation
//! - **`state`** - `AppState` and its `FromRef` implementations
//! - **`init`** - `create_app`, shared by `main` and the integration tests
//!
//! # Initialization Flow
//!
//! 1. `AppConfig::from_env()` snapshots `DATABASE_URL`, `JWT_SECRET`, `PORT`
//! 2. `connect_database` opens the pool and runs migrations; a failure here
//!    is fatal to the process
//! 3. `create_app` wires state and routes into an Axum `Router`

/// Configuration loading and database connection
pub mod config;

/// Application state and FromRef implementations
pub mod state;

/// App assembly
pub mod init;

pub use config::AppConfig;
pub use init::create_app;
pub use state::AppState;
