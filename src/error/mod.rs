//! API Error Module
//!
//! This module defines the error taxonomy shared by every handler and its
//! conversion to HTTP responses.
//!
//! # Architecture
//!
//! - **`types`** - The `ApiError` enum and its status-code mapping
//! - **`conversion`** - `IntoResponse` implementation
//!
//! Every error surfaces to the caller as a `{"message": string}` JSON body
//! with the status carrying the category; there is no machine-readable
//! error code, so clients match on status plus message text.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::ApiError;
