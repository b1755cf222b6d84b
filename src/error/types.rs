/**
 * API Error Types
 *
 * This module defines the error taxonomy used by all HTTP handlers.
 *
 * # Categories
 *
 * - `Validation` - missing or malformed input (400)
 * - `Conflict` - duplicate unique field (400, matching the API contract,
 *   which never uses 409)
 * - `Unauthenticated` - missing, invalid, or expired token (401)
 * - `Unauthorized` - authenticated but not the resource owner (403)
 * - `NotFound` - no matching record (404)
 * - `Internal` - unexpected store or runtime fault (500)
 *
 * Store faults are logged at the call site with `tracing::error!`; the
 * message carried here is the generic, operation-specific text the caller
 * sees.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Errors returned by API handlers.
///
/// Each variant carries the human-readable message that becomes the JSON
/// response body. Construction happens at the handler layer, which decides
/// the category; this type only maps categories to status codes.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed input
    #[error("{0}")]
    Validation(String),

    /// Duplicate value for a unique field
    #[error("{0}")]
    Conflict(String),

    /// Missing, invalid, or expired credentials
    #[error("{0}")]
    Unauthenticated(String),

    /// Authenticated, but not the owner of the resource
    #[error("{0}")]
    Unauthorized(String),

    /// No matching record
    #[error("{0}")]
    NotFound(String),

    /// Unexpected store or runtime fault
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Convenience constructor for validation failures.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Convenience constructor for unique-field conflicts.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    /// Convenience constructor for store/runtime faults.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// The HTTP status code for this error.
    ///
    /// # Status Code Mapping
    ///
    /// - `Validation` / `Conflict` - 400 Bad Request
    /// - `Unauthenticated` - 401 Unauthorized
    /// - `Unauthorized` - 403 Forbidden
    /// - `NotFound` - 404 Not Found
    /// - `Internal` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Conflict(_) => StatusCode::BAD_REQUEST,
            Self::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            Self::Unauthorized(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message shown to the caller.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(m)
            | Self::Conflict(m)
            | Self::Unauthenticated(m)
            | Self::Unauthorized(m)
            | Self::NotFound(m)
            | Self::Internal(m) => m,
        }
    }
}
