//! Profile Handlers Module
//!
//! Handlers for the authenticated user's own profile.
//!
//! # Handlers
//!
//! - **`me`** - GET /api/users/me - profile with follower/following counts
//! - **`update`** - PUT /api/users/me - partial profile update with
//!   uniqueness re-checks

/// Request and response types
pub mod types;

/// Get own profile handler
pub mod me;

/// Update own profile handler
pub mod update;

pub use me::get_profile;
pub use types::{ProfileResponse, ProfileUpdateResponse, UpdateProfileRequest};
pub use update::update_profile;
