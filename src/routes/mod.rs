//! Route Configuration Module
//!
//! The full HTTP surface:
//!
//! | Method | Path               | Auth   |
//! |--------|--------------------|--------|
//! | GET    | /                  | none   |
//! | POST   | /api/auth/register | none   |
//! | POST   | /api/auth/login    | none   |
//! | GET    | /api/users/me      | bearer |
//! | PUT    | /api/users/me      | bearer |
//! | POST   | /api/posts         | bearer |
//! | GET    | /api/posts         | none   |
//! | GET    | /api/posts/{id}    | none   |
//! | PUT    | /api/posts/{id}    | bearer |
//! | DELETE | /api/posts/{id}    | bearer |
//!
//! Bearer routes are the ones whose handlers take an
//! [`crate::middleware::auth::AuthUser`] parameter.

/// Main router creation
pub mod router;

pub use router::create_router;
