//! Posts Module
//!
//! The content store and the post endpoints.
//!
//! # Architecture
//!
//! - **`db`** - post row model, author-joined reads, single-row writes
//! - **`handlers`** - create/list/get/update/delete
//!
//! Posts belong to their author via `author_id`; update and delete are
//! owner-only, enforced in the handlers with a single equality check.

/// Post model and database operations
pub mod db;

/// HTTP handlers for post endpoints
pub mod handlers;

pub use handlers::{create_post, delete_post, get_post_by_id, list_posts, update_post};
