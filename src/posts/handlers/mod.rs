//! Post Handlers Module
//!
//! # Handlers
//!
//! - **`create`** - POST /api/posts (authenticated)
//! - **`list`** - GET /api/posts (public, newest first)
//! - **`get`** - GET /api/posts/{id} (public)
//! - **`update`** - PUT /api/posts/{id} (owner only)
//! - **`delete`** - DELETE /api/posts/{id} (owner only)
//!
//! Every by-id handler validates the path id shape before touching the
//! store; a malformed id is a 400, a missing record a 404.

/// Request and response types, plus the path-id check
pub mod types;

/// Create post handler
pub mod create;

/// List posts handler
pub mod list;

/// Get post by id handler
pub mod get;

/// Update post handler
pub mod update;

/// Delete post handler
pub mod delete;

pub use create::create_post;
pub use delete::delete_post;
pub use get::get_post_by_id;
pub use list::list_posts;
pub use types::{CreatePostRequest, PostResponse, UpdatePostRequest};
pub use update::update_post;
