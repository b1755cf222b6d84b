/**
 * List Posts Handler
 *
 * GET /api/posts
 *
 * Public feed, newest first, authors expanded. Unbounded: the API has no
 * pagination, so this returns every post there is.
 */

use axum::{extract::State, response::Json};

use crate::error::ApiError;
use crate::posts::db;
use crate::posts::handlers::types::{PostListEnvelope, PostResponse};
use crate::server::state::AppState;

/// List every post, creation time descending.
pub async fn list_posts(
    State(state): State<AppState>,
) -> Result<Json<PostListEnvelope>, ApiError> {
    let posts = db::list_posts(&state.pool).await.map_err(|e| {
        tracing::error!("Failed to list posts: {e:?}");
        ApiError::internal("Server error fetching posts")
    })?;

    Ok(Json(PostListEnvelope {
        message: "Posts fetched successfully".to_string(),
        posts: posts.into_iter().map(PostResponse::from).collect(),
    }))
}
