/**
 * Get Post Handler
 *
 * GET /api/posts/{id}
 *
 * Public. The id shape is checked before the store is touched, so a
 * malformed id never costs a query.
 */

use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::error::ApiError;
use crate::posts::db;
use crate::posts::handlers::types::{parse_post_id, PostEnvelope, PostResponse};
use crate::server::state::AppState;

/// Fetch one post by id, author expanded.
///
/// # Errors
///
/// * `400` - id is not a well-formed store id
/// * `404` - no such post
/// * `500` - store fault
pub async fn get_post_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PostEnvelope>, ApiError> {
    let id = parse_post_id(&id)?;

    let post = db::get_post_with_author(&state.pool, &id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch post {id}: {e:?}");
            ApiError::internal("Server error fetching post")
        })?
        .ok_or_else(|| ApiError::NotFound("Post not found".to_string()))?;

    Ok(Json(PostEnvelope {
        message: "Post fetched successfully".to_string(),
        post: PostResponse::from(post),
    }))
}
