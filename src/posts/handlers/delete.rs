/**
 * Delete Post Handler
 *
 * DELETE /api/posts/{id}
 *
 * Owner-only. The record is gone after this; there is no soft delete.
 */

use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::posts::db;
use crate::posts::handlers::types::{parse_post_id, MessageResponse};
use crate::server::state::AppState;

/// Delete a post.
///
/// # Errors
///
/// * `400` - malformed id
/// * `401` - gate rejection
/// * `403` - requester is not the post's author
/// * `404` - no such post
/// * `500` - store fault
pub async fn delete_post(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_post_id(&id)?;

    let post = db::get_post(&state.pool, &id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch post {id}: {e:?}");
            ApiError::internal("Server error deleting post")
        })?
        .ok_or_else(|| ApiError::NotFound("Post not found".to_string()))?;

    if post.author_id != auth.user_id {
        tracing::warn!(
            "User {} attempted to delete post {} owned by {}",
            auth.user_id,
            post.id,
            post.author_id
        );
        return Err(ApiError::Unauthorized(
            "Not authorized to delete this post".to_string(),
        ));
    }

    db::delete_post(&state.pool, &id).await.map_err(|e| {
        tracing::error!("Failed to delete post {id}: {e:?}");
        ApiError::internal("Server error deleting post")
    })?;

    tracing::info!("Post deleted: {id}");

    Ok(Json(MessageResponse {
        message: "Post deleted successfully".to_string(),
    }))
}
