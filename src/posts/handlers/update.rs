/**
 * Update Post Handler
 *
 * PUT /api/posts/{id}
 *
 * Owner-only. Content is replaced only when a non-empty value arrives;
 * the image is replaced whenever the field is present at all, so an
 * explicit empty string clears it.
 */

use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::auth::handlers::types::provided;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::posts::db;
use crate::posts::handlers::create::CONTENT_MAX_LEN;
use crate::posts::handlers::types::{parse_post_id, PostEnvelope, PostResponse, UpdatePostRequest};
use crate::server::state::AppState;

/// Update a post's content and/or image.
///
/// # Errors
///
/// * `400` - malformed id, or replacement content over the length limit
/// * `401` - gate rejection
/// * `403` - requester is not the post's author
/// * `404` - no such post
/// * `500` - store fault
pub async fn update_post(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
    Path(id): Path<String>,
    Json(request): Json<UpdatePostRequest>,
) -> Result<Json<PostEnvelope>, ApiError> {
    let id = parse_post_id(&id)?;

    let post = db::get_post(&state.pool, &id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch post {id}: {e:?}");
            ApiError::internal("Server error updating post")
        })?
        .ok_or_else(|| ApiError::NotFound("Post not found".to_string()))?;

    if post.author_id != auth.user_id {
        tracing::warn!(
            "User {} attempted to update post {} owned by {}",
            auth.user_id,
            post.id,
            post.author_id
        );
        return Err(ApiError::Unauthorized(
            "Not authorized to update this post".to_string(),
        ));
    }

    let content = match provided(&request.content) {
        Some(new_content) => {
            if new_content.chars().count() > CONTENT_MAX_LEN {
                return Err(ApiError::validation(
                    "Post content must be at most 500 characters",
                ));
            }
            new_content.to_string()
        }
        None => post.content.clone(),
    };

    // Unlike content, an explicitly supplied empty image clears it.
    let image = match &request.image {
        Some(new_image) => new_image.clone(),
        None => post.image.clone(),
    };

    db::update_post(&state.pool, &id, &content, &image)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update post {id}: {e:?}");
            ApiError::internal("Server error updating post")
        })?;

    let populated = db::get_post_with_author(&state.pool, &id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load updated post {id}: {e:?}");
            ApiError::internal("Server error updating post")
        })?
        .ok_or_else(|| ApiError::internal("Server error updating post"))?;

    tracing::info!("Post updated: {id}");

    Ok(Json(PostEnvelope {
        message: "Post updated successfully".to_string(),
        post: PostResponse::from(populated),
    }))
}
