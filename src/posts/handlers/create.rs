/**
 * Create Post Handler
 *
 * POST /api/posts
 *
 * The author is always the authenticated requester; there is no way to
 * post on someone else's behalf.
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::auth::handlers::types::provided;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::posts::db;
use crate::posts::handlers::types::{CreatePostRequest, PostEnvelope, PostResponse};
use crate::server::state::AppState;

/// Maximum post content length, matching the post schema.
pub(crate) const CONTENT_MAX_LEN: usize = 500;

/// Create a post.
///
/// # Errors
///
/// * `400` - content missing or over the length limit
/// * `401` - gate rejection
/// * `500` - store fault
pub async fn create_post(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
    Json(request): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<PostEnvelope>), ApiError> {
    let Some(content) = provided(&request.content) else {
        return Err(ApiError::validation("Post content is required"));
    };
    if content.chars().count() > CONTENT_MAX_LEN {
        return Err(ApiError::validation("Post content must be at most 500 characters"));
    }

    let image = request.image.as_deref().unwrap_or("");

    let post = db::create_post(&state.pool, &auth.user_id, content, image)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create post: {e:?}");
            ApiError::internal("Server error creating post")
        })?;

    // Re-read with the author joined; the row was just written, so an
    // absence here is a store fault, not a client error.
    let populated = db::get_post_with_author(&state.pool, &post.id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load created post: {e:?}");
            ApiError::internal("Server error creating post")
        })?
        .ok_or_else(|| ApiError::internal("Server error creating post"))?;

    tracing::info!("Post created: {} by {}", post.id, auth.user_id);

    Ok((
        StatusCode::CREATED,
        Json(PostEnvelope {
            message: "Post created successfully".to_string(),
            post: PostResponse::from(populated),
        }),
    ))
}
