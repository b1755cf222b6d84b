/**
 * Get Own Profile Handler
 *
 * GET /api/users/me
 *
 * The gate has already resolved the token; this handler re-reads the
 * record so a deletion between gate and lookup surfaces as 404 rather
 * than stale data.
 */

use axum::{extract::State, response::Json};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;
use crate::users::db::get_user_by_id;
use crate::users::handlers::types::ProfileResponse;

/// Get current user's profile, with follower/following counts.
///
/// # Errors
///
/// * `401` - gate rejection (missing/invalid token)
/// * `404` - record vanished between gate and lookup
/// * `500` - store fault
pub async fn get_profile(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
) -> Result<Json<ProfileResponse>, ApiError> {
    let user = get_user_by_id(&state.pool, &auth.user_id)
        .await
        .map_err(|e| {
            tracing::error!("Database error getting profile: {e:?}");
            ApiError::internal("Server error getting user profile")
        })?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(ProfileResponse::from(&user)))
}
