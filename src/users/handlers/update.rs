/**
 * Update Own Profile Handler
 *
 * PUT /api/users/me
 *
 * # Update Process
 *
 * 1. Load the stored record (404 if it vanished)
 * 2. For each provided non-empty field, validate format and, for
 *    username/email, re-check uniqueness against *other* records
 * 3. Persist the merged record in one write
 *
 * Uniqueness is checked before anything is applied, so a conflict leaves
 * the stored record exactly as it was.
 */

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::{is_valid_email, provided, UserResponse};
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;
use crate::users::db::{get_user_by_email, get_user_by_id, get_user_by_username, update_profile as persist_profile};
use crate::users::handlers::types::{ProfileUpdateResponse, UpdateProfileRequest};

/// Maximum bio length, matching the user schema.
const BIO_MAX_LEN: usize = 200;

/// Update current user's profile.
///
/// # Errors
///
/// * `400` - format violation, or username/email already taken by another
///   user (the message names the conflicting field)
/// * `401` - gate rejection
/// * `404` - record vanished between gate and lookup
/// * `500` - store fault
pub async fn update_profile(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<ProfileUpdateResponse>, ApiError> {
    let user = get_user_by_id(&state.pool, &auth.user_id)
        .await
        .map_err(|e| {
            tracing::error!("Database error loading profile: {e:?}");
            ApiError::internal("Server error updating profile")
        })?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    let mut username = user.username.clone();
    let mut email = user.email.clone();
    let mut profile_picture = user.profile_picture.clone();
    let mut bio = user.bio.clone();

    if let Some(new_username) = provided(&request.username) {
        if new_username != user.username {
            if new_username.chars().count() < 3 {
                return Err(ApiError::validation("Username must be at least 3 characters"));
            }
            let taken = get_user_by_username(&state.pool, new_username)
                .await
                .map_err(|e| {
                    tracing::error!("Database error checking username: {e:?}");
                    ApiError::internal("Server error updating profile")
                })?
                .is_some_and(|other| other.id != user.id);
            if taken {
                return Err(ApiError::conflict("Username already in use by another user"));
            }
        }
        username = new_username.to_string();
    }

    if let Some(new_email) = provided(&request.email) {
        let new_email = new_email.to_lowercase();
        if new_email != user.email {
            if !is_valid_email(&new_email) {
                return Err(ApiError::validation("Please fill a valid email address"));
            }
            let taken = get_user_by_email(&state.pool, &new_email)
                .await
                .map_err(|e| {
                    tracing::error!("Database error checking email: {e:?}");
                    ApiError::internal("Server error updating profile")
                })?
                .is_some_and(|other| other.id != user.id);
            if taken {
                return Err(ApiError::conflict("Email already in use by another user"));
            }
        }
        email = new_email;
    }

    if let Some(new_picture) = provided(&request.profile_picture) {
        profile_picture = new_picture.to_string();
    }

    if let Some(new_bio) = provided(&request.bio) {
        if new_bio.chars().count() > BIO_MAX_LEN {
            return Err(ApiError::validation("Bio must be at most 200 characters"));
        }
        bio = new_bio.to_string();
    }

    let updated = persist_profile(&state.pool, &user.id, &username, &email, &profile_picture, &bio)
        .await
        .map_err(|e| {
            tracing::error!("Database error updating profile: {e:?}");
            ApiError::internal("Server error updating profile")
        })?;

    tracing::info!("Profile updated: {}", updated.id);

    Ok(Json(ProfileUpdateResponse {
        message: "Profile updated successfully".to_string(),
        user: UserResponse::from(&updated),
    }))
}
