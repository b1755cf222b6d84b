/**
 * Profile Handler Types
 */

use serde::{Deserialize, Serialize};

use crate::auth::handlers::types::UserResponse;
use crate::users::db::User;

/// Own-profile view: public fields plus relationship counts. The counts
/// are lengths only; follower contents are never exposed here.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub profile_picture: String,
    pub bio: String,
    pub followers: usize,
    pub following: usize,
}

impl From<&User> for ProfileResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            profile_picture: user.profile_picture.clone(),
            bio: user.bio.clone(),
            followers: user.followers_count(),
            following: user.following_count(),
        }
    }
}

/// Partial update: every field optional, blank treated as not provided.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub profile_picture: Option<String>,
    pub bio: Option<String>,
}

/// Confirmation envelope for a successful update.
#[derive(Debug, Serialize)]
pub struct ProfileUpdateResponse {
    pub message: String,
    pub user: UserResponse,
}
