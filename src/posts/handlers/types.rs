/**
 * Post Handler Types
 *
 * Request/response types for the post endpoints. Responses always carry
 * the author expanded to their public summary, the way clients render a
 * feed entry without a second lookup.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;
use crate::posts::db::PostWithAuthor;

/// Create request: content required (checked by the handler), image
/// optional.
#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub content: Option<String>,
    pub image: Option<String>,
}

/// Update request. A missing `content` keeps the old text; a missing
/// `image` keeps the old reference, while an explicit empty string clears
/// it.
#[derive(Debug, Deserialize)]
pub struct UpdatePostRequest {
    pub content: Option<String>,
    pub image: Option<String>,
}

/// The author slice embedded in post responses.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorSummary {
    pub id: String,
    pub username: String,
    pub profile_picture: String,
}

/// A post as returned to clients.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: String,
    pub author: AuthorSummary,
    pub content: String,
    pub image: String,
    pub likes: Vec<String>,
    pub comments_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PostWithAuthor> for PostResponse {
    fn from(row: PostWithAuthor) -> Self {
        let likes = serde_json::from_str(&row.likes).unwrap_or_default();
        Self {
            id: row.id,
            author: AuthorSummary {
                id: row.author_id,
                username: row.author_username,
                profile_picture: row.author_profile_picture,
            },
            content: row.content,
            image: row.image,
            likes,
            comments_count: row.comments_count,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Envelope for single-post responses.
#[derive(Debug, Serialize)]
pub struct PostEnvelope {
    pub message: String,
    pub post: PostResponse,
}

/// Envelope for the feed.
#[derive(Debug, Serialize)]
pub struct PostListEnvelope {
    pub message: String,
    pub posts: Vec<PostResponse>,
}

/// Bare confirmation, used by delete.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Check the path id is a well-formed store id before any store access.
pub(crate) fn parse_post_id(raw: &str) -> Result<String, ApiError> {
    Uuid::parse_str(raw)
        .map(|id| id.to_string())
        .map_err(|_| ApiError::validation("Invalid post ID format"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_post_id() {
        let id = Uuid::new_v4().to_string();
        assert_eq!(parse_post_id(&id).unwrap(), id);

        assert!(parse_post_id("abc").is_err());
        assert!(parse_post_id("").is_err());
        assert!(parse_post_id("12345678-not-a-uuid").is_err());
    }

    #[test]
    fn test_likes_fall_back_to_empty_on_bad_json() {
        let row = PostWithAuthor {
            id: "p".into(),
            author_id: "a".into(),
            content: "hello".into(),
            image: String::new(),
            likes: "corrupt".into(),
            comments_count: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            author_username: "alice".into(),
            author_profile_picture: "pic".into(),
        };
        let response = PostResponse::from(row);
        assert!(response.likes.is_empty());
    }
}
