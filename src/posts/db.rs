/**
 * Post Model and Database Operations
 *
 * Rows for short text posts. Reads that feed responses join the author's
 * public fields in one query, standing in for a second lookup per post.
 *
 * likes is a JSON array of user ids and comments_count a denormalized
 * counter; both default and stay at their initial values because no
 * current endpoint writes them.
 */

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

/// A post as stored.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Post {
    /// Store-assigned UUID
    pub id: String,
    /// Creating user's id, immutable after insert
    pub author_id: String,
    /// Required, max length 500
    pub content: String,
    /// Image reference, default empty, clearable
    pub image: String,
    /// JSON array of liking user ids
    pub likes: String,
    pub comments_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A post joined with its author's public fields.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PostWithAuthor {
    pub id: String,
    pub author_id: String,
    pub content: String,
    pub image: String,
    pub likes: String,
    pub comments_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author_username: String,
    pub author_profile_picture: String,
}

/// Insert a new post for an author the gate has already resolved.
pub async fn create_post(
    pool: &SqlitePool,
    author_id: &str,
    content: &str,
    image: &str,
) -> Result<Post, sqlx::Error> {
    let id = Uuid::new_v4().to_string();
    let now = Utc::now();

    sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (id, author_id, content, image, likes, comments_count,
                           created_at, updated_at)
        VALUES (?1, ?2, ?3, ?4, '[]', 0, ?5, ?5)
        RETURNING id, author_id, content, image, likes, comments_count,
                  created_at, updated_at
        "#,
    )
    .bind(&id)
    .bind(author_id)
    .bind(content)
    .bind(image)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Fetch a post without author expansion, for ownership checks.
pub async fn get_post(pool: &SqlitePool, id: &str) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT id, author_id, content, image, likes, comments_count,
               created_at, updated_at
        FROM posts
        WHERE id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Fetch a post with its author's public fields joined in.
pub async fn get_post_with_author(
    pool: &SqlitePool,
    id: &str,
) -> Result<Option<PostWithAuthor>, sqlx::Error> {
    sqlx::query_as::<_, PostWithAuthor>(
        r#"
        SELECT p.id, p.author_id, p.content, p.image, p.likes, p.comments_count,
               p.created_at, p.updated_at,
               u.username AS author_username,
               u.profile_picture AS author_profile_picture
        FROM posts p
        JOIN users u ON u.id = p.author_id
        WHERE p.id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Every post, newest first, authors joined. Unbounded by design; the
/// feed has no pagination.
pub async fn list_posts(pool: &SqlitePool) -> Result<Vec<PostWithAuthor>, sqlx::Error> {
    sqlx::query_as::<_, PostWithAuthor>(
        r#"
        SELECT p.id, p.author_id, p.content, p.image, p.likes, p.comments_count,
               p.created_at, p.updated_at,
               u.username AS author_username,
               u.profile_picture AS author_profile_picture
        FROM posts p
        JOIN users u ON u.id = p.author_id
        ORDER BY p.created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Persist new content/image for a post. The handler has already merged
/// the request and checked ownership.
pub async fn update_post(
    pool: &SqlitePool,
    id: &str,
    content: &str,
    image: &str,
) -> Result<Post, sqlx::Error> {
    let now = Utc::now();

    sqlx::query_as::<_, Post>(
        r#"
        UPDATE posts
        SET content = ?1, image = ?2, updated_at = ?3
        WHERE id = ?4
        RETURNING id, author_id, content, image, likes, comments_count,
                  created_at, updated_at
        "#,
    )
    .bind(content)
    .bind(image)
    .bind(now)
    .bind(id)
    .fetch_one(pool)
    .await
}

/// Remove a post. Returns the number of rows deleted.
pub async fn delete_post(pool: &SqlitePool, id: &str) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM posts WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
