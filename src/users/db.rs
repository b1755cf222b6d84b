/**
 * User Model and Database Operations
 *
 * The credential-store row model and the single-row queries the handlers
 * use. Usernames arrive trimmed and emails trimmed + lowercased; this
 * layer stores what it is given.
 *
 * followers/following are JSON arrays of user ids kept document-style in
 * text columns. No operation writes them; only their lengths are read.
 */

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

/// Avatar used until a user sets their own picture.
pub const DEFAULT_PROFILE_PICTURE: &str =
    "https://placehold.co/150x150/cccccc/ffffff?text=Avatar";

/// A user record as stored.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Store-assigned UUID, immutable
    pub id: String,
    /// Globally unique, min length 3
    pub username: String,
    /// Globally unique, stored lowercased
    pub email: String,
    /// bcrypt hash; never serialized into a response
    pub password_hash: String,
    pub profile_picture: String,
    /// Max length 200, default empty
    pub bio: String,
    /// JSON array of follower user ids
    pub followers: String,
    /// JSON array of followed user ids
    pub following: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn followers_count(&self) -> usize {
        id_list_len(&self.followers)
    }

    pub fn following_count(&self) -> usize {
        id_list_len(&self.following)
    }
}

fn id_list_len(raw: &str) -> usize {
    serde_json::from_str::<Vec<String>>(raw)
        .map(|ids| ids.len())
        .unwrap_or(0)
}

/// Insert a new user and return the stored record.
pub async fn create_user(
    pool: &SqlitePool,
    username: &str,
    email: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    let id = Uuid::new_v4().to_string();
    let now = Utc::now();

    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, username, email, password_hash, profile_picture, bio,
                           followers, following, created_at, updated_at)
        VALUES (?1, ?2, ?3, ?4, ?5, '', '[]', '[]', ?6, ?6)
        RETURNING id, username, email, password_hash, profile_picture, bio,
                  followers, following, created_at, updated_at
        "#,
    )
    .bind(&id)
    .bind(username)
    .bind(email)
    .bind(password_hash)
    .bind(DEFAULT_PROFILE_PICTURE)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Get a user by email. Emails are stored lowercased, so callers
/// lowercase before calling.
pub async fn get_user_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, email, password_hash, profile_picture, bio,
               followers, following, created_at, updated_at
        FROM users
        WHERE email = ?1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

/// Get a user by username.
pub async fn get_user_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, email, password_hash, profile_picture, bio,
               followers, following, created_at, updated_at
        FROM users
        WHERE username = ?1
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await
}

/// Get a user by id.
pub async fn get_user_by_id(pool: &SqlitePool, id: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, email, password_hash, profile_picture, bio,
               followers, following, created_at, updated_at
        FROM users
        WHERE id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Persist the profile fields. The handler has already merged the request
/// into the stored record and re-checked uniqueness; this is one write.
pub async fn update_profile(
    pool: &SqlitePool,
    id: &str,
    username: &str,
    email: &str,
    profile_picture: &str,
    bio: &str,
) -> Result<User, sqlx::Error> {
    let now = Utc::now();

    sqlx::query_as::<_, User>(
        r#"
        UPDATE users
        SET username = ?1, email = ?2, profile_picture = ?3, bio = ?4, updated_at = ?5
        WHERE id = ?6
        RETURNING id, username, email, password_hash, profile_picture, bio,
                  followers, following, created_at, updated_at
        "#,
    )
    .bind(username)
    .bind(email)
    .bind(profile_picture)
    .bind(bio)
    .bind(now)
    .bind(id)
    .fetch_one(pool)
    .await
}
