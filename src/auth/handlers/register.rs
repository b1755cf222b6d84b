/**
 * Registration Handler
 *
 * POST /api/auth/register
 *
 * # Registration Process
 *
 * 1. Presence check on username, email, password
 * 2. Format checks (username length, email shape, password length)
 * 3. Uniqueness check on email and username
 * 4. bcrypt-hash the password, insert the record
 * 5. Issue a bearer token for the new id
 *
 * # Security
 *
 * - Passwords are hashed with bcrypt at cost 10
 * - The hash never appears in any response
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::auth::handlers::types::{
    is_valid_email, provided, AuthResponse, RegisterRequest, UserResponse,
};
use crate::auth::sessions::create_token;
use crate::error::ApiError;
use crate::server::state::AppState;
use crate::users::db::{create_user, get_user_by_email, get_user_by_username};

/// Hashing cost for stored passwords.
const BCRYPT_COST: u32 = 10;

/// Minimum username length, matching the user schema.
const USERNAME_MIN_LEN: usize = 3;

/// Minimum plaintext password length.
const PASSWORD_MIN_LEN: usize = 6;

/// Register handler
///
/// Creates a user account and returns a token for immediate use.
///
/// # Errors
///
/// * `400` - missing fields, format violations, or a duplicate
///   email/username
/// * `500` - hashing, store, or token failure
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let (Some(username), Some(email), Some(password)) = (
        provided(&request.username),
        provided(&request.email),
        provided(&request.password),
    ) else {
        return Err(ApiError::validation("Please enter all fields"));
    };

    // Emails are stored and matched lowercased.
    let email = email.to_lowercase();

    if username.chars().count() < USERNAME_MIN_LEN {
        return Err(ApiError::validation("Username must be at least 3 characters"));
    }
    if !is_valid_email(&email) {
        return Err(ApiError::validation("Please fill a valid email address"));
    }
    if password.chars().count() < PASSWORD_MIN_LEN {
        return Err(ApiError::validation("Password must be at least 6 characters"));
    }

    let email_taken = get_user_by_email(&state.pool, &email)
        .await
        .map_err(|e| {
            tracing::error!("Database error checking email: {e:?}");
            ApiError::internal("Server error during registration")
        })?
        .is_some();
    if email_taken {
        tracing::warn!("Registration rejected, email already in use: {email}");
        return Err(ApiError::conflict("Email already in use"));
    }

    let username_taken = get_user_by_username(&state.pool, username)
        .await
        .map_err(|e| {
            tracing::error!("Database error checking username: {e:?}");
            ApiError::internal("Server error during registration")
        })?
        .is_some();
    if username_taken {
        tracing::warn!("Registration rejected, username already in use: {username}");
        return Err(ApiError::conflict("Username already in use"));
    }

    let password_hash = bcrypt::hash(password, BCRYPT_COST).map_err(|e| {
        tracing::error!("Failed to hash password: {e:?}");
        ApiError::internal("Server error during registration")
    })?;

    let user = create_user(&state.pool, username, &email, &password_hash)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create user: {e:?}");
            ApiError::internal("Server error during registration")
        })?;

    let token = create_token(&state.config.jwt_secret, &user.id).map_err(|e| {
        tracing::error!("Failed to create token: {e:?}");
        ApiError::internal("Server error during registration")
    })?;

    tracing::info!("User registered: {} ({})", user.username, user.email);

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "User registered successfully".to_string(),
            token,
            user: UserResponse::from(&user),
        }),
    ))
}
