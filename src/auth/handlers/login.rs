/**
 * Login Handler
 *
 * POST /api/auth/login
 *
 * Looks the user up by email, verifies the password against the stored
 * bcrypt hash, and issues a fresh one-hour token.
 *
 * The two failure modes are deliberately distinguishable by message text
 * (unknown email vs wrong password) while sharing the 400 status; that is
 * the API's published contract.
 */

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::{provided, AuthResponse, LoginRequest, UserResponse};
use crate::auth::sessions::create_token;
use crate::error::ApiError;
use crate::server::state::AppState;
use crate::users::db::get_user_by_email;

/// Login handler
///
/// # Errors
///
/// * `400` - missing fields, unknown email, or password mismatch
/// * `500` - store, hash-verify, or token failure
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let (Some(email), Some(password)) =
        (provided(&request.email), provided(&request.password))
    else {
        return Err(ApiError::validation("Please enter all fields"));
    };

    let email = email.to_lowercase();

    let user = get_user_by_email(&state.pool, &email)
        .await
        .map_err(|e| {
            tracing::error!("Database error during login: {e:?}");
            ApiError::internal("Server error during login")
        })?
        .ok_or_else(|| {
            tracing::warn!("Login failed, no user for email: {email}");
            ApiError::validation("Invalid credentials (user not found)")
        })?;

    let valid = bcrypt::verify(password, &user.password_hash).map_err(|e| {
        tracing::error!("Password verification error: {e:?}");
        ApiError::internal("Server error during login")
    })?;

    if !valid {
        tracing::warn!("Login failed, password mismatch for: {email}");
        return Err(ApiError::validation("Invalid credentials (password mismatch)"));
    }

    let token = create_token(&state.config.jwt_secret, &user.id).map_err(|e| {
        tracing::error!("Failed to create token: {e:?}");
        ApiError::internal("Server error during login")
    })?;

    tracing::info!("User logged in: {} ({})", user.username, user.email);

    Ok(Json(AuthResponse {
        message: "Logged in successfully".to_string(),
        token,
        user: UserResponse::from(&user),
    }))
}
