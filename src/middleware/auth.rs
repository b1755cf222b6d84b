/**
 * Authentication Gate
 *
 * Protects routes that require a logged-in user. The gate is an Axum
 * extractor so public and protected methods can share a path (`GET
 * /api/posts` is open, `POST /api/posts` is not); a handler opts in by
 * taking an `AuthUser` parameter.
 *
 * # Per-request state machine
 *
 * 1. No `Authorization` header, or one not shaped `Bearer <token>` →
 *    401 "Not authorized, no token"
 * 2. Token fails verification (signature, shape, expiry) →
 *    401 "Not authorized, token failed"
 * 3. Token verifies but its subject is not a well-formed store id →
 *    401 "Not authorized, token failed"
 * 4. Token verifies but the user record no longer exists →
 *    401 "Not authorized, token failed"
 * 5. Otherwise the resolved user's id is attached and the handler runs
 *
 * Step 4 is a deliberate tightening: a deleted account must not keep
 * acting through tokens issued before the deletion.
 */

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use uuid::Uuid;

use crate::auth::sessions::verify_token;
use crate::error::ApiError;
use crate::server::state::AppState;
use crate::users::db::get_user_by_id;

/// Identity attached to a request after the gate passes.
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    /// Id of the resolved user record
    pub user_id: String,
}

/// Extractor form of the gate.
///
/// ```ignore
/// async fn create_post(AuthUser(user): AuthUser, ...) -> ... {
///     // user.user_id is a verified, existing user
/// }
/// ```
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| {
                tracing::warn!("Missing Authorization header");
                ApiError::Unauthenticated("Not authorized, no token".to_string())
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            tracing::warn!("Malformed Authorization header");
            ApiError::Unauthenticated("Not authorized, no token".to_string())
        })?;

        let claims = verify_token(&state.config.jwt_secret, token).map_err(|e| {
            tracing::warn!("Token verification failed: {e:?}");
            ApiError::Unauthenticated("Not authorized, token failed".to_string())
        })?;

        // The subject must be a well-formed store id before we touch the
        // store with it.
        let user_id = Uuid::parse_str(&claims.sub).map_err(|e| {
            tracing::warn!("Token subject is not a valid id: {e:?}");
            ApiError::Unauthenticated("Not authorized, token failed".to_string())
        })?;

        let user = get_user_by_id(&state.pool, &user_id.to_string())
            .await
            .map_err(|e| {
                tracing::error!("Database error resolving token user: {e:?}");
                ApiError::internal("Server error during authentication")
            })?
            .ok_or_else(|| {
                tracing::warn!("Token user no longer exists: {user_id}");
                ApiError::Unauthenticated("Not authorized, token failed".to_string())
            })?;

        Ok(AuthUser(AuthenticatedUser { user_id: user.id }))
    }
}
