/**
 * Router Configuration
 *
 * Builds the single Axum router for the whole API. Authentication is not
 * a layer here: protected handlers declare it themselves by taking an
 * `AuthUser` parameter, which lets `GET /api/posts` stay public while
 * `POST /api/posts` is gated on the same path.
 */

use axum::{
    http::StatusCode,
    routing::{get, post},
    Router,
};

use crate::auth::{login, register};
use crate::posts::{create_post, delete_post, get_post_by_id, list_posts, update_post};
use crate::server::state::AppState;
use crate::users::{get_profile, update_profile};

/// Create the router with every route configured.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/users/me", get(get_profile).put(update_profile))
        .route("/api/posts", get(list_posts).post(create_post))
        .route(
            "/api/posts/{id}",
            get(get_post_by_id).put(update_post).delete(delete_post),
        )
        .fallback(|| async { (StatusCode::NOT_FOUND, "Not Found") })
        .with_state(state)
}

/// Liveness probe kept from the original deployment.
async fn root() -> &'static str {
    "API is running..."
}
