/**
 * Server Initialization
 *
 * Assembles the application from its parts. The pool is created by the
 * caller: `main` treats a connection failure as fatal, while the
 * integration tests inject an in-memory pool.
 */

use axum::Router;
use sqlx::SqlitePool;

use crate::routes::router::create_router;
use crate::server::config::AppConfig;
use crate::server::state::AppState;

/// Build the Axum application.
///
/// # Arguments
///
/// * `config` - configuration snapshot taken at startup
/// * `pool` - connected, migrated database pool
///
/// # Returns
///
/// Configured `Router` ready to serve requests.
pub fn create_app(config: AppConfig, pool: SqlitePool) -> Router {
    tracing::info!("Initializing ripple backend");

    let state = AppState::new(config, pool);
    create_router(state)
}
