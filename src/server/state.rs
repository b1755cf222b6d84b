/**
 * Application State Management
 *
 * Defines the application state container and the `FromRef` impls that let
 * handlers extract just the part they need.
 *
 * # Thread Safety
 *
 * `SqlitePool` is internally reference-counted and `AppConfig` sits behind
 * an `Arc`, so cloning the state per request is cheap. There is no other
 * shared mutable state; every record lives in the store.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::server::config::AppConfig;

/// Central state container handed to the router.
///
/// # Fields
///
/// * `pool` - database connection pool, the only I/O resource
/// * `config` - immutable process configuration (signing secret etc.)
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub pool: SqlitePool,
    /// Process configuration snapshot
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig, pool: SqlitePool) -> Self {
        Self {
            pool,
            config: Arc::new(config),
        }
    }
}

/// Lets handlers that only touch the store take `State<SqlitePool>`.
impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.pool.clone()
    }
}

/// Lets handlers that only need configuration take `State<Arc<AppConfig>>`.
impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
