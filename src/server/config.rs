/**
 * Server Configuration
 *
 * Loads process configuration once at startup into an explicit struct.
 * Nothing downstream reads the environment; every component that needs a
 * setting receives it through `AppState`.
 *
 * # Configuration Sources
 *
 * - `DATABASE_URL` - sqlx connection string, default `sqlite:ripple.db`
 * - `JWT_SECRET` - token signing key; a dev fallback is used with a logged
 *   warning when unset
 * - `PORT` - listening port, default 5000
 *
 * # Error Handling
 *
 * Unlike the optional services elsewhere in this module's lineage, the
 * store is not optional here: if the pool cannot be opened or migrations
 * fail, `connect_database` returns the error and the process terminates.
 */

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

/// Default listening port when `PORT` is unset or unparsable.
const DEFAULT_PORT: u16 = 5000;

/// Process-wide configuration, constructed once in `main` and carried in
/// `AppState` for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// sqlx connection string for the backing store
    pub database_url: String,
    /// Signing key for bearer tokens
    pub jwt_secret: String,
    /// TCP port the server binds
    pub port: u16,
}

impl AppConfig {
    /// Snapshot configuration from the environment.
    ///
    /// Missing values fall back to development defaults; a missing
    /// `JWT_SECRET` is loudly warned about because tokens signed with the
    /// fallback are worthless outside local development.
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:ripple.db".to_string());

        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set, using development fallback");
            "dev-secret-change-in-production".to_string()
        });

        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            database_url,
            jwt_secret,
            port,
        }
    }
}

/// Open the database pool and bring the schema up to date.
///
/// # Errors
///
/// Returns the sqlx error on connection or migration failure. Callers
/// treat this as fatal; the server never runs without its store.
pub async fn connect_database(config: &AppConfig) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let options =
        SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(options).await?;

    tracing::info!("Database connection pool created");

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Database migrations up to date");

    Ok(pool)
}
