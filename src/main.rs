/**
 * Ripple Server Entry Point
 *
 * Boots the social-network backend: environment, logging, configuration,
 * store connection (fatal on failure), then the Axum server.
 */

use ripple::server::config::{connect_database, AppConfig};
use ripple::server::init::create_app;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    // Snapshot configuration once; nothing below reads the environment.
    let config = AppConfig::from_env();

    // The store is not optional. A connection or migration failure here
    // terminates the process, matching the deployment contract.
    let pool = match connect_database(&config).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Database connection failed: {e}");
            std::process::exit(1);
        }
    };

    let port = config.port;
    let app = create_app(config, pool);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Server running on port {port}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
