use adserve::bootstrap;
use adserve::config::Config;
use adserve::infrastructure::http::router::build_router;
use adserve::infrastructure::observability;
use adserve::infrastructure::persistence::Database;
use std::net::SocketAddr;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize tracing and the metrics exporter
    observability::init(&config)?;
    tracing::info!("Configuration loaded");

    // Initialize database connection
    let db = Database::connect(&config.database_url).await?;
    tracing::info!("Database pool initialized");

    // Dev backend only; MySQL owns its schema in the reference deployment
    if config.database_url.starts_with("sqlite") {
        db.run_migrations().await?;
        tracing::info!("Database migrations applied");
    }

    // Build application state (wires ports, services, and background tasks)
    let state = bootstrap::build_app_state(db, &config);

    // Build router
    let app = build_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
