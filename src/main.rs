use std::net::SocketAddr;
use std::time::Duration;

use sea_orm_migration::MigratorTrait;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sara_backend::{
    config::Config, db, html, routes, session, AppError, AppResult, AppState, SessionStore,
};

const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(5 * 60);

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sara_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        tracing::error!("Server stopped: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Starting server at {}", config.server_addr());

    if !config.assets_dir.is_dir() {
        tracing::warn!(
            "Assets directory not found: {}; icons and backgrounds will not load",
            config.assets_dir.display()
        );
    } else {
        for path in html::missing_backgrounds(&config.assets_dir) {
            tracing::warn!("Background image not found: {}; page renders without it", path.display());
        }
    }

    // Connect to database
    let db = db::connect(&config).await?;
    tracing::info!("Connected to database");

    // Run migrations
    migration::Migrator::up(&db, None).await?;
    tracing::info!("Migrations complete");

    let sessions = SessionStore::new();
    session::spawn_sweeper(sessions.clone(), SESSION_SWEEP_INTERVAL);

    let state = AppState {
        db,
        config: config.clone(),
        sessions,
    };

    // Create router with middleware
    let app = routes::with_middleware(routes::create_router(state))?;

    // Start server with socket address for rate limiting
    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid address: {}", e)))?;
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to bind to address: {}", e)))?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .map_err(|e| AppError::Internal(format!("Failed to start server: {}", e)))
}
