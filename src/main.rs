//! RoomHub Server — room reservation backend.
//!
//! Main entry point that wires all crates together and starts the server.

use std::future::{Future, IntoFuture};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::oneshot;
use tracing_subscriber::{EnvFilter, fmt};

use roomhub_core::config::AppConfig;
use roomhub_core::error::AppError;
use roomhub_database::repositories::reservation::ReservationRepository;
use roomhub_database::repositories::user::UserRepository;
use roomhub_database::store::{ReservationStore, UserStore};

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Load configuration from files and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("ROOMHUB_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting RoomHub v{}", env!("CARGO_PKG_VERSION"));

    tracing::info!("Connecting to database...");
    let db_pool = roomhub_database::connection::create_pool(&config.database).await?;

    tracing::info!("Running database migrations...");
    roomhub_database::migration::run_migrations(&db_pool).await?;
    tracing::info!("Database migrations complete");

    let users: Arc<dyn UserStore> = Arc::new(UserRepository::new(db_pool.clone()));
    let reservations: Arc<dyn ReservationStore> =
        Arc::new(ReservationRepository::new(db_pool.clone()));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);

    let state = roomhub_api::AppState::new(config, users, reservations)?;
    let app = roomhub_api::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("RoomHub server listening on {addr}");

    let (drain_tx, drain_rx) = oneshot::channel();
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, draining connections...");
            let _ = drain_tx.send(());
        })
        .into_future();

    serve_until_drained(server, drain_rx, grace).await?;

    tracing::info!("RoomHub server shut down");
    Ok(())
}

/// Runs the server future to completion, but once the shutdown signal has
/// fired, in-flight connections get at most the configured grace period
/// to drain before the server is abandoned.
async fn serve_until_drained<S>(
    server: S,
    drain_started: oneshot::Receiver<()>,
    grace: Duration,
) -> Result<(), AppError>
where
    S: Future<Output = std::io::Result<()>>,
{
    tokio::select! {
        result = server => {
            result.map_err(|e| AppError::internal(format!("Server error: {e}")))
        }
        _ = async {
            let _ = drain_started.await;
            tokio::time::sleep(grace).await;
        } => {
            tracing::warn!(
                grace_seconds = grace.as_secs(),
                "Shutdown grace period elapsed; abandoning remaining connections"
            );
            Ok(())
        }
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to install SIGTERM handler: {e}"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
