use std::{net::SocketAddr, sync::Arc};

use clap::Parser;
use tokio::signal;
use tracing::{error, info};

use redis_pg_api::{
    config::{Cli, Config},
    create_router,
    middleware::init_tracing,
    AppState, PostgresStore, RedisStore, StartupError,
};

#[tokio::main]
async fn main() {
    // Initialize structured logging
    if let Err(e) = init_tracing() {
        eprintln!("{}", StartupError::Tracing(e.to_string()));
        std::process::exit(1);
    }

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        error!("{}", e);
        std::process::exit(1);
    }

    info!("Server shutdown complete");
}

async fn run(cli: Cli) -> Result<(), StartupError> {
    // Load configuration from environment and arguments
    let config = Config::load(&cli)?;
    info!("Configuration loaded successfully");

    let database = PostgresStore::connect(&config.database).await?;
    info!("Database connection established");

    let counters = RedisStore::connect(&config.redis).await?;
    info!("Redis connection established");

    let app = create_router(AppState::new(Arc::new(counters), Arc::new(database)));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(StartupError::Serve)?;

    Ok(())
}

/// Graceful shutdown signal handler
/// Listens for SIGTERM and SIGINT signals
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal, initiating graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM signal, initiating graceful shutdown");
        },
    }
}
