use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;
use tokio::net::lookup_host;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use qna_api::config::AppConfig;
use qna_api::router::build_app_router;
use qna_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "qna_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = AppConfig::load().context("Failed to load configuration")?;
    tracing::info!(
        env = %config.env,
        db_host = %config.database.host,
        db_port = config.database.port,
        "Loaded configuration"
    );

    // --- Database ---
    let connect_options = config
        .database
        .connect_options()
        .context("Invalid database configuration")?;
    let pool = qna_db::create_pool(connect_options, config.database.max_connections)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connection pool created");

    qna_db::health_check(&pool)
        .await
        .context("Database health check failed")?;
    tracing::info!("Database health check passed");

    qna_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;
    tracing::info!("Database migrations applied");

    // --- App state & router ---
    let http = config.http_server.clone();
    let state = AppState::new(pool.clone(), config);
    let app = build_app_router(state, &http);

    // --- Start server ---
    let addr: SocketAddr = lookup_host((http.address.as_str(), http.port))
        .await
        .context("Failed to resolve listen address")?
        .next()
        .with_context(|| format!("No address found for {}", http.address))?;
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    let drain_timeout = Duration::from_secs(http.shutdown_timeout_secs);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(drain_timeout))
        .await
        .context("Server error")?;

    // --- Post-shutdown cleanup ---
    pool.close().await;
    tracing::info!("Graceful shutdown complete");
    Ok(())
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix). Once the signal
/// arrives, in-flight requests get `drain_timeout` to finish before the
/// process exits regardless.
async fn shutdown_signal(drain_timeout: Duration) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }

    tokio::spawn(async move {
        tokio::time::sleep(drain_timeout).await;
        tracing::warn!(?drain_timeout, "Shutdown drain timed out, exiting");
        std::process::exit(1);
    });
}
