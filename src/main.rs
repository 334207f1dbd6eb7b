use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use album_api::{config::Config, db, router::create_router, state::AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize tracing
    let registry = tracing_subscriber::registry().with(
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "album_api=debug,tower_http=debug".into()),
    );
    if std::env::var("LOG_FORMAT").is_ok_and(|format| format == "json") {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting Album API...");

    if let Err(e) = run().await {
        tracing::error!("Fatal: {:#}", e);
        return Err(e);
    }

    Ok(())
}

async fn run() -> Result<()> {
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    let db = db::connect(&config).await?;
    tracing::info!("Connected to database");

    db::run_migrations(&db).await?;
    tracing::info!("Database migrations completed");

    let bind_addr = (config.server_host.clone(), config.server_port);
    let api_prefix = config.api_prefix.clone();

    let state = AppState::new(db, config);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("Server listening on http://{}{}", listener.local_addr()?, api_prefix);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
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
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
