mod config;
mod routes;
mod state;

use tracing_subscriber::EnvFilter;

/// Fatal failures before the server starts accepting connections.
#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error("http client init failed: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("{0}")]
    Router(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let dotenv = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = dotenv {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    let config = config::HostConfig::from_env()?;
    let state = state::HostState::new(&config)?;
    let app = routes::app(state, &config.static_dir).map_err(StartupError::Router)?;

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(port = config.port, backend = %config.backend_url, "roomdesk listening");
    axum::serve(listener, app).await?;
    Ok(())
}
