use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::{info, warn};
use user_directory::{config::Config, i18n, server, user};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("user_directory=info".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .init();

    info!("Starting users API");

    let config = Config::from_env()?;

    for (code, report) in i18n::validate_registry() {
        for error in &report.errors {
            warn!("Locale '{}': {}", code, error);
        }
        for warning in &report.warnings {
            warn!("Locale '{}': {}", code, warning);
        }
    }

    let users = user::fixture_users();
    info!("Serving {} fixture users", users.len());

    let listener = TcpListener::bind(("0.0.0.0", config.port))
        .await
        .with_context(|| format!("Failed to bind port {}", config.port))?;

    server::serve(listener, server::AppState::new(users)).await
}
