use anyhow::Result;
use coach_site::{check_dictionary, config::Config, server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("coach_site=info".parse()?),
        )
        .init();

    info!("Starting coach site v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration from environment
    let config = Config::from_env()?;
    info!(
        site_url = %config.site_url,
        recaptcha = config.recaptcha_enabled(),
        contact_delivery = config.contact_endpoint.is_some(),
        "Configuration loaded"
    );

    // Refuse to serve a dictionary with broken rows
    check_dictionary()?;

    let state = server::AppState::new(config)?;
    server::serve(state).await
}
