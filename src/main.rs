use anyhow::{Context, Result};
use langroute_bot::{
    backend::build_backend,
    config::Config,
    detector::WhatlangDetector,
    preferences::PreferenceStore,
    router::{DegeneracyPolicy, Router},
    server::{self, AppState},
};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when variables come from the environment)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("langroute_bot=info".parse()?),
        )
        .init();

    info!("Starting translation bot");

    // Load configuration from environment
    let config = Config::from_env()?;

    let detector = WhatlangDetector::hindi_biased(config.min_detection_confidence);
    let backend = build_backend(&config);
    info!("Using {:?} translation backend", config.backend);

    let mut policy = DegeneracyPolicy::new(config.fallback_language.clone());
    if let Some(alternate) = &config.alternate_fallback_language {
        policy = policy.with_alternate(alternate.clone());
    }

    let router = Router::new(
        Arc::new(detector),
        Arc::new(PreferenceStore::new(config.default_language.clone())),
        backend,
        policy,
    );

    let port = config.port;
    let app = server::app(Arc::new(AppState { config, router }));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("Failed to bind to port {}", port))?;
    info!("Listening on port {}", port);

    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
