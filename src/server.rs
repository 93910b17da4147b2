use crate::config::Config;
use crate::router::Router;
use crate::security::webhook_secret_matches;
use crate::telegram::{self, Update};
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::warn;

pub struct AppState {
    pub config: Config,
    pub router: Router,
}

pub fn app(state: Arc<AppState>) -> axum::Router {
    axum::Router::new()
        .route("/health", get(health))
        .route("/webhook", post(webhook))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}

async fn webhook(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> StatusCode {
    if !webhook_secret_matches(&headers, &state.config.telegram_webhook_secret) {
        warn!("Rejected webhook call with missing or invalid secret");
        return StatusCode::UNAUTHORIZED;
    }

    // Parsed only after authentication
    let update: Update = match serde_json::from_slice(&body) {
        Ok(update) => update,
        Err(e) => {
            warn!("Rejected malformed update: {}", e);
            return StatusCode::BAD_REQUEST;
        }
    };

    // Telegram redelivers on non-2xx, so failures are logged and acknowledged
    if let Err(e) = telegram::handle_webhook(&state.config, &state.router, update).await {
        warn!("Failed to handle update: {:#}", e);
    }

    StatusCode::OK
}
