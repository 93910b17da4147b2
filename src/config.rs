use crate::backend::BackendKind;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Telegram
    pub telegram_bot_token: String,
    pub telegram_webhook_secret: String,
    pub telegram_api_url: String,

    // Routing
    pub default_language: String,
    pub fallback_language: String,
    pub alternate_fallback_language: Option<String>,
    pub min_detection_confidence: f64,

    // Translation backend
    pub backend: BackendKind,
    pub google_translate_url: String,
    pub indictrans_url: String,

    // Server
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let default_language =
            std::env::var("DEFAULT_LANGUAGE").unwrap_or_else(|_| "kn".to_string());

        Ok(Self {
            // Telegram
            telegram_bot_token: std::env::var("TELEGRAM_BOT_TOKEN")
                .context("TELEGRAM_BOT_TOKEN not set")?,
            telegram_webhook_secret: std::env::var("TELEGRAM_WEBHOOK_SECRET")
                .context("TELEGRAM_WEBHOOK_SECRET not set")?,
            telegram_api_url: std::env::var("TELEGRAM_API_URL")
                .unwrap_or_else(|_| "https://api.telegram.org".to_string()),

            // Routing - the degeneracy fallback defaults to the default language
            fallback_language: std::env::var("FALLBACK_LANGUAGE")
                .unwrap_or_else(|_| default_language.clone()),
            alternate_fallback_language: match std::env::var("ALTERNATE_FALLBACK_LANGUAGE") {
                Ok(v) if v.trim().is_empty() => None,
                Ok(v) => Some(v),
                Err(_) => Some("en".to_string()),
            },
            min_detection_confidence: std::env::var("MIN_DETECTION_CONFIDENCE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0.0),
            default_language,

            // Translation backend
            backend: BackendKind::from_name(
                &std::env::var("TRANSLATION_BACKEND").unwrap_or_else(|_| "google".to_string()),
            )?,
            google_translate_url: std::env::var("GOOGLE_TRANSLATE_URL")
                .unwrap_or_else(|_| "https://translate.googleapis.com/translate_a/single".to_string()),
            indictrans_url: std::env::var("INDICTRANS_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8000/translate".to_string()),

            // Server
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
        })
    }
}
