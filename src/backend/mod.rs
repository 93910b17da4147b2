//! Pluggable translation backends.
//!
//! The router only knows [`TranslationBackend`]. Which implementation sits
//! behind it is decided once, at startup, from [`BackendKind`].

mod google;
mod indictrans;

pub use google::GoogleTranslateBackend;
pub use indictrans::IndicTransBackend;

use crate::config::Config;
use crate::error::BackendError;
use anyhow::{bail, Result};
use async_trait::async_trait;
use std::sync::Arc;

/// Something that can translate text between two language codes.
///
/// Callers are expected to pass distinct codes; implementations do not have to
/// check. An unsupported pair must come back as an error, never as text.
#[async_trait]
pub trait TranslationBackend: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, BackendError>;
}

/// Which backend to build at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// Remote Google Translate endpoint
    Google,
    /// Locally hosted IndicTrans2 model server
    IndicTrans,
}

impl BackendKind {
    pub fn from_name(name: &str) -> Result<Self> {
        match name.trim().to_lowercase().as_str() {
            "google" => Ok(BackendKind::Google),
            "indictrans" | "indictrans2" => Ok(BackendKind::IndicTrans),
            other => bail!(
                "Unknown translation backend '{}' (expected 'google' or 'indictrans')",
                other
            ),
        }
    }
}

/// Build the configured backend.
pub fn build_backend(config: &Config) -> Arc<dyn TranslationBackend> {
    match config.backend {
        BackendKind::Google => Arc::new(GoogleTranslateBackend::new(&config.google_translate_url)),
        BackendKind::IndicTrans => Arc::new(IndicTransBackend::new(&config.indictrans_url)),
    }
}
