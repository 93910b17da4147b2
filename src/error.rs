//! Error taxonomy for routing a message to a translation backend.
//!
//! Application plumbing (config, server, Telegram API) uses `anyhow`; the
//! routing path keeps typed errors so callers can tell a detection failure
//! from a backend failure.

use thiserror::Error;

/// Language identification failed or was too ambiguous to use.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DetectionError {
    #[error("cannot detect the language of empty text")]
    EmptyInput,

    #[error("language could not be determined")]
    Undetermined,

    #[error("detected '{code}' with confidence {confidence:.2}, below threshold")]
    LowConfidence { code: String, confidence: f64 },
}

/// A translation backend rejected the request or the call itself failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BackendError {
    #[error("translation from '{source_lang}' to '{target_lang}' is not supported")]
    UnsupportedPair {
        source_lang: String,
        target_lang: String,
    },

    #[error("translation request failed: {0}")]
    Request(String),

    #[error("translation API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("invalid translation response: {0}")]
    InvalidResponse(String),
}

impl BackendError {
    /// Rate limiting, server errors and transport failures are worth retrying.
    pub fn is_transient(&self) -> bool {
        match self {
            BackendError::Request(_) => true,
            BackendError::Api { status, .. } => *status == 429 || *status >= 500,
            BackendError::UnsupportedPair { .. } | BackendError::InvalidResponse(_) => false,
        }
    }
}

/// Failure surfaced by `Router::route`. Wraps collaborator errors unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    #[error(transparent)]
    Detection(#[from] DetectionError),

    #[error(transparent)]
    Backend(#[from] BackendError),
}
