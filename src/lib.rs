//! Translation bot core: picks a source/target language pair for each
//! message and hands it to a pluggable translation backend.
//!
//! - [`router::Router`] makes the routing decision
//! - [`preferences::PreferenceStore`] holds per-user target languages
//! - [`backend::TranslationBackend`] is the seam for translation services
//! - [`detector::LanguageDetector`] is the seam for language identification

pub mod backend;
pub mod config;
pub mod detector;
pub mod error;
pub mod i18n;
pub mod preferences;
pub mod retry;
pub mod router;
pub mod security;
pub mod server;
pub mod telegram;

pub use error::{BackendError, DetectionError, RouteError};
pub use router::{DegeneracyPolicy, LanguagePair, Router};
