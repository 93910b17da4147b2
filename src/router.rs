//! Picks the source and target language for a message and hands it to the
//! translation backend.
//!
//! # Decision
//!
//! 1. Detect the language of the text. Failure stops here.
//! 2. Look up the user's preferred target.
//! 3. If the detected language *is* the preferred target, translating would be
//!    a no-op, so the text is treated as being in the preferred language and
//!    sent to the fallback language instead.
//! 4. Otherwise translate from the detected language to the preferred target.
//!
//! No retries, timeouts or caching happen here. Whatever the detector or
//! backend returns is passed through unchanged.

use crate::backend::TranslationBackend;
use crate::detector::LanguageDetector;
use crate::error::RouteError;
use crate::preferences::PreferenceStore;
use std::sync::Arc;
use tracing::debug;

/// What to do when the detected language equals the user's target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DegeneracyPolicy {
    /// Target used instead of the user's preference.
    pub fallback: String,
    /// Target used when `fallback` is itself the detected language.
    /// `None` passes the identity pair through to the backend.
    pub alternate: Option<String>,
}

impl DegeneracyPolicy {
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            fallback: fallback.into(),
            alternate: None,
        }
    }

    pub fn with_alternate(mut self, alternate: impl Into<String>) -> Self {
        self.alternate = Some(alternate.into());
        self
    }
}

/// Source and target handed to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePair {
    pub source: String,
    pub target: String,
}

/// Outcome of a successful route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routed {
    pub pair: LanguagePair,
    /// The user's stored target at the time of routing.
    pub preferred: String,
    pub translated: String,
}

impl Routed {
    /// True when the text was already in the preferred language, so the
    /// degeneracy policy picked the target instead.
    pub fn used_fallback(&self) -> bool {
        self.pair.source == self.preferred
    }
}

pub struct Router {
    detector: Arc<dyn LanguageDetector>,
    preferences: Arc<PreferenceStore>,
    backend: Arc<dyn TranslationBackend>,
    policy: DegeneracyPolicy,
}

impl Router {
    pub fn new(
        detector: Arc<dyn LanguageDetector>,
        preferences: Arc<PreferenceStore>,
        backend: Arc<dyn TranslationBackend>,
        policy: DegeneracyPolicy,
    ) -> Self {
        Self {
            detector,
            preferences,
            backend,
            policy,
        }
    }

    pub fn preferences(&self) -> &PreferenceStore {
        &self.preferences
    }

    pub fn policy(&self) -> &DegeneracyPolicy {
        &self.policy
    }

    /// Decide the language pair for a detected language and a preferred target.
    pub fn resolve_pair(&self, detected: &str, preferred: &str) -> LanguagePair {
        if detected != preferred {
            return LanguagePair {
                source: detected.to_string(),
                target: preferred.to_string(),
            };
        }

        let target = match &self.policy.alternate {
            Some(alternate) if self.policy.fallback == preferred => alternate.clone(),
            _ => self.policy.fallback.clone(),
        };

        LanguagePair {
            source: preferred.to_string(),
            target,
        }
    }

    /// Translate `text` for `user_id`.
    pub async fn route(&self, text: &str, user_id: i64) -> Result<String, RouteError> {
        Ok(self.route_detailed(text, user_id).await?.translated)
    }

    /// Like [`Router::route`], but also reports the pair that was used.
    pub async fn route_detailed(&self, text: &str, user_id: i64) -> Result<Routed, RouteError> {
        let detected = self.detector.detect(text)?;
        let preferred = self.preferences.get_preference(user_id);
        let pair = self.resolve_pair(&detected, &preferred);

        debug!(
            "Routing message from {}: detected={} preferred={} -> {} to {}",
            user_id, detected, preferred, pair.source, pair.target
        );

        let translated = self
            .backend
            .translate(text, &pair.source, &pair.target)
            .await?;

        Ok(Routed {
            pair,
            preferred,
            translated,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{BackendError, DetectionError};
    use async_trait::async_trait;
    use proptest::prelude::*;
    use std::sync::Mutex;

    // ==================== Test Doubles ====================

    struct FixedDetector(Result<String, DetectionError>);

    impl FixedDetector {
        fn returning(code: &str) -> Arc<Self> {
            Arc::new(Self(Ok(code.to_string())))
        }

        fn failing(error: DetectionError) -> Arc<Self> {
            Arc::new(Self(Err(error)))
        }
    }

    impl LanguageDetector for FixedDetector {
        fn detect(&self, _text: &str) -> Result<String, DetectionError> {
            self.0.clone()
        }
    }

    /// Records every call and answers with a canned result.
    struct RecordingBackend {
        calls: Mutex<Vec<(String, String, String)>>,
        response: Result<String, BackendError>,
    }

    impl RecordingBackend {
        fn ok(response: &str) -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                response: Ok(response.to_string()),
            })
        }

        fn failing(error: BackendError) -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                response: Err(error),
            })
        }

        fn calls(&self) -> Vec<(String, String, String)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TranslationBackend for RecordingBackend {
        async fn translate(
            &self,
            text: &str,
            source_lang: &str,
            target_lang: &str,
        ) -> Result<String, BackendError> {
            self.calls.lock().unwrap().push((
                text.to_string(),
                source_lang.to_string(),
                target_lang.to_string(),
            ));
            self.response.clone()
        }
    }

    fn call(text: &str, source: &str, target: &str) -> (String, String, String) {
        (text.to_string(), source.to_string(), target.to_string())
    }

    fn router_with(
        detector: Arc<dyn LanguageDetector>,
        backend: Arc<dyn TranslationBackend>,
        preferences: Arc<PreferenceStore>,
    ) -> Router {
        Router::new(detector, preferences, backend, DegeneracyPolicy::new("kn"))
    }

    // ==================== Routing Tests ====================

    #[tokio::test]
    async fn test_unset_preference_routes_to_default() {
        let backend = RecordingBackend::ok("ನಮಸ್ಕಾರ");
        let router = router_with(
            FixedDetector::returning("en"),
            backend.clone(),
            Arc::new(PreferenceStore::new("kn")),
        );

        let result = router.route("Hello", 42).await.unwrap();

        assert_eq!(result, "ನಮಸ್ಕಾರ");
        assert_eq!(backend.calls(), vec![call("Hello", "en", "kn")]);
    }

    #[tokio::test]
    async fn test_detected_equals_preference_uses_fallback() {
        let preferences = Arc::new(PreferenceStore::new("kn"));
        preferences.set_preference(7, "hi");
        let backend = RecordingBackend::ok("ನಮಸ್ಕಾರ");
        let router = router_with(FixedDetector::returning("hi"), backend.clone(), preferences);

        router.route("नमस्ते", 7).await.unwrap();

        assert_eq!(backend.calls(), vec![call("नमस्ते", "hi", "kn")]);
    }

    #[tokio::test]
    async fn test_distinct_languages_pass_through() {
        let preferences = Arc::new(PreferenceStore::new("kn"));
        preferences.set_preference(1, "en");
        let backend = RecordingBackend::ok("Hello");
        let router = router_with(FixedDetector::returning("hi"), backend.clone(), preferences);

        router.route("नमस्ते", 1).await.unwrap();

        assert_eq!(backend.calls(), vec![call("नमस्ते", "hi", "en")]);
    }

    #[tokio::test]
    async fn test_backend_result_returned_verbatim() {
        let backend = RecordingBackend::ok("  exact output \n");
        let router = router_with(
            FixedDetector::returning("en"),
            backend,
            Arc::new(PreferenceStore::new("kn")),
        );

        assert_eq!(router.route("Hello", 1).await.unwrap(), "  exact output \n");
    }

    #[tokio::test]
    async fn test_route_detailed_reports_pair() {
        let preferences = Arc::new(PreferenceStore::new("kn"));
        preferences.set_preference(7, "hi");
        let router = router_with(
            FixedDetector::returning("hi"),
            RecordingBackend::ok("ನಮಸ್ತೆ"),
            preferences,
        );

        let routed = router.route_detailed("नमस्ते", 7).await.unwrap();

        assert_eq!(routed.pair.source, "hi");
        assert_eq!(routed.pair.target, "kn");
        assert_eq!(routed.preferred, "hi");
        assert_eq!(routed.translated, "ನಮಸ್ತೆ");
        assert!(routed.used_fallback());
    }

    #[tokio::test]
    async fn test_route_detailed_direct_translation_is_not_fallback() {
        let router = router_with(
            FixedDetector::returning("en"),
            RecordingBackend::ok("ನಮಸ್ಕಾರ"),
            Arc::new(PreferenceStore::new("kn")),
        );

        let routed = router.route_detailed("Hello", 42).await.unwrap();

        assert_eq!(routed.preferred, "kn");
        assert!(!routed.used_fallback());
    }

    // ==================== Error Propagation Tests ====================

    #[tokio::test]
    async fn test_detection_failure_skips_backend() {
        let backend = RecordingBackend::ok("unused");
        let router = router_with(
            FixedDetector::failing(DetectionError::Undetermined),
            backend.clone(),
            Arc::new(PreferenceStore::new("kn")),
        );

        let err = router.route("???", 1).await.unwrap_err();

        assert_eq!(err, RouteError::Detection(DetectionError::Undetermined));
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_backend_failure_propagates_without_retry() {
        let failure = BackendError::UnsupportedPair {
            source_lang: "en".to_string(),
            target_lang: "kn".to_string(),
        };
        let backend = RecordingBackend::failing(failure.clone());
        let router = router_with(
            FixedDetector::returning("en"),
            backend.clone(),
            Arc::new(PreferenceStore::new("kn")),
        );

        let err = router.route("Hello", 1).await.unwrap_err();

        assert_eq!(err, RouteError::Backend(failure));
        assert_eq!(backend.calls(), vec![call("Hello", "en", "kn")]);
    }

    // ==================== Degeneracy Policy Tests ====================

    #[test]
    fn test_fallback_equal_to_preference_without_alternate() {
        let router = router_with(
            FixedDetector::returning("kn"),
            RecordingBackend::ok(""),
            Arc::new(PreferenceStore::new("kn")),
        );

        let pair = router.resolve_pair("kn", "kn");
        assert_eq!(pair.source, "kn");
        assert_eq!(pair.target, "kn");
    }

    #[test]
    fn test_fallback_equal_to_preference_uses_alternate() {
        let router = Router::new(
            FixedDetector::returning("kn"),
            Arc::new(PreferenceStore::new("kn")),
            RecordingBackend::ok(""),
            DegeneracyPolicy::new("kn").with_alternate("en"),
        );

        let pair = router.resolve_pair("kn", "kn");
        assert_eq!(
            pair,
            LanguagePair {
                source: "kn".to_string(),
                target: "en".to_string()
            }
        );
    }

    #[test]
    fn test_alternate_unused_when_fallback_differs() {
        let router = Router::new(
            FixedDetector::returning("hi"),
            Arc::new(PreferenceStore::new("kn")),
            RecordingBackend::ok(""),
            DegeneracyPolicy::new("kn").with_alternate("en"),
        );

        assert_eq!(router.resolve_pair("hi", "hi").target, "kn");
    }

    #[test]
    fn test_fallback_is_configurable() {
        let router = Router::new(
            FixedDetector::returning("hi"),
            Arc::new(PreferenceStore::new("kn")),
            RecordingBackend::ok(""),
            DegeneracyPolicy::new("ta"),
        );

        assert_eq!(router.resolve_pair("hi", "hi").target, "ta");
        assert_eq!(router.policy().fallback, "ta");
    }

    proptest! {
        #[test]
        fn prop_never_identity_when_alternate_set(
            detected in "[a-z]{2}",
            preferred in "[a-z]{2}",
        ) {
            let router = Router::new(
                FixedDetector::returning(&detected),
                Arc::new(PreferenceStore::new("kn")),
                RecordingBackend::ok(""),
                DegeneracyPolicy::new("kn").with_alternate("en"),
            );
            let pair = router.resolve_pair(&detected, &preferred);
            prop_assert_ne!(pair.source, pair.target);
        }

        #[test]
        fn prop_non_degenerate_pair_unchanged(
            detected in "[a-z]{2}",
            preferred in "[a-z]{2}",
        ) {
            prop_assume!(detected != preferred);
            let router = router_with(
                FixedDetector::returning(&detected),
                RecordingBackend::ok(""),
                Arc::new(PreferenceStore::new("kn")),
            );
            let pair = router.resolve_pair(&detected, &preferred);
            prop_assert_eq!(pair.source, detected);
            prop_assert_eq!(pair.target, preferred);
        }
    }
}
