use super::TranslationBackend;
use crate::error::BackendError;
use crate::retry::{with_retry_if, RetryConfig};
use async_trait::async_trait;
use serde_json::Value;
use tracing::warn;

/// Remote backend using the public Google Translate `gtx` endpoint.
pub struct GoogleTranslateBackend {
    client: reqwest::Client,
    api_url: String,
    retry: RetryConfig,
}

impl GoogleTranslateBackend {
    pub fn new(api_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.to_string(),
            retry: RetryConfig::translation_api(),
        }
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    async fn request(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, BackendError> {
        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("client", "gtx"),
                ("sl", source_lang),
                ("tl", target_lang),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
            return Err(BackendError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))?;

        parse_segments(&body)
    }
}

/// Join the translated segments of a `dt=t` response.
///
/// The payload looks like `[[["Hola","Hello",...], ["mundo","world",...]], null, "en", ...]`.
fn parse_segments(body: &Value) -> Result<String, BackendError> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| BackendError::InvalidResponse("missing translation segments".to_string()))?;

    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if translated.is_empty() {
        return Err(BackendError::InvalidResponse(
            "response contained no translated text".to_string(),
        ));
    }

    Ok(translated)
}

#[async_trait]
impl TranslationBackend for GoogleTranslateBackend {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, BackendError> {
        if text.trim().is_empty() {
            return Ok(text.to_string());
        }

        let operation = format!("Google translation {} -> {}", source_lang, target_lang);
        let result = with_retry_if(
            &self.retry,
            &operation,
            || self.request(text, source_lang, target_lang),
            BackendError::is_transient,
        )
        .await;

        if let Err(e) = &result {
            warn!("{} failed: {}", operation, e);
        }
        result
    }
}
