use super::TranslationBackend;
use crate::error::BackendError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// FLORES-200 tags understood by IndicTrans2, keyed by ISO 639-1 code.
const FLORES_TAGS: &[(&str, &str)] = &[
    ("en", "eng_Latn"),
    ("kn", "kan_Knda"),
    ("hi", "hin_Deva"),
    ("te", "tel_Telu"),
    ("ta", "tam_Taml"),
    ("ml", "mal_Mlym"),
    ("mr", "mar_Deva"),
    ("bn", "ben_Beng"),
    ("gu", "guj_Gujr"),
    ("pa", "pan_Guru"),
    ("ur", "urd_Arab"),
    ("ne", "npi_Deva"),
];

fn flores_tag(code: &str) -> Option<&'static str> {
    FLORES_TAGS
        .iter()
        .find(|(iso, _)| *iso == code)
        .map(|(_, tag)| *tag)
}

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    text: &'a str,
    src_lang: &'static str,
    tgt_lang: &'static str,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    translation: String,
}

/// Backend for a locally hosted IndicTrans2 model.
///
/// Model inference runs in a separate server process; this type only speaks
/// its JSON API. IndicTrans2 ships as en→indic, indic→en and indic→indic
/// checkpoints, so a pair between two non-Indic languages is rejected before
/// anything is sent.
pub struct IndicTransBackend {
    client: reqwest::Client,
    api_url: String,
}

impl IndicTransBackend {
    pub fn new(api_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.to_string(),
        }
    }

    /// Resolve a pair to model tags, or reject it as unsupported.
    fn model_tags(
        source_lang: &str,
        target_lang: &str,
    ) -> Result<(&'static str, &'static str), BackendError> {
        let unsupported = || BackendError::UnsupportedPair {
            source_lang: source_lang.to_string(),
            target_lang: target_lang.to_string(),
        };

        let src = flores_tag(source_lang).ok_or_else(unsupported)?;
        let tgt = flores_tag(target_lang).ok_or_else(unsupported)?;

        if source_lang == "en" && target_lang == "en" {
            return Err(unsupported());
        }

        Ok((src, tgt))
    }
}

#[async_trait]
impl TranslationBackend for IndicTransBackend {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, BackendError> {
        let (src_lang, tgt_lang) = Self::model_tags(source_lang, target_lang)?;
        debug!("IndicTrans2 request {} -> {}", src_lang, tgt_lang);

        let request = TranslateRequest {
            text,
            src_lang,
            tgt_lang,
        };

        let response = self
            .client
            .post(&self.api_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
            warn!("IndicTrans2 server error ({}): {}", status, body);
            return Err(BackendError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: TranslateResponse = response
            .json()
            .await
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))?;

        Ok(parsed.translation)
    }
}
