//! Language detection.
//!
//! The router treats detection as a black box behind [`LanguageDetector`].
//! The shipped implementation wraps the `whatlang` trigram detector and maps
//! its ISO 639-3 output onto the two-letter codes the rest of the bot uses.

use crate::error::DetectionError;
use tracing::debug;
use whatlang::{Detector, Lang};

/// Best-guess language identification for a piece of text.
pub trait LanguageDetector: Send + Sync {
    /// Return a language code for `text`, or fail if it cannot be told.
    fn detect(&self, text: &str) -> Result<String, DetectionError>;
}

/// Two-letter codes for the languages whatlang can report.
///
/// Anything missing here is reported with whatlang's three-letter code.
const ISO_639_1: &[(Lang, &str)] = &[
    (Lang::Eng, "en"),
    (Lang::Hin, "hi"),
    (Lang::Kan, "kn"),
    (Lang::Tel, "te"),
    (Lang::Tam, "ta"),
    (Lang::Mal, "ml"),
    (Lang::Mar, "mr"),
    (Lang::Ben, "bn"),
    (Lang::Guj, "gu"),
    (Lang::Pan, "pa"),
    (Lang::Urd, "ur"),
    (Lang::Nep, "ne"),
    (Lang::Fra, "fr"),
    (Lang::Spa, "es"),
    (Lang::Deu, "de"),
    (Lang::Rus, "ru"),
    (Lang::Ara, "ar"),
    (Lang::Cmn, "zh"),
    (Lang::Jpn, "ja"),
];

fn to_iso_639_1(lang: Lang) -> &'static str {
    ISO_639_1
        .iter()
        .find(|(candidate, _)| *candidate == lang)
        .map(|(_, code)| *code)
        .unwrap_or_else(|| lang.code())
}

/// Languages sharing Devanagari with Hindi.
const DEVANAGARI_RIVALS: &[Lang] = &[Lang::Mar, Lang::Nep];

/// Whatlang-based detector.
pub struct WhatlangDetector {
    detector: Detector,
    min_confidence: f64,
}

impl WhatlangDetector {
    /// Detector over every language whatlang knows.
    pub fn new(min_confidence: f64) -> Self {
        Self {
            detector: Detector::new(),
            min_confidence,
        }
    }

    /// Detector over every language except Marathi and Nepali.
    ///
    /// Short Devanagari messages are otherwise often reported as Marathi or
    /// Nepali; dropping those two makes Devanagari resolve to Hindi while text
    /// in any other script keeps its real code.
    pub fn hindi_biased(min_confidence: f64) -> Self {
        Self {
            detector: Detector::with_denylist(DEVANAGARI_RIVALS.to_vec()),
            min_confidence,
        }
    }
}

impl LanguageDetector for WhatlangDetector {
    fn detect(&self, text: &str) -> Result<String, DetectionError> {
        if text.trim().is_empty() {
            return Err(DetectionError::EmptyInput);
        }

        let info = self
            .detector
            .detect(text)
            .ok_or(DetectionError::Undetermined)?;

        let code = to_iso_639_1(info.lang());
        let confidence = info.confidence();
        debug!("Detected language {} (confidence {:.2})", code, confidence);

        if confidence < self.min_confidence {
            return Err(DetectionError::LowConfidence {
                code: code.to_string(),
                confidence,
            });
        }

        Ok(code.to_string())
    }
}
