//! Language registry: the languages users can pick with `/lang`.
//!
//! The registry is only consulted by the command layer. The router and the
//! preference store treat codes as opaque tokens.

use std::sync::OnceLock;

/// Metadata for a language the bot offers.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "kn", "hi")
    pub code: &'static str,

    /// English name of the language (e.g., "Kannada")
    pub name: &'static str,

    /// Native name of the language (e.g., "ಕನ್ನಡ")
    pub native_name: &'static str,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global registry, initialising it on first use.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Look up a language by code. Matching is case-insensitive.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages
            .iter()
            .find(|lang| lang.code.eq_ignore_ascii_case(code))
    }

    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    pub fn codes(&self) -> Vec<&'static str> {
        self.languages.iter().map(|lang| lang.code).collect()
    }

    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }

    /// Human-readable label for a code, e.g. "Kannada (ಕನ್ನಡ)".
    ///
    /// Codes outside the registry are shown upper-cased.
    pub fn display_name(&self, code: &str) -> String {
        match self.get_by_code(code) {
            Some(lang) if lang.name == lang.native_name => lang.name.to_string(),
            Some(lang) => format!("{} ({})", lang.name, lang.native_name),
            None => code.to_uppercase(),
        }
    }
}

fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "kn",
            name: "Kannada",
            native_name: "ಕನ್ನಡ",
        },
        LanguageConfig {
            code: "hi",
            name: "Hindi",
            native_name: "हिन्दी",
        },
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LanguageRegistry::get();
        let registry2 = LanguageRegistry::get();
        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_code_kannada() {
        let config = LanguageRegistry::get().get_by_code("kn").unwrap();
        assert_eq!(config.name, "Kannada");
        assert_eq!(config.native_name, "ಕನ್ನಡ");
    }

    #[test]
    fn test_get_by_code_is_case_insensitive() {
        let config = LanguageRegistry::get().get_by_code("HI").unwrap();
        assert_eq!(config.code, "hi");
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        assert!(LanguageRegistry::get().get_by_code("fr").is_none());
        assert!(!LanguageRegistry::get().is_supported(""));
    }

    #[test]
    fn test_codes_in_offer_order() {
        assert_eq!(LanguageRegistry::get().codes(), vec!["kn", "hi", "en"]);
        assert_eq!(LanguageRegistry::get().list_all().len(), 3);
    }

    #[test]
    fn test_display_name() {
        let registry = LanguageRegistry::get();
        assert_eq!(registry.display_name("kn"), "Kannada (ಕನ್ನಡ)");
        assert_eq!(registry.display_name("en"), "English");
        assert_eq!(registry.display_name("fr"), "FR");
    }
}
