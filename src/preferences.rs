//! Per-user target language preferences.
//!
//! Lives for the lifetime of the process. Nothing is persisted, nothing is
//! evicted.

use dashmap::DashMap;

/// In-memory map from user id to preferred target language code.
///
/// Safe to read and write from many tasks at once. Concurrent writes for the
/// same user are last-writer-wins.
#[derive(Debug)]
pub struct PreferenceStore {
    preferences: DashMap<i64, String>,
    default_language: String,
}

impl PreferenceStore {
    /// Create an empty store. Users without a preference get `default_language`.
    pub fn new(default_language: impl Into<String>) -> Self {
        Self {
            preferences: DashMap::new(),
            default_language: default_language.into(),
        }
    }

    /// Set (or overwrite) the preferred target language for a user.
    ///
    /// The code is stored as given; validation is the caller's business.
    pub fn set_preference(&self, user_id: i64, lang: &str) {
        self.preferences.insert(user_id, lang.to_string());
    }

    /// Preferred target language for a user, or the default if none was set.
    pub fn get_preference(&self, user_id: i64) -> String {
        self.preferences
            .get(&user_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_else(|| self.default_language.clone())
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Number of users with an explicit preference.
    pub fn len(&self) -> usize {
        self.preferences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.preferences.is_empty()
    }
}
