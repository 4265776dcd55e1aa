//! Language type: validated language representation.

use crate::i18n::{LabelKey, LanguageConfig, LanguageRegistry, LanguageStrings};
use anyhow::{bail, Result};

/// A language that has been validated against the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "tr")
    code: &'static str,
}

impl Language {
    pub const ENGLISH: Language = Language { code: "en" };

    pub const TURKISH: Language = Language { code: "tr" };

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is valid and the language is enabled
    /// * `Err` if the code is not found or the language is disabled
    pub fn from_code(code: &str) -> Result<Language> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Language { code: config.code }),
            Some(_) => bail!("Language '{}' is not enabled", code),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// Get the default language (English).
    pub fn canonical() -> Language {
        let config = LanguageRegistry::get().canonical();
        Language { code: config.code }
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the language code is not found in the registry. This cannot
    /// happen for values built via `from_code` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// The language name in its own language (e.g., "Türkçe").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }

    pub fn strings(&self) -> &'static LanguageStrings {
        self.config().strings
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::canonical()
    }
}

/// Resolve a label in the given language.
pub fn resolve(language: Language, key: LabelKey) -> &'static str {
    language.strings().get(key)
}

/// Resolve a label from untyped input.
///
/// Returns `None` for an unknown or disabled language code, or an unknown key.
pub fn resolve_code(code: &str, key: &str) -> Option<&'static str> {
    let language = Language::from_code(code).ok()?;
    let key = key.parse::<LabelKey>().ok()?;
    Some(resolve(language, key))
}
