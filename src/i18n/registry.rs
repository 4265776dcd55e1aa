//! Language registry: Single source of truth for all supported languages.
//!
//! The registry is initialized once through `OnceLock` and is immutable
//! afterwards.

use crate::i18n::strings::{LanguageStrings, ENGLISH_STRINGS, TURKISH_STRINGS};
use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "tr")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Turkish")
    pub name: &'static str,

    /// Native name of the language, also used as the selector title
    pub native_name: &'static str,

    /// Whether this is the default language (exactly one should be true)
    pub is_canonical: bool,

    /// Whether this language is offered to users
    pub enabled: bool,

    /// Label table for this language
    pub strings: &'static LanguageStrings,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get a language configuration by its native name (the selector title).
    pub fn get_by_native_name(&self, native_name: &str) -> Option<&LanguageConfig> {
        self.languages
            .iter()
            .find(|lang| lang.native_name == native_name)
    }

    /// Get all enabled languages, in registry order.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// Get the canonical (default) language configuration.
    ///
    /// # Panics
    /// Panics if the registry does not define exactly one canonical language.
    pub fn canonical(&self) -> &LanguageConfig {
        let canonical_langs: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_canonical)
            .collect();

        match canonical_langs.len() {
            0 => panic!("No canonical language found in registry"),
            1 => canonical_langs[0],
            _ => panic!("Multiple canonical languages found in registry"),
        }
    }
}

/// English (canonical) and Turkish.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_canonical: true,
            enabled: true,
            strings: &ENGLISH_STRINGS,
        },
        LanguageConfig {
            code: "tr",
            name: "Turkish",
            native_name: "Türkçe",
            is_canonical: false,
            enabled: true,
            strings: &TURKISH_STRINGS,
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
    fn test_get_by_code_english() {
        let config = LanguageRegistry::get()
            .get_by_code("en")
            .expect("English should be registered");
        assert_eq!(config.name, "English");
        assert!(config.is_canonical);
        assert!(config.enabled);
        assert_eq!(config.strings.users, "Users");
    }

    #[test]
    fn test_get_by_code_turkish() {
        let config = LanguageRegistry::get()
            .get_by_code("tr")
            .expect("Turkish should be registered");
        assert_eq!(config.name, "Turkish");
        assert_eq!(config.native_name, "Türkçe");
        assert!(!config.is_canonical);
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        assert!(LanguageRegistry::get().get_by_code("fr").is_none());
    }

    #[test]
    fn test_get_by_native_name() {
        let registry = LanguageRegistry::get();
        assert_eq!(
            registry.get_by_native_name("Türkçe").map(|c| c.code),
            Some("tr")
        );
        assert!(registry.get_by_native_name("Turkish").is_none());
    }

    #[test]
    fn test_list_enabled_keeps_registry_order() {
        let codes: Vec<_> = LanguageRegistry::get()
            .list_enabled()
            .iter()
            .map(|c| c.code)
            .collect();
        assert_eq!(codes, vec!["en", "tr"]);
    }

    #[test]
    fn test_canonical_returns_english() {
        assert_eq!(LanguageRegistry::get().canonical().code, "en");
    }

}
