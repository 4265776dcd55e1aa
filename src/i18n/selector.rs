use crate::i18n::{Language, LanguageRegistry};
use anyhow::{Context, Result};
use tracing::debug;

/// One entry offered by the selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageOption {
    pub language: Language,
    /// Shown to the user in the language itself (e.g., "Türkçe")
    pub title: &'static str,
}

/// Holds the active language. Starts on the canonical language.
#[derive(Debug, Clone, Default)]
pub struct LanguageSelector {
    active: Language,
}

impl LanguageSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Language {
        self.active
    }

    pub fn options(&self) -> Vec<LanguageOption> {
        LanguageRegistry::get()
            .list_enabled()
            .into_iter()
            .filter_map(|config| {
                Language::from_code(config.code)
                    .ok()
                    .map(|language| LanguageOption {
                        language,
                        title: config.native_name,
                    })
            })
            .collect()
    }

    pub fn select(&mut self, language: Language) {
        debug!("Active language: {} -> {}", self.active.code(), language.code());
        self.active = language;
    }

    /// Select the language whose option title matches `title`.
    pub fn select_by_title(&mut self, title: &str) -> Result<Language> {
        let config = LanguageRegistry::get()
            .get_by_native_name(title)
            .with_context(|| format!("No language titled '{}'", title))?;
        let language = Language::from_code(config.code)?;
        self.select(language);
        Ok(language)
    }
}
