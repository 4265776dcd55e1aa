//! Label table validation.
//!
//! Checks that every label is filled in and that navigation labels keep the
//! arrow that points the way they navigate.

use crate::i18n::{LabelKey, LanguageRegistry, LanguageStrings};

/// Validation report containing errors and warnings about a label table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that make a label unusable
    pub errors: Vec<String>,

    /// Problems that make a label inconsistent with the other languages
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate one language's label table.
pub fn validate_strings(strings: &LanguageStrings) -> ValidationReport {
    let mut report = ValidationReport::new();

    for key in LabelKey::ALL {
        if strings.get(key).trim().is_empty() {
            report.errors.push(format!("Label '{}' is empty", key));
        }
    }

    if !strings.next_page.trim_end().ends_with('>') {
        report.warnings.push(format!(
            "Label '{}' should end with '>': {:?}",
            LabelKey::NextPage,
            strings.next_page
        ));
    }

    if !strings.previous_page.trim_start().starts_with('<') {
        report.warnings.push(format!(
            "Label '{}' should start with '<': {:?}",
            LabelKey::PreviousPage,
            strings.previous_page
        ));
    }

    report
}

/// Validate every enabled language, pairing each report with its code.
pub fn validate_registry() -> Vec<(&'static str, ValidationReport)> {
    LanguageRegistry::get()
        .list_enabled()
        .into_iter()
        .map(|config| (config.code, validate_strings(config.strings)))
        .collect()
}
