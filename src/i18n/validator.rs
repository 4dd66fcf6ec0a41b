//! Dictionary validation.
//!
//! Checks that every row of the translation dictionary is usable in both
//! locales: no duplicated key paths, no empty text, and the same placeholders
//! and URLs on both sides of a row. Run once at startup.

use crate::i18n::strings::{Entry, PLACEHOLDERS};
use regex::Regex;
use std::collections::{BTreeSet, HashSet};
use std::sync::OnceLock;

/// Validation report containing errors and warnings about the dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Defects that make a row unusable
    pub errors: Vec<String>,

    /// Suspicious rows that still render
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

/// Validator for the translation dictionary.
pub struct DictionaryValidator;

// Regex patterns for extraction (cached for performance)
static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();
static URL_REGEX: OnceLock<Regex> = OnceLock::new();

impl DictionaryValidator {
    /// Validate a set of dictionary rows.
    ///
    /// Errors:
    /// - a key path appears more than once
    /// - a text is empty in either locale
    /// - the two locales use different placeholders
    /// - a placeholder is not one the lookup knows how to fill
    ///
    /// Warnings:
    /// - the two locales mention different URLs
    pub fn validate(entries: &[Entry]) -> ValidationReport {
        let mut report = ValidationReport::new();
        let mut seen = HashSet::new();

        for entry in entries {
            if !seen.insert(entry.key) {
                report
                    .errors
                    .push(format!("Duplicate key path: {}", entry.key));
            }

            if entry.en.trim().is_empty() {
                report.errors.push(format!("Empty en text: {}", entry.key));
            }
            if entry.nl.trim().is_empty() {
                report.errors.push(format!("Empty nl text: {}", entry.key));
            }

            let en_placeholders = Self::extract_placeholders(entry.en);
            let nl_placeholders = Self::extract_placeholders(entry.nl);
            if en_placeholders != nl_placeholders {
                report.errors.push(format!(
                    "Placeholder mismatch in {}: en has {:?}, nl has {:?}",
                    entry.key, en_placeholders, nl_placeholders
                ));
            }

            for name in en_placeholders.union(&nl_placeholders) {
                if !PLACEHOLDERS.contains(&name.as_str()) {
                    report.errors.push(format!(
                        "Unknown placeholder {{{}}} in {}",
                        name, entry.key
                    ));
                }
            }

            let en_urls = Self::extract_urls(entry.en);
            let nl_urls = Self::extract_urls(entry.nl);
            if en_urls != nl_urls {
                report.warnings.push(format!(
                    "URL mismatch in {}: en has {} URLs, nl has {} URLs",
                    entry.key,
                    en_urls.len(),
                    nl_urls.len()
                ));
            }
        }

        report
    }

    /// Extract all `{name}` placeholders from text
    fn extract_placeholders(text: &str) -> BTreeSet<String> {
        let regex = PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\{([a-z_]+)\}").unwrap());

        regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }

    /// Extract all URLs from text
    fn extract_urls(text: &str) -> Vec<String> {
        let regex = URL_REGEX.get_or_init(|| Regex::new(r"https?://[^\s)\]]+").unwrap());

        regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
