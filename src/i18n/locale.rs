//! Locale type: the two languages the site is published in.

use crate::i18n::{LocaleConfig, LocaleRegistry};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// One of the two supported locales.
///
/// Every rendered page is associated with exactly one `Locale` for its whole
/// lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English, the primary (default) locale
    En,
    /// Dutch, the secondary locale
    Nl,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown locale code: '{0}'")]
pub struct UnknownLocale(pub String);

impl Locale {
    /// Both locales, canonical first.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Nl];

    /// Create a Locale from an exact locale code ("en" or "nl").
    ///
    /// # Example
    /// ```
    /// use coach_site::i18n::Locale;
    ///
    /// assert_eq!(Locale::from_code("nl").unwrap(), Locale::Nl);
    /// assert!(Locale::from_code("NL").is_err());
    /// ```
    pub fn from_code(code: &str) -> Result<Locale, UnknownLocale> {
        match code {
            "en" => Ok(Locale::En),
            "nl" => Ok(Locale::Nl),
            other => Err(UnknownLocale(other.to_string())),
        }
    }

    /// The default locale, used whenever nothing better is known.
    pub fn canonical() -> Locale {
        match LocaleRegistry::get().canonical().code {
            "nl" => Locale::Nl,
            _ => Locale::En,
        }
    }

    /// ISO 639-1 code, also the URL path segment.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Nl => "nl",
        }
    }

    /// The other locale; what the language switch points at.
    pub fn other(&self) -> Locale {
        match self {
            Locale::En => Locale::Nl,
            Locale::Nl => Locale::En,
        }
    }

    /// Root path of this locale's page ("/en", "/nl").
    pub fn path(&self) -> String {
        format!("/{}", self.code())
    }

    /// Full registry entry for this locale.
    ///
    /// # Panics
    /// Panics if the registry has no entry for the code, which would mean the
    /// registry and this enum disagree.
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get()
            .get_by_code(self.code())
            .expect("every Locale variant has a registry entry")
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::canonical()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
