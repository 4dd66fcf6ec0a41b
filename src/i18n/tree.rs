//! Translation trees: the dictionary seen through one locale.

use crate::experience::{format_years, YearsDisplay};
use crate::i18n::strings::{Entry, ENTRIES};
use crate::i18n::{Locale, LookupMetrics};
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::warn;

/// Numeric facts interpolated into translated strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Facts {
    /// Whole years since the coaching career started
    pub years_of_experience: u32,

    /// Number of clients coached, shown as "{clients}+"
    pub clients_coached: u32,

    /// Minimum number of athletes for a training camp
    pub camp_minimum: u32,
}

/// Key path index over `ENTRIES` (built once).
static INDEX: OnceLock<HashMap<&'static str, &'static Entry>> = OnceLock::new();

fn index() -> &'static HashMap<&'static str, &'static Entry> {
    INDEX.get_or_init(|| ENTRIES.iter().map(|entry| (entry.key, entry)).collect())
}

/// Entry point for translation lookup.
pub struct Translations;

impl Translations {
    /// Select the translation tree for a locale.
    ///
    /// There is no fallback between locales: each tree is complete on its own.
    pub fn for_locale(locale: Locale, facts: Facts) -> TranslationTree {
        TranslationTree { locale, facts }
    }

    /// All dictionary rows, in authoring order.
    pub fn entries() -> &'static [Entry] {
        ENTRIES
    }
}

/// Read-only view of the dictionary for one locale and one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslationTree {
    locale: Locale,
    facts: Facts,
}

impl TranslationTree {
    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn facts(&self) -> Facts {
        self.facts
    }

    /// Look up a key path and fill in its placeholders.
    ///
    /// A missing key is an authoring defect. The key itself is returned so the
    /// page still renders, and the miss is logged and counted.
    pub fn text(&self, key: &str) -> Cow<'static, str> {
        match index().get(key) {
            Some(entry) => {
                LookupMetrics::global().record_hit();
                interpolate(entry.template(self.locale), &self.facts)
            }
            None => {
                LookupMetrics::global().record_miss();
                warn!(key, locale = %self.locale, "Missing translation key");
                Cow::Owned(key.to_string())
            }
        }
    }

    /// Every key path with its final text, in authoring order.
    pub fn entries(&self) -> Vec<(&'static str, Cow<'static, str>)> {
        ENTRIES
            .iter()
            .map(|entry| (entry.key, interpolate(entry.template(self.locale), &self.facts)))
            .collect()
    }
}

/// Substitute `{years}`, `{clients}` and `{camp_min}` in a template.
pub fn interpolate(template: &'static str, facts: &Facts) -> Cow<'static, str> {
    if !template.contains('{') {
        return Cow::Borrowed(template);
    }

    Cow::Owned(
        template
            .replace(
                "{years}",
                &format_years(facts.years_of_experience, YearsDisplay::Bare),
            )
            .replace("{clients}", &facts.clients_coached.to_string())
            .replace("{camp_min}", &facts.camp_minimum.to_string()),
    )
}
