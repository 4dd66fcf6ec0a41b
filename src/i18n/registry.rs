//! Locale registry: Single source of truth for the site's two locales.
//!
//! The registry holds the per-locale metadata the page and SEO layers need
//! (display names, Open Graph locale, hreflang tag). It is built once on first
//! access with `OnceLock` and never changes afterwards.

use std::sync::OnceLock;

/// Configuration for a supported locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// ISO 639-1 language code, also used as the URL path segment ("en", "nl")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Dutch")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "Nederlands")
    pub native_name: &'static str,

    /// Open Graph locale tag (e.g., "en_US", "nl_BE")
    pub og_locale: &'static str,

    /// hreflang tag used for alternate links (e.g., "en-US", "nl-BE")
    pub hreflang: &'static str,

    /// Whether this is the default locale (exactly one should be true)
    pub is_canonical: bool,
}

/// Global locale registry singleton.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Get a locale configuration by its code.
    ///
    /// Matching is exact: "NL" or "nl-BE" are not locale codes.
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// Get the canonical (default) locale configuration.
    ///
    /// # Panics
    /// Panics if the registry does not define exactly one canonical locale.
    pub fn canonical(&self) -> &LocaleConfig {
        let canonical: Vec<_> = self
            .locales
            .iter()
            .filter(|locale| locale.is_canonical)
            .collect();

        match canonical.len() {
            0 => panic!("No canonical locale found in registry"),
            1 => canonical[0],
            _ => panic!("Multiple canonical locales found in registry"),
        }
    }
}

fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "en",
            name: "English",
            native_name: "English",
            og_locale: "en_US",
            hreflang: "en-US",
            is_canonical: true,
        },
        LocaleConfig {
            code: "nl",
            name: "Dutch",
            native_name: "Nederlands",
            og_locale: "nl_BE",
            hreflang: "nl-BE",
            is_canonical: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LocaleRegistry::get();
        let registry2 = LocaleRegistry::get();

        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_code_english() {
        let config = LocaleRegistry::get().get_by_code("en").unwrap();

        assert_eq!(config.name, "English");
        assert_eq!(config.og_locale, "en_US");
        assert_eq!(config.hreflang, "en-US");
        assert!(config.is_canonical);
    }

    #[test]
    fn test_get_by_code_dutch() {
        let config = LocaleRegistry::get().get_by_code("nl").unwrap();

        assert_eq!(config.name, "Dutch");
        assert_eq!(config.native_name, "Nederlands");
        assert_eq!(config.og_locale, "nl_BE");
        assert_eq!(config.hreflang, "nl-BE");
        assert!(!config.is_canonical);
    }

    #[test]
    fn test_get_by_code_is_exact() {
        let registry = LocaleRegistry::get();
        assert!(registry.get_by_code("NL").is_none());
        assert!(registry.get_by_code("nl-BE").is_none());
        assert!(registry.get_by_code("fr").is_none());
        assert!(registry.get_by_code("").is_none());
    }

    #[test]
    fn test_canonical_returns_english() {
        assert_eq!(LocaleRegistry::get().canonical().code, "en");
    }
}
