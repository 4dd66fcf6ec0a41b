//! Internationalization (i18n) module for the English/Dutch site.
//!
//! All locale logic, the translation dictionary and its validation live here.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for the supported locales and their metadata
//! - `locale`: The `Locale` type
//! - `resolver`: Picks a locale from a path segment and an `Accept-Language` value
//! - `strings`: The dictionary, one row per key path with both translations
//! - `tree`: Per-locale lookup with placeholder interpolation
//! - `validator`: Startup validation of the dictionary
//! - `metrics`: Lookup hit/miss counters
//!
//! # Example
//!
//! ```rust
//! use coach_site::i18n::{resolve_locale, Facts, Translations};
//!
//! let locale = resolve_locale(None, Some("nl-BE,nl;q=0.9"));
//! let facts = Facts { years_of_experience: 15, clients_coached: 200, camp_minimum: 6 };
//! let tree = Translations::for_locale(locale, facts);
//!
//! assert_eq!(tree.text("nav.projects"), "Projecten");
//! ```

mod locale;
mod metrics;
mod registry;
mod resolver;
pub mod strings;
mod tree;
mod validator;

pub use locale::{Locale, UnknownLocale};
pub use metrics::{LookupMetrics, MetricsReport};
pub use registry::{LocaleConfig, LocaleRegistry};
pub use resolver::resolve_locale;
pub use tree::{interpolate, Facts, TranslationTree, Translations};
pub use validator::{DictionaryValidator, ValidationReport};
