//! Locale resolution.

use crate::i18n::Locale;

/// Resolve the locale for a request.
///
/// Resolution order:
/// 1. `explicit` path segment, when it is exactly a supported locale code
/// 2. `nl` when the language-preference signal mentions "nl" (any case)
/// 3. the canonical locale (`en`)
///
/// The signal is usually the raw `Accept-Language` header. This function never
/// fails: anything unrecognised falls through to the default.
///
/// # Example
///
/// ```
/// use coach_site::i18n::{resolve_locale, Locale};
///
/// assert_eq!(resolve_locale(Some("nl"), Some("en-US")), Locale::Nl);
/// assert_eq!(resolve_locale(None, Some("nl-BE,nl;q=0.9")), Locale::Nl);
/// assert_eq!(resolve_locale(None, Some("en-US")), Locale::En);
/// assert_eq!(resolve_locale(None, None), Locale::En);
/// ```
pub fn resolve_locale(explicit: Option<&str>, signal: Option<&str>) -> Locale {
    if let Some(locale) = explicit.and_then(|code| Locale::from_code(code).ok()) {
        return locale;
    }

    let prefers_secondary = signal
        .map(|value| value.to_ascii_lowercase().contains(Locale::Nl.code()))
        .unwrap_or(false);

    if prefers_secondary {
        Locale::Nl
    } else {
        Locale::canonical()
    }
}
