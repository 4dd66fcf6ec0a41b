//! Search-engine metadata: `<head>` tags and JSON-LD records.

mod metadata;
mod structured_data;

pub use metadata::{head, OG_IMAGE_PATH};
pub use structured_data::{script_tags, structured_data};

use crate::i18n::Locale;

/// Public URL of a locale's page. The canonical locale lives at the site root.
pub fn page_url(site_url: &str, locale: Locale) -> String {
    if locale.is_canonical() {
        site_url.to_string()
    } else {
        format!("{}{}", site_url, locale.path())
    }
}
