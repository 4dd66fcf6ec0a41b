//! Bilingual (English/Dutch) website for a swimming and triathlon coach.
//!
//! The site is rendered on the server, one page per locale, with SEO metadata
//! and schema.org records. See `server::router` for the routes.

pub mod config;
pub mod contact;
pub mod experience;
pub mod i18n;
pub mod page;
pub mod preference;
pub mod security;
pub mod seo;
pub mod server;

use anyhow::{bail, Result};
use i18n::{DictionaryValidator, Translations};
use tracing::{info, warn};

/// Validate the translation dictionary, refusing to continue on errors.
pub fn check_dictionary() -> Result<()> {
    let report = DictionaryValidator::validate(Translations::entries());

    for warning in &report.warnings {
        warn!("Dictionary: {}", warning);
    }

    if report.has_errors() {
        bail!(
            "Translation dictionary has {} error(s):\n{}",
            report.errors.len(),
            report.errors.join("\n")
        );
    }

    info!(
        "Dictionary validated: {} key paths in both locales",
        Translations::entries().len()
    );
    Ok(())
}
