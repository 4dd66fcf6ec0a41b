use crate::experience::coaching_years;
use crate::i18n::Facts;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::warn;

/// Secret used to sign the language-choice cookie when none is configured.
const DEV_PREFERENCE_SECRET: &str = "coach-site-development-preference-secret";

#[derive(Debug, Clone)]
pub struct Config {
    // Site
    pub site_url: String,
    pub port: u16,

    // Bot verification (reCAPTCHA), disabled when unset
    pub recaptcha_site_key: Option<String>,

    // Contact delivery
    pub contact_endpoint: Option<String>,
    pub contact_timeout_secs: u64,

    // Signing key for the manual language choice cookie
    pub preference_secret: String,

    // Numbers shown in the copy
    pub clients_coached: u32,
    pub camp_minimum: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let preference_secret = match non_empty_var("PREFERENCE_SECRET") {
            Some(secret) => secret,
            None => {
                warn!("PREFERENCE_SECRET not set, using development signing key");
                DEV_PREFERENCE_SECRET.to_string()
            }
        };

        Ok(Self {
            // Site
            site_url: non_empty_var("SITE_URL")
                .unwrap_or_else(|| "https://www.pellegrims.coach".to_string())
                .trim_end_matches('/')
                .to_string(),
            port: match non_empty_var("PORT") {
                Some(port) => port.parse().context("PORT must be a valid port number")?,
                None => 8080,
            },

            // Bot verification
            recaptcha_site_key: non_empty_var("RECAPTCHA_SITE_KEY"),

            // Contact delivery
            contact_endpoint: non_empty_var("CONTACT_ENDPOINT"),
            contact_timeout_secs: std::env::var("CONTACT_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),

            preference_secret,

            // Copy
            clients_coached: std::env::var("CLIENTS_COACHED")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(200),
            camp_minimum: std::env::var("CAMP_MINIMUM")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(6),
        })
    }

    /// Whether the bot-verification script should be loaded.
    pub fn recaptcha_enabled(&self) -> bool {
        self.recaptcha_site_key.is_some()
    }

    /// Facts for one render on `today`.
    pub fn facts(&self, today: NaiveDate) -> Facts {
        Facts {
            years_of_experience: coaching_years(today),
            clients_coached: self.clients_coached,
            camp_minimum: self.camp_minimum,
        }
    }

    /// Whether cookies should carry the `Secure` attribute.
    pub fn is_https(&self) -> bool {
        self.site_url.starts_with("https://")
    }
}

/// Read an environment variable, treating an empty value as unset.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
