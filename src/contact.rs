use crate::config::Config;
use crate::i18n::Locale;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;
use tracing::{info, warn};

/// Contact form as posted by the browser.
///
/// Every field defaults to empty so a partial post is reported through the
/// normal failure path instead of a framework rejection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, rename = "g-recaptcha-response")]
    pub recaptcha_token: Option<String>,
}

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("missing field: {0}")]
    MissingField(&'static str),

    #[error("invalid email address")]
    InvalidEmail,

    #[error("no contact endpoint configured")]
    NotConfigured,

    #[error("delivery request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("delivery rejected ({status}): {body}")]
    Rejected { status: u16, body: String },
}

/// What the visitor sees after a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    Success,
    Failure,
}

/// Payload sent to the message-delivery service
#[derive(Debug, Serialize)]
struct DeliveryRequest<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
    locale: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    recaptcha_token: Option<&'a str>,
}

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

impl ContactSubmission {
    /// Check that every field is filled in and the email looks like one.
    pub fn validate(&self) -> Result<(), ContactError> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }

        let regex = EMAIL_REGEX.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
        if !regex.is_match(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }

        Ok(())
    }
}

/// Forward a submission to the configured delivery endpoint.
///
/// One request, no retry: a failure is returned to the caller and the visitor
/// resubmits by hand.
pub async fn deliver(
    client: &reqwest::Client,
    config: &Config,
    locale: Locale,
    submission: &ContactSubmission,
) -> Result<(), ContactError> {
    submission.validate()?;

    let endpoint = config
        .contact_endpoint
        .as_deref()
        .ok_or(ContactError::NotConfigured)?;

    let request = DeliveryRequest {
        name: submission.name.trim(),
        email: submission.email.trim(),
        subject: submission.subject.trim(),
        message: submission.message.trim(),
        locale: locale.code(),
        recaptcha_token: submission
            .recaptcha_token
            .as_deref()
            .filter(|token| !token.is_empty()),
    };

    let response = client.post(endpoint).json(&request).send().await?;

    if !response.status().is_success() {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        return Err(ContactError::Rejected { status, body });
    }

    Ok(())
}

/// Deliver a submission and collapse the result to what the visitor sees.
pub async fn submit(
    client: &reqwest::Client,
    config: &Config,
    locale: Locale,
    submission: &ContactSubmission,
) -> ContactOutcome {
    match deliver(client, config, locale, submission).await {
        Ok(()) => {
            info!(locale = %locale, "Contact message delivered");
            ContactOutcome::Success
        }
        Err(e) => {
            warn!(locale = %locale, "Contact message not delivered: {}", e);
            ContactOutcome::Failure
        }
    }
}
