//! Preview binary - renders the page for one locale without starting the server
//!
//! Usage:
//!   cargo run --bin preview                              # English page, today
//!   cargo run --bin preview -- --locale nl               # Dutch page
//!   cargo run --bin preview -- --date 2024-08-31         # As rendered on a given day
//!   cargo run --bin preview -- --locale nl --contact sent
//!
//! Reads the same environment as the server (SITE_URL, RECAPTCHA_SITE_KEY,
//! CLIENTS_COACHED, CAMP_MINIMUM, ...). The HTML goes to stdout, logs to stderr.

use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, Utc};
use coach_site::config::Config;
use coach_site::contact::ContactSubmission;
use coach_site::i18n::{Locale, LookupMetrics};
use coach_site::page::{render_page, ContactState};
use tracing::{info, warn};

struct PreviewArgs {
    locale: Locale,
    date: NaiveDate,
    contact: ContactState,
}

impl PreviewArgs {
    fn parse(args: &[String]) -> Result<Self> {
        let mut locale = Locale::canonical();
        let mut date = Utc::now().date_naive();
        let mut contact = ContactState::Idle;

        let mut iter = args.iter().skip(1);
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--locale" => {
                    let code = iter.next().context("--locale needs a value")?;
                    locale = Locale::from_code(code)?;
                }
                "--date" => {
                    let value = iter.next().context("--date needs a value")?;
                    date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
                        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", value))?;
                }
                "--contact" => {
                    contact = match iter.next().map(String::as_str) {
                        Some("idle") => ContactState::Idle,
                        Some("sent") => ContactState::Sent,
                        Some("failed") => ContactState::Failed(ContactSubmission::default()),
                        other => bail!("--contact expects idle, sent or failed, got {:?}", other),
                    };
                }
                other => bail!("Unknown argument: {}", other),
            }
        }

        Ok(Self {
            locale,
            date,
            contact,
        })
    }
}

fn main() -> Result<()> {
    // Initialize logging (stderr, so stdout stays pure HTML)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("coach_site=info".parse()?),
        )
        .init();

    // Load environment from .env file
    dotenvy::dotenv().ok();

    let args: Vec<String> = std::env::args().collect();
    let args = PreviewArgs::parse(&args)?;
    let config = Config::from_env()?;

    info!(
        locale = %args.locale,
        date = %args.date,
        "Rendering preview"
    );

    let html = render_page(args.locale, &config, args.date, &args.contact);
    println!("{}", html);

    let report = LookupMetrics::global().report();
    if report.misses > 0 {
        warn!("{} translation lookups missed", report.misses);
    }

    Ok(())
}
